use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use tracing::debug;

use crate::errors::CoreError;
use crate::models::indicator::Granularity;

/// One chart bucket boundary.
#[derive(Debug, Clone, Copy)]
struct Boundary {
    /// Unix seconds, as given by the axis
    key: i64,
    /// First day of the day/week this boundary falls in
    period: NaiveDate,
}

/// The chart's horizontal axis, prepared for bucket lookups.
///
/// Boundaries are sorted once; each lookup is a binary search over their
/// periods, so bucketing is O(activities × log(points)).
#[derive(Debug, Clone)]
pub struct DomainAxis {
    boundaries: Vec<Boundary>,
    granularity: Granularity,
}

impl DomainAxis {
    /// Parse axis tick values (Unix seconds as strings).
    ///
    /// More than `week_threshold` points switches to week granularity.
    pub fn parse<S: AsRef<str>>(domain: &[S], week_threshold: usize) -> Result<Self, CoreError> {
        let keys = domain
            .iter()
            .map(|d| {
                let raw = d.as_ref().trim();
                raw.parse::<i64>()
                    .map_err(|_| CoreError::InvalidDomainPoint(raw.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_timestamps(keys, week_threshold)
    }

    pub fn from_timestamps(mut keys: Vec<i64>, week_threshold: usize) -> Result<Self, CoreError> {
        let granularity = if keys.len() > week_threshold {
            Granularity::Week
        } else {
            Granularity::Day
        };
        keys.sort_unstable();
        keys.dedup();

        let boundaries = keys
            .into_iter()
            .map(|key| {
                let date = DateTime::from_timestamp(key, 0)
                    .ok_or_else(|| CoreError::InvalidDomainPoint(key.to_string()))?;
                Ok(Boundary {
                    key,
                    period: period_start(date, granularity),
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        debug!(points = boundaries.len(), %granularity, "Prepared chart domain");
        Ok(Self {
            boundaries,
            granularity,
        })
    }

    #[must_use]
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Bucket key for `date`: the earliest boundary in the same day/week,
    /// or the last boundary when none matches.
    ///
    /// Returns `None` only for an empty axis.
    #[must_use]
    pub fn bucket_for(&self, date: DateTime<Utc>) -> Option<i64> {
        let target = period_start(date, self.granularity);
        let idx = self.boundaries.partition_point(|b| b.period < target);
        match self.boundaries.get(idx) {
            Some(b) if b.period == target => Some(b.key),
            _ => self.ceiling_fallback(),
        }
    }

    /// Activities outside every bucket collapse into the final one.
    fn ceiling_fallback(&self) -> Option<i64> {
        self.boundaries.last().map(|b| b.key)
    }

    /// Tooltip label for an activity date at this axis' granularity.
    #[must_use]
    pub fn label(&self, date: DateTime<Utc>) -> String {
        match self.granularity {
            Granularity::Day => display_day(date.date_naive()),
            Granularity::Week => {
                let monday = period_start(date, Granularity::Week);
                let sunday = monday + Duration::days(6);
                format!("{} – {}", display_day(monday), display_day(sunday))
            }
        }
    }
}

/// First calendar day of the period containing `date`.
fn period_start(date: DateTime<Utc>, granularity: Granularity) -> NaiveDate {
    let day = date.date_naive();
    match granularity {
        Granularity::Day => day,
        Granularity::Week => {
            day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
        }
    }
}

fn display_day(day: NaiveDate) -> String {
    day.format("%-m/%-d/%Y").to_string()
}
