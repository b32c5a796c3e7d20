use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A quick-pick entry of the date range picker ("Last 30 days" …).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePreset {
    pub label: String,
    /// How many days before today the range starts. Today counts as a day,
    /// so "Last 7 days" goes back 6.
    pub days: i64,
}

impl DatePreset {
    pub fn new(label: impl Into<String>, days: i64) -> Self {
        Self {
            label: label.into(),
            days,
        }
    }
}

/// The presets shown next to the activity calendar.
#[must_use]
pub fn default_presets() -> Vec<DatePreset> {
    vec![
        DatePreset::new("Last 7 days", 6),
        DatePreset::new("Last 30 days", 29),
        DatePreset::new("Last 90 days", 89),
        DatePreset::new("Last 365 days", 364),
    ]
}

/// Inclusive UTC time range used to filter activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::ValidationError(format!(
                "Range start ({start}) must not be after its end ({end})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Range ending `now` and starting `days` before it.
    #[must_use]
    pub fn from_preset(now: DateTime<Utc>, days: i64) -> Self {
        Self {
            start: now - Duration::days(days),
            end: now,
        }
    }

    /// Build a range from a calendar selection where either bound may be
    /// missing: a lone start covers that whole day, as does a lone end.
    pub fn confirm(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, CoreError> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            (Some(start), None) => Self::new(start, end_of_day(start)),
            (None, Some(end)) => Self::new(start_of_day(end), end),
            (None, None) => Err(CoreError::ValidationError(
                "A date range needs at least one bound".into(),
            )),
        }
    }

    /// The preset this range corresponds to, if both ends fall on the
    /// preset's days relative to `now`.
    #[must_use]
    pub fn selected_preset<'a>(
        &self,
        presets: &'a [DatePreset],
        now: DateTime<Utc>,
    ) -> Option<&'a DatePreset> {
        presets.iter().find(|p| {
            let from = now - Duration::days(p.days);
            from.date_naive() == self.start.date_naive()
                && self.end.date_naive() == now.date_naive()
        })
    }

    #[must_use]
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        date >= self.start && date <= self.end
    }

    /// `(start, end)` in Unix seconds, as sent to the activity API.
    #[must_use]
    pub fn to_unix(&self) -> (i64, i64) {
        (self.start.timestamp(), self.end.timestamp())
    }
}

fn start_of_day(date: DateTime<Utc>) -> DateTime<Utc> {
    date.date_naive().and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day(date: DateTime<Utc>) -> DateTime<Utc> {
    // 23:59:59 is always valid, so the fallback is unreachable.
    let last_second = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
    date.date_naive().and_time(last_second).and_utc()
}
