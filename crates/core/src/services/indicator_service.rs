use std::collections::BTreeMap;

use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::activity::Activity;
use crate::models::indicator::{Indicator, IndicatorSet};
use crate::services::bucketizer::DomainAxis;

/// Groups activities into chart indicators.
///
/// Stateless: every call recomputes both collections from the activity
/// list and the axis domain it is given.
pub struct IndicatorService {
    week_threshold: usize,
}

impl IndicatorService {
    /// Service using the default day/week switch (more than 60 points → weeks).
    pub fn new() -> Self {
        Self::with_week_threshold(60)
    }

    pub fn with_week_threshold(week_threshold: usize) -> Self {
        Self { week_threshold }
    }

    /// Build the operation and trade markers for an axis domain
    /// (tick values in Unix seconds, as strings).
    ///
    /// Each activity lands in exactly one bucket of exactly one collection.
    /// Both collections are ordered by bucket time.
    pub fn group_by_indicators<S: AsRef<str>>(
        &self,
        activities: &[Activity],
        domain: &[S],
    ) -> Result<IndicatorSet, CoreError> {
        let axis = DomainAxis::parse(domain, self.week_threshold)?;
        self.group_on_axis(activities, &axis)
    }

    /// Same as [`group_by_indicators`](Self::group_by_indicators) for an
    /// already parsed axis.
    pub fn group_on_axis(
        &self,
        activities: &[Activity],
        axis: &DomainAxis,
    ) -> Result<IndicatorSet, CoreError> {
        if activities.is_empty() {
            return Ok(IndicatorSet::default());
        }

        let mut operations: BTreeMap<i64, Indicator> = BTreeMap::new();
        let mut trades: BTreeMap<i64, Indicator> = BTreeMap::new();

        for activity in activities {
            let key = axis.bucket_for(activity.date).ok_or(CoreError::EmptyDomain)?;
            let list = if activity.is_trade() {
                &mut trades
            } else {
                &mut operations
            };
            list.entry(key)
                .or_insert_with(|| Indicator {
                    x: key,
                    y: 0.0,
                    label: axis.label(activity.date),
                    activities: Vec::new(),
                })
                .activities
                .push(activity.clone());
        }

        for indicator in trades.values_mut() {
            indicator.y = representative_price(&indicator.activities);
        }

        debug!(
            operations = operations.len(),
            trades = trades.len(),
            granularity = %axis.granularity(),
            "Grouped activities into indicators"
        );

        Ok(IndicatorSet {
            operations: operations.into_values().collect(),
            trades: trades.into_values().collect(),
        })
    }
}

impl Default for IndicatorService {
    fn default() -> Self {
        Self::new()
    }
}

/// Mean of `buy delta / sell delta` over the activities recording both,
/// as an absolute display value.
///
/// Activities lacking either delta are ignored, and so is a zero sell
/// delta. A bucket where nothing contributes is worth 0.
#[must_use]
pub fn representative_price(activities: &[Activity]) -> f64 {
    let mut sum = BigDecimal::zero();
    let mut count: u64 = 0;

    for activity in activities {
        let (Some(buy), Some(sell)) = (activity.buy_budget_change(), activity.sell_budget_change())
        else {
            continue;
        };
        if sell.is_zero() {
            warn!(tx = %activity.tx_hash, "Skipping trade with zero sell budget change");
            continue;
        }
        sum += buy / sell;
        count += 1;
    }

    if count == 0 {
        return 0.0;
    }
    (sum / BigDecimal::from(count)).abs().to_f64().unwrap_or(0.0)
}
