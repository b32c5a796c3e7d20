use serde::{Deserialize, Serialize};

use super::activity::Activity;

/// Time resolution used to match activities against chart buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    /// Same calendar day (UTC)
    Day,
    /// Same ISO week (Monday to Sunday, UTC)
    Week,
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Granularity::Day => write!(f, "Day"),
            Granularity::Week => write!(f, "Week"),
        }
    }
}

/// A marker drawn on the chart for one bucket.
///
/// The core computes position and value — the frontend only draws the
/// glyph and the hover tooltip listing `activities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    /// Bucket boundary, in Unix seconds (one of the domain points)
    pub x: i64,

    /// Representative price for trade buckets, 0 for operations
    pub y: f64,

    /// Formatted day or week the bucket covers
    pub label: String,

    /// Every activity routed into this bucket, in input order
    pub activities: Vec<Activity>,
}

/// The two marker collections of the activity overlay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    /// Non-trade activities (drawn as diamonds on the timeline)
    pub operations: Vec<Indicator>,

    /// Buy/sell activities (drawn as circles at their price)
    pub trades: Vec<Indicator>,
}

impl IndicatorSet {
    /// Total number of activities across both collections.
    #[must_use]
    pub fn activity_count(&self) -> usize {
        self.operations
            .iter()
            .chain(self.trades.iter())
            .map(|i| i.activities.len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty() && self.trades.is_empty()
    }
}
