use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CoreError;
use crate::models::activity::Activity;
use crate::models::query::ActivityQuery;
use crate::models::token::Token;
use crate::providers::traits::ActivityProvider;
use crate::services::activity_service::ActivityFilter;

/// A toast announcing someone else's trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeNotification {
    /// e.g. "ETH/USDC Trade"
    pub title: String,
    /// Link target of the pair's activity page
    pub pair_slug: String,
    pub strategy_id: String,
    pub date: DateTime<Utc>,
}

impl TradeNotification {
    fn from_activity(activity: &Activity) -> Self {
        let strategy = &activity.strategy;
        Self {
            title: format!("{}/{} Trade", strategy.base.symbol, strategy.quote.symbol),
            pair_slug: pair_slug(&strategy.base, &strategy.quote),
            strategy_id: strategy.id.clone(),
            date: activity.date,
        }
    }
}

/// `base_quote`, lower-cased token addresses.
#[must_use]
pub fn pair_slug(base: &Token, quote: &Token) -> String {
    format!("{}_{}", base.address, quote.address).to_lowercase()
}

/// Polls for trades made since the previous poll.
pub struct TradeNotifier {
    last_fetch: DateTime<Utc>,
    limit: usize,
    enabled: bool,
}

impl TradeNotifier {
    /// Start watching from `since`, fetching at most `limit` activities per poll.
    pub fn new(since: DateTime<Utc>, limit: usize, enabled: bool) -> Self {
        Self {
            last_fetch: since,
            limit,
            enabled,
        }
    }

    #[must_use]
    pub fn last_fetch(&self) -> DateTime<Utc> {
        self.last_fetch
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Fetch activities since the last poll and turn other users' trades
    /// into notifications. The watermark only moves forward on success.
    pub async fn poll(
        &mut self,
        provider: &dyn ActivityProvider,
        user: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Vec<TradeNotification>, CoreError> {
        let query = ActivityQuery {
            start: Some(self.last_fetch.timestamp()),
            limit: Some(self.limit),
            ..ActivityQuery::default()
        };
        let activities = provider.get_activities(&query).await?;
        self.last_fetch = now;

        if !self.enabled {
            return Ok(Vec::new());
        }

        let filter = ActivityFilter {
            exclude_owner: user.map(str::to_string),
            ..ActivityFilter::trades()
        };
        let notifications: Vec<TradeNotification> = activities
            .iter()
            .filter(|a| filter.matches(a))
            .take(self.limit)
            .map(TradeNotification::from_activity)
            .collect();

        debug!(
            fetched = activities.len(),
            notified = notifications.len(),
            provider = provider.name(),
            "Polled trade notifications"
        );
        Ok(notifications)
    }
}
