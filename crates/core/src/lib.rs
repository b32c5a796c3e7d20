pub mod errors;
pub mod logging;
pub mod models;
pub mod providers;
pub mod services;

use chrono::{DateTime, Utc};
use models::{
    activity::Activity,
    indicator::IndicatorSet,
    pagination::Pagination,
    query::ActivityQuery,
    settings::Settings,
};
use providers::{carbon_api::CarbonApiProvider, traits::ActivityProvider};
use services::{
    activity_service::{ActivityFilter, ActivityService},
    indicator_service::IndicatorService,
    notification_service::TradeNotifier,
};

use errors::CoreError;

/// Main entry point for the activity feed.
/// Holds the current activity list and all services needed to present it.
#[must_use]
pub struct ActivityFeed {
    settings: Settings,
    provider: Box<dyn ActivityProvider>,
    activities: Vec<Activity>,
    pagination: Pagination,
    activity_service: ActivityService,
    indicator_service: IndicatorService,
}

impl std::fmt::Debug for ActivityFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityFeed")
            .field("provider", &self.provider.name())
            .field("activities", &self.activities.len())
            .field("pagination", &self.pagination)
            .field("settings", &self.settings)
            .finish()
    }
}

impl ActivityFeed {
    /// Feed backed by the activity API configured in `settings`.
    pub fn new(settings: Settings) -> Result<Self, CoreError> {
        let provider = CarbonApiProvider::new(settings.api_base_url.clone());
        Self::with_provider(settings, Box::new(provider))
    }

    /// Feed backed by a custom provider.
    pub fn with_provider(
        settings: Settings,
        provider: Box<dyn ActivityProvider>,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        let pagination = Pagination::new(settings.default_page_limit, 0)?;
        let indicator_service =
            IndicatorService::with_week_threshold(settings.week_granularity_threshold);
        Ok(Self {
            settings,
            provider,
            activities: Vec::new(),
            pagination,
            activity_service: ActivityService::new(),
            indicator_service,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Replace the current list with the provider's answer to `query`.
    /// On error the previous list is kept.
    pub async fn load(&mut self, query: &ActivityQuery) -> Result<usize, CoreError> {
        let activities = self.provider.get_activities(query).await?;
        self.set_activities(activities);
        Ok(self.activities.len())
    }

    /// Replace the current list with activities fetched elsewhere.
    pub fn set_activities(&mut self, activities: Vec<Activity>) {
        self.activities = activities;
        self.pagination.set_total(self.activities.len());
    }

    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    // ── Listing ─────────────────────────────────────────────────────

    /// Activities matching `filter`, newest first.
    #[must_use]
    pub fn filtered(&self, filter: &ActivityFilter) -> Vec<&Activity> {
        self.activity_service.filter(&self.activities, filter)
    }

    /// The rows of the current table page.
    #[must_use]
    pub fn current_page(&self) -> &[Activity] {
        self.pagination.slice(&self.activities)
    }

    #[must_use]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Page navigation (first/previous/next/last, page size).
    pub fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }

    #[must_use]
    pub fn describe(&self, activity: &Activity) -> String {
        self.activity_service.describe(activity)
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Chart markers for the current activities over an axis domain
    /// (tick values in Unix seconds).
    pub fn indicators<S: AsRef<str>>(&self, domain: &[S]) -> Result<IndicatorSet, CoreError> {
        self.indicator_service
            .group_by_indicators(&self.activities, domain)
    }

    // ── Notifications ───────────────────────────────────────────────

    /// A notifier watching for trades from `since`, sized by the settings.
    pub fn trade_notifier(&self, since: DateTime<Utc>) -> TradeNotifier {
        TradeNotifier::new(
            since,
            self.settings.notification_limit,
            self.settings.notifications_enabled,
        )
    }

    /// Poll `notifier` through this feed's provider.
    pub async fn poll_notifications(
        &self,
        notifier: &mut TradeNotifier,
        user: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Vec<services::notification_service::TradeNotification>, CoreError> {
        notifier.poll(self.provider.as_ref(), user, now).await
    }
}
