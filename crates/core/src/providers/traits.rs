use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::activity::Activity;
use crate::models::query::ActivityQuery;

/// Source of strategy activities.
///
/// The activity API is the only production source; tests and offline
/// tools plug in their own implementation.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ActivityProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the activities matching `query`, in the order the source returns them.
    async fn get_activities(&self, query: &ActivityQuery) -> Result<Vec<Activity>, CoreError>;
}
