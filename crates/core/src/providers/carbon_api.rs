use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::info;

use crate::errors::CoreError;
use crate::models::activity::Activity;
use crate::models::query::ActivityQuery;
use super::traits::ActivityProvider;

const PROVIDER_NAME: &str = "CarbonApi";

/// The public activity API.
///
/// - **Endpoint**: `GET {base_url}/activity`
/// - **Params**: `start`, `end`, `limit`, `offset`, `actions`, `ownerId`, `strategyIds`
/// - **Body**: JSON array of activities, dates in Unix seconds, amounts as decimal strings
pub struct CarbonApiProvider {
    client: Client,
    base_url: String,
}

impl CarbonApiProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn activity_url(&self) -> String {
        format!("{}/activity", self.base_url)
    }
}

/// Decode an activity API response body.
pub fn parse_activities(body: &str) -> Result<Vec<Activity>, CoreError> {
    serde_json::from_str(body).map_err(|e| CoreError::Api {
        provider: PROVIDER_NAME.into(),
        message: format!("Failed to parse activities: {e}"),
    })
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ActivityProvider for CarbonApiProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn get_activities(&self, query: &ActivityQuery) -> Result<Vec<Activity>, CoreError> {
        let resp = self
            .client
            .get(self.activity_url())
            .query(&query.to_params())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message: format!("Activity request failed with status {status}"),
            });
        }

        let body = resp.text().await?;
        let activities = parse_activities(&body)?;
        info!(count = activities.len(), "Fetched activities");
        Ok(activities)
    }
}
