use serde::{Deserialize, Serialize};

use super::activity::ActivityAction;
use super::date_range::DateRange;

/// Parameters of one activity API request. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityQuery {
    /// Earliest activity time, Unix seconds (inclusive)
    pub start: Option<i64>,
    /// Latest activity time, Unix seconds (inclusive)
    pub end: Option<i64>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    /// Empty means all actions
    pub actions: Vec<ActivityAction>,
    pub owner: Option<String>,
    pub strategy_id: Option<String>,
}

impl ActivityQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_range(mut self, range: &DateRange) -> Self {
        let (start, end) = range.to_unix();
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn with_actions(mut self, actions: &[ActivityAction]) -> Self {
        self.actions = actions.to_vec();
        self
    }

    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Query-string pairs in a fixed order. Actions are comma-joined.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(start) = self.start {
            params.push(("start", start.to_string()));
        }
        if let Some(end) = self.end {
            params.push(("end", end.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }
        if !self.actions.is_empty() {
            let joined = self
                .actions
                .iter()
                .map(|a| a.as_str())
                .collect::<Vec<_>>()
                .join(",");
            params.push(("actions", joined));
        }
        if let Some(owner) = &self.owner {
            params.push(("ownerId", owner.clone()));
        }
        if let Some(id) = &self.strategy_id {
            params.push(("strategyIds", id.clone()));
        }
        params
    }
}
