use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Page sizes offered by the activity table.
pub const PAGE_LIMITS: [usize; 5] = [10, 20, 30, 40, 50];

/// Limit/offset pagination over an in-memory list.
///
/// Pages are 1-based for display; `offset` is always a multiple of `limit`.
/// `limit` is always one of [`PAGE_LIMITS`], including after deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPagination")]
pub struct Pagination {
    limit: usize,
    offset: usize,
    total: usize,
}

#[derive(Deserialize)]
struct RawPagination {
    limit: usize,
    #[serde(default)]
    offset: usize,
    #[serde(default)]
    total: usize,
}

impl TryFrom<RawPagination> for Pagination {
    type Error = CoreError;

    fn try_from(raw: RawPagination) -> Result<Self, Self::Error> {
        check_limit(raw.limit)?;
        Ok(Self {
            limit: raw.limit,
            offset: raw.offset - raw.offset % raw.limit,
            total: raw.total,
        })
    }
}

impl Pagination {
    /// Start on the first page. `limit` must be one of [`PAGE_LIMITS`].
    pub fn new(limit: usize, total: usize) -> Result<Self, CoreError> {
        check_limit(limit)?;
        Ok(Self {
            limit,
            offset: 0,
            total,
        })
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.offset / self.limit + 1
    }

    /// Always at least 1, even for an empty list.
    #[must_use]
    pub fn max_page(&self) -> usize {
        self.total.div_ceil(self.limit).max(1)
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page() < self.max_page()
    }

    pub fn first_page(&mut self) {
        self.offset = 0;
    }

    pub fn previous_page(&mut self) {
        self.offset = self.offset.saturating_sub(self.limit);
    }

    pub fn next_page(&mut self) {
        if self.has_next() {
            self.offset += self.limit;
        }
    }

    pub fn last_page(&mut self) {
        self.offset = (self.max_page() - 1) * self.limit;
    }

    /// Change the page size and go back to the first page.
    pub fn set_limit(&mut self, limit: usize) -> Result<(), CoreError> {
        check_limit(limit)?;
        self.limit = limit;
        self.offset = 0;
        Ok(())
    }

    /// Update the total (e.g. after a refetch), clamping onto the last page.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        if self.current_page() > self.max_page() {
            self.last_page();
        }
    }

    /// The items of the current page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset.min(items.len());
        let end = self.offset.saturating_add(self.limit).min(items.len());
        &items[start..end]
    }
}

fn check_limit(limit: usize) -> Result<(), CoreError> {
    if PAGE_LIMITS.contains(&limit) {
        Ok(())
    } else {
        Err(CoreError::ValidationError(format!(
            "Page limit {limit} is not one of {PAGE_LIMITS:?}"
        )))
    }
}
