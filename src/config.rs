use std::env;

use crate::{
    error::PagingResult,
    metadata::{DEFAULT_PAGE_SIZE, PageMetadata},
};

const PAGE_SIZE_VAR: &str = "PAGED_LIST_DEFAULT_PAGE_SIZE";

/// Represents the pagination configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// The page size used when a caller does not pass one.
    pub default_page_size: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self { default_page_size: DEFAULT_PAGE_SIZE }
    }
}

impl Config {
    /// Creates a new `Config` instance from environment variables. Missing or
    /// invalid values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            default_page_size: env::var(PAGE_SIZE_VAR)
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .filter(|size: &i64| *size >= 1)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// Computes page metadata using the configured page size.
    pub fn page_metadata(
        &self,
        page_number: i64,
        total_item_count: i64,
    ) -> PagingResult<PageMetadata> {
        PageMetadata::new(page_number, self.default_page_size, total_item_count)
    }
}
