
use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{error::PagingResult, metadata::ItemWindow};

/// Supplies the items of a page window from the full collection.
///
/// Implementations must return the items at positions `window.first..=window.last`
/// in collection order, and never more than `window.len()` of them.
#[automock]
pub trait SubsetSource<T: 'static> {
    /// Fetch the items in the given window.
    fn fetch_window(&self, window: ItemWindow) -> PagingResult<Vec<T>>;
}

/// Asynchronous counterpart of [`SubsetSource`], for paged queries and
/// network-backed collections.
#[automock]
#[async_trait]
pub trait AsyncSubsetSource<T: Send + Sync + 'static>: Send + Sync {
    /// Fetch the items in the given window.
    async fn fetch_window(&self, window: ItemWindow) -> PagingResult<Vec<T>>;
}

/// In-memory source over a borrowed slice that holds the full collection.
#[derive(Debug, Clone, Copy)]
pub struct SliceSource<'a, T> {
    items: &'a [T],
}

impl<'a, T: Clone> SliceSource<'a, T> {
    /// Wraps the full collection.
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// The number of items in the underlying slice.
    pub fn total_item_count(&self) -> i64 {
        i64::try_from(self.items.len()).unwrap_or(i64::MAX)
    }

    fn slice_window(&self, window: ItemWindow) -> Vec<T> {
        let offset = usize::try_from(window.offset()).unwrap_or(usize::MAX);
        let len = usize::try_from(window.len()).unwrap_or(0);
        debug!("Slicing {} items at offset {} from in-memory source", len, offset);
        self.items.iter().skip(offset).take(len).cloned().collect()
    }
}

impl<T: Clone + 'static> SubsetSource<T> for SliceSource<'_, T> {
    fn fetch_window(&self, window: ItemWindow) -> PagingResult<Vec<T>> {
        Ok(self.slice_window(window))
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> AsyncSubsetSource<T> for SliceSource<'_, T> {
    async fn fetch_window(&self, window: ItemWindow) -> PagingResult<Vec<T>> {
        Ok(self.slice_window(window))
    }
}
