
use std::{ops::Deref, slice, vec};

use tracing::{debug, warn};

use crate::{
    error::{PagingError, PagingResult},
    metadata::PageMetadata,
    source::{AsyncSubsetSource, SliceSource, SubsetSource},
};

/// One page of a larger ordered collection: its metadata plus the items on it.
///
/// The list is read-only once constructed. Metadata accessors are available
/// directly on the list through `Deref<Target = PageMetadata>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedList<T> {
    metadata: PageMetadata,
    subset: Vec<T>,
}

impl<T> PagedList<T> {
    /// Builds a page from an already-sliced subset of the collection.
    pub fn new(
        page_number: i64,
        page_size: i64,
        total_item_count: i64,
        subset: impl IntoIterator<Item = T>,
    ) -> PagingResult<Self> {
        let metadata = PageMetadata::new(page_number, page_size, total_item_count)?;
        Ok(Self::from_metadata(metadata, subset))
    }

    /// Builds a page from precomputed metadata and its items. A subset that
    /// does not match the page window is kept as given and logged.
    pub fn from_metadata(metadata: PageMetadata, subset: impl IntoIterator<Item = T>) -> Self {
        Self::checked(metadata, subset.into_iter().collect())
    }

    /// Builds a page by asking `source` for the items in the page window.
    ///
    /// The source is queried at most once, and not at all for an empty
    /// collection. Whatever it returns is taken as the content of the page.
    pub fn from_source<S>(
        page_number: i64,
        page_size: i64,
        total_item_count: i64,
        source: &S,
    ) -> PagingResult<Self>
    where
        S: SubsetSource<T> + ?Sized,
        T: 'static,
    {
        let metadata = PageMetadata::new(page_number, page_size, total_item_count)?;
        let subset = match metadata.window() {
            Some(window) => {
                debug!(
                    "Fetching items {}..={} for page {}",
                    window.first,
                    window.last,
                    metadata.page_number()
                );
                source.fetch_window(window)?
            }
            None => Vec::new(),
        };
        Ok(Self::from_metadata(metadata, subset))
    }

    /// Async counterpart of [`PagedList::from_source`].
    pub async fn from_async_source<S>(
        page_number: i64,
        page_size: i64,
        total_item_count: i64,
        source: &S,
    ) -> PagingResult<Self>
    where
        S: AsyncSubsetSource<T> + ?Sized,
        T: Send + Sync + 'static,
    {
        let metadata = PageMetadata::new(page_number, page_size, total_item_count)?;
        let subset = match metadata.window() {
            Some(window) => {
                debug!(
                    "Fetching items {}..={} for page {}",
                    window.first,
                    window.last,
                    metadata.page_number()
                );
                source.fetch_window(window).await?
            }
            None => Vec::new(),
        };
        Ok(Self::from_metadata(metadata, subset))
    }

    fn checked(metadata: PageMetadata, subset: Vec<T>) -> Self {
        let expected = usize::try_from(metadata.item_count_on_page()).unwrap_or(usize::MAX);
        if subset.len() > expected {
            warn!(
                "Subset has {} items for page {}, expected at most {}",
                subset.len(),
                metadata.page_number(),
                expected
            );
        } else if subset.len() < expected {
            debug!(
                "Subset has {} of {} items for page {}",
                subset.len(),
                expected,
                metadata.page_number()
            );
        }
        Self { metadata, subset }
    }

    /// Returns the item at zero-based `index` within this page.
    pub fn get(&self, index: i64) -> PagingResult<&T> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.subset.get(i))
            .ok_or(PagingError::IndexOutOfRange { index, count: self.subset.len() })
    }

    /// The number of items actually present on this page.
    pub fn count(&self) -> usize {
        self.subset.len()
    }

    /// Whether the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.subset.is_empty()
    }

    /// Iterates over the items in page order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.subset.iter()
    }

    /// The items on this page.
    pub fn as_slice(&self) -> &[T] {
        &self.subset
    }

    /// The page metadata.
    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    /// Returns a copy of the metadata without the items.
    #[deprecated(note = "use `metadata()`, which borrows instead of copying")]
    pub fn get_metadata(&self) -> PageMetadata {
        self.metadata
    }

    /// Converts every item, keeping the page metadata as is.
    pub fn map<U, F>(self, f: F) -> PagedList<U>
    where
        F: FnMut(T) -> U,
    {
        PagedList { metadata: self.metadata, subset: self.subset.into_iter().map(f).collect() }
    }

    /// Splits the list into its metadata and items.
    pub fn into_parts(self) -> (PageMetadata, Vec<T>) {
        (self.metadata, self.subset)
    }
}

impl<T> Deref for PagedList<T> {
    type Target = PageMetadata;

    fn deref(&self) -> &Self::Target {
        &self.metadata
    }
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.subset.iter()
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.subset.into_iter()
    }
}

/// Pages an in-memory collection whose length is the total item count.
pub trait ToPagedList<T> {
    /// Returns page `page_number` of the collection at `page_size` items per page.
    fn to_paged_list(&self, page_number: i64, page_size: i64) -> PagingResult<PagedList<T>>;
}

impl<T: Clone + 'static> ToPagedList<T> for [T] {
    fn to_paged_list(&self, page_number: i64, page_size: i64) -> PagingResult<PagedList<T>> {
        let source = SliceSource::new(self);
        PagedList::from_source(page_number, page_size, source.total_item_count(), &source)
    }
}
