
use crate::error::{PagingError, PagingResult};

/// Page size used by constructors that do not take one explicitly.
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Pagination metadata for one page of an ordered collection.
///
/// A requested page number past the last page is clamped down to the last
/// page. A page number below 1 is rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageMetadata {
    page_number: i64,
    page_size: i64,
    total_item_count: i64,
    page_count: i64,
    first_item_on_page: i64,
    last_item_on_page: i64,
}

impl PageMetadata {
    /// Computes the metadata for `page_number` (1-based) of a collection of
    /// `total_item_count` items split into pages of `page_size`.
    pub fn new(page_number: i64, page_size: i64, total_item_count: i64) -> PagingResult<Self> {
        if page_number < 1 {
            return Err(PagingError::InvalidArgument { name: "page_number", value: page_number });
        }
        if page_size < 1 {
            return Err(PagingError::InvalidArgument { name: "page_size", value: page_size });
        }
        if total_item_count < 0 {
            return Err(PagingError::InvalidArgument {
                name: "total_item_count",
                value: total_item_count,
            });
        }

        if total_item_count == 0 {
            return Ok(Self::empty(page_size));
        }

        // Ceiling division; total_item_count > 0 so this cannot underflow.
        let page_count = (total_item_count - 1) / page_size + 1;
        let page_number = page_number.min(page_count);
        let first_item_on_page = (page_number - 1) * page_size + 1;
        let last_item_on_page =
            first_item_on_page.saturating_add(page_size - 1).min(total_item_count);

        Ok(Self {
            page_number,
            page_size,
            total_item_count,
            page_count,
            first_item_on_page,
            last_item_on_page,
        })
    }

    /// Same as [`PageMetadata::new`] with [`DEFAULT_PAGE_SIZE`].
    pub fn with_default_page_size(page_number: i64, total_item_count: i64) -> PagingResult<Self> {
        Self::new(page_number, DEFAULT_PAGE_SIZE, total_item_count)
    }

    fn empty(page_size: i64) -> Self {
        Self {
            page_number: 1,
            page_size,
            total_item_count: 0,
            page_count: 0,
            first_item_on_page: 0,
            last_item_on_page: 0,
        }
    }

    /// The current page number, 1-based and never past the last page.
    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    /// The maximum number of items per page.
    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// The size of the whole collection.
    pub fn total_item_count(&self) -> i64 {
        self.total_item_count
    }

    /// The number of pages needed to cover the collection, 0 when it is empty.
    pub fn page_count(&self) -> i64 {
        self.page_count
    }

    /// 1-based position of the first item on this page, 0 when the collection is empty.
    pub fn first_item_on_page(&self) -> i64 {
        self.first_item_on_page
    }

    /// 1-based position of the last item on this page, 0 when the collection is empty.
    pub fn last_item_on_page(&self) -> i64 {
        self.last_item_on_page
    }

    /// Whether this is page 1.
    pub fn is_first_page(&self) -> bool {
        self.page_number == 1
    }

    /// Whether this is the last page. Always true for an empty collection.
    pub fn is_last_page(&self) -> bool {
        self.page_count == 0 || self.page_number == self.page_count
    }

    /// Whether a page precedes this one.
    pub fn has_previous_page(&self) -> bool {
        self.page_number > 1
    }

    /// Whether a page follows this one.
    pub fn has_next_page(&self) -> bool {
        self.page_number < self.page_count
    }

    /// The number of items this page spans in the full collection.
    pub fn item_count_on_page(&self) -> i64 {
        if self.total_item_count == 0 {
            0
        } else {
            self.last_item_on_page - self.first_item_on_page + 1
        }
    }

    /// The span of the full collection covered by this page, `None` when the
    /// collection is empty.
    pub fn window(&self) -> Option<ItemWindow> {
        (self.total_item_count > 0)
            .then(|| ItemWindow { first: self.first_item_on_page, last: self.last_item_on_page })
    }
}

/// A 1-based, inclusive span of positions in the full collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemWindow {
    /// First position in the window.
    pub first: i64,
    /// Last position in the window, inclusive.
    pub last: i64,
}

impl ItemWindow {
    /// Number of positions in the window.
    pub fn len(&self) -> i64 {
        self.last - self.first + 1
    }

    /// Whether the window spans no positions, i.e. `last < first`.
    pub fn is_empty(&self) -> bool {
        self.len() <= 0
    }

    /// Number of items to skip from the start of the collection, i.e. a zero-based offset.
    pub fn offset(&self) -> i64 {
        self.first - 1
    }

    /// Whether `position` falls inside the window.
    pub fn contains(&self, position: i64) -> bool {
        (self.first..=self.last).contains(&position)
    }
}
