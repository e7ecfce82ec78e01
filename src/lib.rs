#![warn(missing_docs)]
//! Pages of a larger ordered collection.
//!
//! Given a total item count, a page size and a requested page number, this
//! crate computes the page boundaries and navigation flags, and wraps the
//! items of the page in a read-only list.

/// Environment-driven configuration.
pub mod config;
/// Errors returned by paging operations.
pub mod error;
/// The pagination metadata calculator.
pub mod metadata;
/// The list holding one page of items.
pub mod paged_list;
/// Data sources that supply the items of a page.
pub mod source;

pub use config::Config;
pub use error::{PagingError, PagingResult};
pub use metadata::{DEFAULT_PAGE_SIZE, ItemWindow, PageMetadata};
pub use paged_list::{PagedList, ToPagedList};
pub use source::{AsyncSubsetSource, SliceSource, SubsetSource};
