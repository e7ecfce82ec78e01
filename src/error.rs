use thiserror::Error;

/// Errors returned when computing or reading a page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PagingError {
    /// An argument was outside its allowed range.
    #[error("Invalid argument: {name} must not be {value}")]
    InvalidArgument {
        /// The argument name.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// Indexed access outside `[0, count)`.
    #[error("Index {index} is out of range for a page of {count} items")]
    IndexOutOfRange {
        /// The requested index.
        index: i64,
        /// The number of items on the page.
        count: usize,
    },
    /// The data source failed to supply the page.
    #[error("Data source error: {0}")]
    Source(String),
}

/// Result alias for paging operations.
pub type PagingResult<T> = Result<T, PagingError>;
