//! Error type for pagination and sort parameter resolution.

use thiserror::Error;

/// Failures raised while validating paging parameters or resolving a page
/// against a collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The sort order is neither `asc` nor `desc`.
    #[error(
        "'{value}' is an unknown sorting order. Possible values: 'asc' for ascending order and 'desc' for descending order."
    )]
    UnknownSortOrder {
        /// Raw value supplied by the caller.
        value: String,
    },

    /// The zero-based page index is negative.
    #[error("Page index must not be less than zero, got {page}")]
    NegativePage {
        /// Raw page index supplied by the caller.
        page: i64,
    },

    /// The page size is zero or negative.
    #[error("Page size must not be less than one, got {size}")]
    NonPositiveSize {
        /// Raw page size supplied by the caller.
        size: i64,
    },

    /// The collection holds no items at all.
    #[error("The repository is empty")]
    EmptyCollection,

    /// The requested page lies past the last page of a non-empty collection.
    #[error("Page value out of bounds, max page = {max_page}")]
    PageOutOfRange {
        /// Highest valid zero-based page index.
        max_page: u64,
    },
}
