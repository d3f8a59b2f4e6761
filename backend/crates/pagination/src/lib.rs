//! Offset pagination primitives shared by the photos backend list endpoints.
//!
//! The crate turns raw `page`/`size`/`sortOrder` query values into validated
//! requests, resolves them against the size of a collection, and packages the
//! loaded slice with the metadata clients need to walk the remaining pages.
//! It is storage agnostic: callers count the collection, ask for a
//! [`PageWindow`], then load `limit()` rows from `offset()`.
//!
//! # Example
//!
//! ```
//! use pagination::{Page, PageRequest, PaginationError, SortDirection};
//!
//! let direction: SortDirection = "desc".parse().expect("known order");
//! assert_eq!(direction, SortDirection::Descending);
//!
//! let request = PageRequest::new(1, 10).expect("valid request");
//! let window = request.window(25).expect("page 1 exists");
//! assert_eq!(window.offset(), 10);
//! assert_eq!(window.total_pages(), 3);
//!
//! let page = Page::new(window, vec!["k", "l"]).expect("non-empty page");
//! assert_eq!(page.current_page(), 1);
//!
//! let too_far = PageRequest::new(5, 10).expect("valid request").window(25);
//! assert_eq!(too_far, Err(PaginationError::PageOutOfRange { max_page: 2 }));
//! ```

mod error;
mod page;
mod sort;

pub use error::PaginationError;
pub use page::{DEFAULT_PAGE, DEFAULT_SIZE, Page, PageRequest, PageWindow, total_pages};
pub use sort::{Sort, SortDirection};
