//! Page requests, resolved page windows, and loaded pages.

use crate::PaginationError;

/// Page index used when the caller does not supply one.
pub const DEFAULT_PAGE: i64 = 0;
/// Page size used when the caller does not supply one.
pub const DEFAULT_SIZE: i64 = 10;

/// Number of pages needed to hold `total_items` at `size` items per page.
///
/// Returns 0 for an empty collection.
///
/// # Examples
/// ```
/// use pagination::total_pages;
///
/// assert_eq!(total_pages(0, 10), 0);
/// assert_eq!(total_pages(10, 10), 1);
/// assert_eq!(total_pages(11, 10), 2);
/// ```
#[must_use]
pub const fn total_pages(total_items: u64, size: u64) -> u64 {
    if size == 0 {
        return 0;
    }
    total_items.div_ceil(size)
}

/// Validated zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u64,
    size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE.unsigned_abs(),
            size: DEFAULT_SIZE.unsigned_abs(),
        }
    }
}

impl PageRequest {
    /// Validate raw query values.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::NegativePage`] when `page < 0` and
    /// [`PaginationError::NonPositiveSize`] when `size < 1`.
    pub fn new(page: i64, size: i64) -> Result<Self, PaginationError> {
        let page = u64::try_from(page).map_err(|_| PaginationError::NegativePage { page })?;
        let size = u64::try_from(size)
            .ok()
            .filter(|value| *value > 0)
            .ok_or(PaginationError::NonPositiveSize { size })?;
        Ok(Self { page, size })
    }

    /// Requested zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Requested number of items per page.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Resolve the request against a collection holding `total_items`.
    ///
    /// Emptiness of the whole collection is checked before the page bound,
    /// so an empty collection always reports
    /// [`PaginationError::EmptyCollection`] whatever page was asked for.
    ///
    /// # Errors
    ///
    /// [`PaginationError::EmptyCollection`] when `total_items == 0`;
    /// [`PaginationError::PageOutOfRange`] when the page lies past the last
    /// page.
    pub fn window(self, total_items: u64) -> Result<PageWindow, PaginationError> {
        if total_items == 0 {
            return Err(PaginationError::EmptyCollection);
        }
        let total_pages = total_pages(total_items, self.size);
        let max_page = total_pages.saturating_sub(1);
        if self.page > max_page {
            return Err(PaginationError::PageOutOfRange { max_page });
        }
        Ok(PageWindow {
            page: self.page,
            size: self.size,
            total_items,
            total_pages,
        })
    }
}

/// A page request resolved against a non-empty collection.
///
/// ## Invariants
/// - `total_items > 0`
/// - `page < total_pages`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    page: u64,
    size: u64,
    total_items: u64,
    total_pages: u64,
}

impl PageWindow {
    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Items per page.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Number of items in the whole collection.
    #[must_use]
    pub const fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Number of pages in the whole collection.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Number of rows to skip.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    /// Maximum number of rows to load.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.size
    }
}

/// One loaded page of items with its position in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items: Vec<T>,
    current_page: u64,
    total_items: u64,
    total_pages: u64,
}

impl<T> Page<T> {
    /// Package a loaded slice with the window it was loaded for.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::EmptyCollection`] when `items` is empty,
    /// which happens when rows disappear between counting and loading.
    pub fn new(window: PageWindow, items: Vec<T>) -> Result<Self, PaginationError> {
        if items.is_empty() {
            return Err(PaginationError::EmptyCollection);
        }
        Ok(Self {
            items,
            current_page: window.page,
            total_items: window.total_items,
            total_pages: window.total_pages,
        })
    }

    /// Items on this page, in sort order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Zero-based index of this page.
    #[must_use]
    pub const fn current_page(&self) -> u64 {
        self.current_page
    }

    /// Number of items in the whole collection.
    #[must_use]
    pub const fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Number of pages in the whole collection.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Convert every item while keeping the page metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-1, 10, PaginationError::NegativePage { page: -1 })]
    #[case(0, 0, PaginationError::NonPositiveSize { size: 0 })]
    #[case(0, -5, PaginationError::NonPositiveSize { size: -5 })]
    fn rejects_invalid_raw_values(
        #[case] page: i64,
        #[case] size: i64,
        #[case] expected: PaginationError,
    ) {
        assert_eq!(PageRequest::new(page, size), Err(expected));
    }

    #[test]
    fn default_request_is_first_page_of_ten() {
        let request = PageRequest::default();
        assert_eq!(request.page(), 0);
        assert_eq!(request.size(), 10);
    }

    #[rstest]
    #[case(1, 10, 1)]
    #[case(10, 10, 1)]
    #[case(11, 10, 2)]
    #[case(25, 7, 4)]
    #[case(3, 1, 3)]
    fn total_pages_rounds_up(#[case] items: u64, #[case] size: u64, #[case] expected: u64) {
        assert_eq!(total_pages(items, size), expected);
        let window = PageRequest::new(0, i64::try_from(size).expect("small size"))
            .expect("valid request")
            .window(items)
            .expect("first page exists");
        assert_eq!(window.total_pages(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(99)]
    fn empty_collection_wins_over_page_bound(#[case] page: i64) {
        let request = PageRequest::new(page, 10).expect("valid request");
        assert_eq!(request.window(0), Err(PaginationError::EmptyCollection));
    }

    #[rstest]
    #[case(1, 10, 1, 0)]
    #[case(5, 10, 1, 0)]
    #[case(3, 10, 30, 2)]
    #[case(4, 2, 7, 3)]
    fn out_of_range_reports_max_page(
        #[case] page: i64,
        #[case] size: i64,
        #[case] items: u64,
        #[case] max_page: u64,
    ) {
        let request = PageRequest::new(page, size).expect("valid request");
        assert_eq!(
            request.window(items),
            Err(PaginationError::PageOutOfRange { max_page })
        );
    }

    #[test]
    fn last_page_is_in_range() {
        let window = PageRequest::new(2, 10)
            .expect("valid request")
            .window(21)
            .expect("last page exists");
        assert_eq!(window.offset(), 20);
        assert_eq!(window.limit(), 10);
        assert_eq!(window.total_items(), 21);
    }

    #[test]
    fn page_rejects_empty_slice() {
        let window = PageRequest::default().window(4).expect("window");
        assert_eq!(
            Page::<u8>::new(window, Vec::new()),
            Err(PaginationError::EmptyCollection)
        );
    }

    #[test]
    fn map_keeps_metadata() {
        let window = PageRequest::new(1, 2)
            .expect("valid request")
            .window(3)
            .expect("window");
        let page = Page::new(window, vec![3_u8]).expect("page").map(u32::from);
        assert_eq!(page.items(), &[3_u32]);
        assert_eq!(page.current_page(), 1);
        assert_eq!(page.total_items(), 3);
        assert_eq!(page.total_pages(), 2);
    }
}
