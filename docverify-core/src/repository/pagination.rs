use serde::{Deserialize, Serialize};

/// Pagination request parameters for page-number based pagination
///
/// # Example
/// ```
/// use docverify_core::repository::pagination::PageRequest;
///
/// let first = PageRequest::new(0, 10); // First page with 10 items
/// let next = first.next(); // Second page
/// assert_eq!(next.page, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: usize,
    /// Maximum number of items per page
    pub size: usize,
}

impl PageRequest {
    /// Create a new page request
    ///
    /// # Arguments
    /// * `page` - Zero-based page index
    /// * `size` - Maximum number of items per page
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// The first page with the given size
    pub fn first(size: usize) -> Self {
        Self { page: 0, size }
    }

    /// The page following this one, same size
    pub fn next(&self) -> Self {
        Self {
            page: self.page + 1,
            size: self.size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 10 }
    }
}

/// One page of results together with the server's paging metadata
///
/// # Example
/// ```
/// use docverify_core::repository::pagination::Page;
///
/// let page = Page::new(vec![1, 2, 3], 0, 3);
///
/// assert_eq!(page.has_more(), true);
/// assert_eq!(page.is_first_page(), true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The items in this page
    pub items: Vec<T>,
    /// Zero-based index of this page, as reported by the server
    pub page_number: usize,
    /// Total number of pages, as reported by the server
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page_number: usize, total_pages: usize) -> Self {
        Self {
            items,
            page_number,
            total_pages,
        }
    }

    /// Check if there are more pages after this one
    ///
    /// Equivalent to `!(page_number >= total_pages - 1)` in signed arithmetic,
    /// so an empty result (`total_pages == 0`) has no further pages.
    pub fn has_more(&self) -> bool {
        (self.page_number as i64) < (self.total_pages as i64) - 1
    }

    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.page_number == 0
    }

    /// Check if this is the last page
    pub fn is_last_page(&self) -> bool {
        !self.has_more()
    }
}
