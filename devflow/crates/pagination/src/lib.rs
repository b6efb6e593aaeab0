//! Offset pagination primitives.
//!
//! Queries accept a validated [`PageRequest`] (1-based page number plus a
//! clamped page size) and return a [`Paged`] envelope whose `has_next` flag
//! tells callers whether another page exists without a second count query
//! round-trip.

use serde::{Deserialize, Serialize};

/// Page size applied when callers do not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound applied to caller-supplied page sizes.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Validation errors raised by [`PageRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// Pages are numbered from 1; page 0 has no meaning.
    #[error("page numbers start at 1")]
    ZeroPage,
    /// A page must hold at least one item.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// A validated request for one page of results.
///
/// Page numbers are 1-based, mirroring the page query parameter callers
/// pass through. Page sizes above [`MAX_PAGE_SIZE`] are clamped rather than
/// rejected so oversized requests degrade instead of failing.
///
/// # Examples
/// ```
/// use pagination::PageRequest;
///
/// let request = PageRequest::new(2, 10).expect("valid request");
/// assert_eq!(request.offset(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Validate and construct a page request.
    ///
    /// # Errors
    /// Returns [`PageRequestError`] when `page` or `page_size` is zero.
    pub const fn new(page: u32, page_size: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::ZeroPage);
        }
        if page_size == 0 {
            return Err(PageRequestError::ZeroPageSize);
        }
        let page_size = if page_size > MAX_PAGE_SIZE {
            MAX_PAGE_SIZE
        } else {
            page_size
        };
        Ok(Self { page, page_size })
    }

    /// The first page with the default page size.
    #[must_use]
    pub const fn first() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Number of items per page, already clamped to [`MAX_PAGE_SIZE`].
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of items skipped before this page starts.
    #[must_use]
    pub const fn offset(&self) -> usize {
        ((self.page - 1) as usize) * (self.page_size as usize)
    }

    /// Take this page out of an already-filtered, already-sorted vector.
    #[must_use]
    pub fn slice_of<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.page_size as usize)
            .collect()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of results plus a continuation flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    /// The items on this page, at most `page_size` of them.
    pub items: Vec<T>,
    /// Whether at least one more item exists beyond this page.
    pub has_next: bool,
}

impl<T> Paged<T> {
    /// Build an envelope from a page of items and the total match count.
    #[must_use]
    pub fn from_total(items: Vec<T>, request: PageRequest, total: usize) -> Self {
        let has_next = total > request.offset() + items.len();
        Self { items, has_next }
    }

    /// An empty page with no continuation.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            has_next: false,
        }
    }

    /// Map the item type while preserving the continuation flag.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paged<U> {
        Paged {
            items: self.items.into_iter().map(f).collect(),
            has_next: self.has_next,
        }
    }
}
