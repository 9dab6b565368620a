//! Splitting a post listing into pages.
//!
//! The pagination control only knows page numbers; the listing knows how many
//! posts there are and how many fit on a page. These helpers turn the latter
//! into the former.

use crate::window::{PageInfo, PaginationError};

/// Number of pages needed for `total_items` at `page_size` items per page.
///
/// An empty listing still has one page, so page 1 always exists. Listings
/// whose page count does not fit a `u32` page number are rejected.
pub fn page_count(total_items: usize, page_size: u32) -> Result<u32, PaginationError> {
    if page_size == 0 {
        return Err(PaginationError::ZeroPageSize);
    }
    let pages = total_items.div_ceil(page_size as usize).max(1);
    u32::try_from(pages).map_err(|_| PaginationError::TooManyPages)
}

/// Validated position for page `current_page` of a listing.
pub fn page_info_for_listing(
    current_page: u32,
    total_items: usize,
    page_size: u32,
) -> Result<PageInfo, PaginationError> {
    PageInfo::new(current_page, page_count(total_items, page_size)?)
}

/// Items shown on 1-indexed `page`. Empty if the page is past the end.
pub fn page_items<T>(items: &[T], page: u32, page_size: u32) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let size = page_size as usize;
    let start = (page as usize - 1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}
