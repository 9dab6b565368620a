//! Pagination window calculation.
//!
//! Given the page a reader is on and the number of pages in a listing, decide
//! which page buttons a navigation control shows. The first and last page are
//! always visible; between them sits a contiguous *window* of up to
//! [`PAGE_BUTTON_COUNT`] numbered buttons. When the listing is too long to show
//! every page, a single ellipsis marker stands in for the hidden run.
//!
//! ## Window Placement
//!
//! ```text
//! current=1,  last=11   →  1 2 3 4 5 6 7 … 11
//! current=11, last=11   →  1 … 5 6 7 8 9 10 11
//! current=1,  last=8    →  1 2 3 4 5 6 7 8
//! ```
//!
//! The window starts one page before the current page, clamped so it never
//! overlaps page 1 and never runs past the last page. The ellipsis goes on
//! whichever side the window does not touch: if the current page is within
//! one window's width of the end, the marker sits right after page 1,
//! otherwise right before the last page.
//!
//! Only one ellipsis is ever emitted. When the window sits in the middle of a
//! long listing, the pages between 1 and the window start are skipped without
//! a marker.
//!
//! The calculation is pure: identical inputs always give identical output, so
//! results can be memoized freely (see [`crate::cache`]).

use serde::ser::{Serialize, Serializer};
use thiserror::Error;

/// Numbered buttons shown between the first and last page.
pub const PAGE_BUTTON_COUNT: u32 = 6;

/// JSON representation of the ellipsis marker.
pub const ELLIPSIS_MARKER: &str = "...";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("last page must be at least 1, got {0}")]
    NoPages(u32),
    #[error("current page must be at least 1")]
    CurrentPageZero,
    #[error("current page {current} is past the last page {last}")]
    CurrentPastLast { current: u32, last: u32 },
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("page button count must be at least 1")]
    ZeroButtonCount,
    #[error("listing needs more than 4294967295 pages")]
    TooManyPages,
}

/// Position of the reader within a paginated listing.
///
/// Construct through [`PageInfo::new`], which enforces
/// `1 <= current_page <= last_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageInfo {
    current_page: u32,
    last_page: u32,
}

impl PageInfo {
    pub fn new(current_page: u32, last_page: u32) -> Result<Self, PaginationError> {
        if last_page < 1 {
            return Err(PaginationError::NoPages(last_page));
        }
        if current_page < 1 {
            return Err(PaginationError::CurrentPageZero);
        }
        if current_page > last_page {
            return Err(PaginationError::CurrentPastLast {
                current: current_page,
                last: last_page,
            });
        }
        Ok(Self {
            current_page,
            last_page,
        })
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn last_page(&self) -> u32 {
        self.last_page
    }
}

/// One slot in the rendered page row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(u32),
    /// One or more hidden pages.
    Ellipsis,
}

impl PageEntry {
    pub fn page(&self) -> Option<u32> {
        match self {
            PageEntry::Page(n) => Some(*n),
            PageEntry::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageEntry::Ellipsis)
    }
}

impl std::fmt::Display for PageEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageEntry::Page(n) => write!(f, "{n}"),
            PageEntry::Ellipsis => f.write_str("…"),
        }
    }
}

/// Pages serialize as bare numbers and the marker as `"..."`, so a row reads
/// `[1, 2, 3, "...", 11]` in JSON.
impl Serialize for PageEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageEntry::Page(n) => serializer.serialize_u32(*n),
            PageEntry::Ellipsis => serializer.serialize_str(ELLIPSIS_MARKER),
        }
    }
}

/// What a pagination control should render.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResult {
    pub is_previous_enabled: bool,
    pub is_next_enabled: bool,
    /// True when the listing has more pages than fit in the control.
    pub is_dots_enabled: bool,
    pub pages: Vec<PageEntry>,
    pub current_page: u32,
    pub last_page: u32,
}

impl PaginationResult {
    /// Numbered pages in display order, ellipsis skipped.
    pub fn page_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.pages.iter().filter_map(PageEntry::page)
    }

    pub fn previous_page(&self) -> Option<u32> {
        self.is_previous_enabled.then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.is_next_enabled.then(|| self.current_page + 1)
    }
}

/// Display budget for the page row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Numbered buttons between the first and last page.
    pub page_button_count: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            page_button_count: PAGE_BUTTON_COUNT,
        }
    }
}

impl WindowConfig {
    pub fn new(page_button_count: u32) -> Result<Self, PaginationError> {
        if page_button_count == 0 {
            return Err(PaginationError::ZeroButtonCount);
        }
        Ok(Self { page_button_count })
    }

    /// Largest page count that renders without an ellipsis (window + first + last).
    pub fn max_pages_without_dots(&self) -> u32 {
        self.page_button_count.saturating_add(2)
    }
}

/// Compute the page row for a validated position.
pub fn compute(info: PageInfo, config: WindowConfig) -> PaginationResult {
    let current = info.current_page;
    let last = info.last_page;
    let count = config.page_button_count;

    let is_previous_enabled = current > 1;
    let is_next_enabled = current < last;
    let is_dots_enabled = last > config.max_pages_without_dots();
    // Near the end the window hugs the last page, so the hidden run is before it.
    let is_dots_first = last - current < count;

    // Lower bound wins when the bounds cross (short listings).
    let first_page_num = (current - 1).min(last.saturating_sub(count)).max(2);

    // Never more than `last` numbered pages, whatever the budget.
    let mut pages = Vec::with_capacity(count.min(last) as usize + 3);
    pages.push(PageEntry::Page(1));
    if is_dots_first && is_dots_enabled {
        pages.push(PageEntry::Ellipsis);
    }
    pages.extend(
        (first_page_num..first_page_num.saturating_add(count))
            .take_while(|&n| n < last)
            .map(PageEntry::Page),
    );
    if !is_dots_first && is_dots_enabled {
        pages.push(PageEntry::Ellipsis);
    }
    if last > 1 {
        pages.push(PageEntry::Page(last));
    }

    PaginationResult {
        is_previous_enabled,
        is_next_enabled,
        is_dots_enabled,
        pages,
        current_page: current,
        last_page: last,
    }
}

/// Validate raw page numbers and compute the page row.
pub fn paginate(
    current_page: u32,
    last_page: u32,
    config: WindowConfig,
) -> Result<PaginationResult, PaginationError> {
    let info = PageInfo::new(current_page, last_page)?;
    Ok(compute(info, config))
}
