//! # Playful Pager
//!
//! Page-number navigation for content-driven static sites. Given the page a
//! reader is on and how many pages a post listing has, it decides which page
//! buttons to show, where to collapse hidden pages behind an ellipsis, and
//! whether previous/next navigation is possible.
//!
//! # Pipeline
//!
//! ```text
//! 1. Listing   total posts + page size  →  PageInfo          (listing)
//! 2. Window    PageInfo                 →  PaginationResult  (window, cache)
//! 3. Render    PaginationResult + URLs  →  <nav> markup      (render, links)
//! ```
//!
//! Each step is a pure function of its input, so unit tests exercise them
//! without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`window`] | The window calculation: which page buttons to show and where the ellipsis goes |
//! | [`cache`] | Bounded LRU memoization of windows, shareable across call sites |
//! | [`listing`] | Page counts and per-page slices for a post listing |
//! | [`links`] | Page number → URL mapping |
//! | [`render`] | Maud rendering of the pagination `<nav>` |
//! | [`config`] | `config.toml` loading, validation, and merging over stock defaults |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Fail Fast on Bad Positions
//!
//! A page row is only meaningful for `1 <= current <= last`. Positions outside
//! that range are rejected by [`window::PageInfo::new`] instead of producing a
//! row with duplicates or pages out of order.
//!
//! ## One Ellipsis
//!
//! The control never shows more than one ellipsis. The visible window hugs
//! whichever end of the listing is closer to the current page and the marker
//! goes on the other side.
//!
//! ## Memoization Is Optional
//!
//! [`cache::WindowCache`] only saves recomputation. Its answers are always
//! identical to [`window::compute`], so callers that don't need it can call
//! the function directly.

pub mod cache;
pub mod config;
pub mod links;
pub mod listing;
pub mod output;
pub mod render;
pub mod window;

pub use window::{PageEntry, PageInfo, PaginationError, PaginationResult, WindowConfig};
