//! HTML rendering of the pagination control.
//!
//! Uses [maud](https://maud.lambda.xyz/) like the rest of the site templates,
//! so labels and hrefs are escaped automatically.
//!
//! ## Markup
//!
//! ```text
//! nav.pagination[aria-label]
//! └── ul
//!     ├── li.pagination-previous   a (or span[aria-disabled] on page 1)
//!     ├── li.pagination-page       a[aria-current="page"] for the active page
//!     ├── li.pagination-ellipsis   span (never a link)
//!     └── li.pagination-next       a (or span[aria-disabled] on the last page)
//! ```

use crate::window::{PageEntry, PaginationResult};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

/// User-visible text in the control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    pub previous: String,
    pub next: String,
    /// Shown in place of hidden pages.
    pub ellipsis: String,
    /// `aria-label` of the surrounding `<nav>`.
    pub nav: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            previous: "Previous".to_string(),
            next: "Next".to_string(),
            ellipsis: "…".to_string(),
            nav: "Pagination".to_string(),
        }
    }
}

/// Renders the pagination control, mapping page numbers to URLs with `href`.
pub fn render_pagination<F>(result: &PaginationResult, href: F, labels: &Labels) -> Markup
where
    F: Fn(u32) -> String,
{
    html! {
        nav.pagination aria-label=(labels.nav) {
            ul {
                li.pagination-previous {
                    @if let Some(prev) = result.previous_page() {
                        a href=(href(prev)) rel="prev" { (labels.previous) }
                    } @else {
                        span aria-disabled="true" { (labels.previous) }
                    }
                }
                @for entry in &result.pages {
                    (render_entry(entry, result.current_page, &href, labels))
                }
                li.pagination-next {
                    @if let Some(next) = result.next_page() {
                        a href=(href(next)) rel="next" { (labels.next) }
                    } @else {
                        span aria-disabled="true" { (labels.next) }
                    }
                }
            }
        }
    }
}

fn render_entry<F>(entry: &PageEntry, current_page: u32, href: &F, labels: &Labels) -> Markup
where
    F: Fn(u32) -> String,
{
    match *entry {
        PageEntry::Page(page) => {
            let is_current = page == current_page;
            html! {
                li.pagination-page {
                    a href=(href(page)) aria-current=[is_current.then_some("page")] { (page) }
                }
            }
        }
        PageEntry::Ellipsis => html! {
            li.pagination-ellipsis {
                span aria-hidden="true" { (labels.ellipsis) }
            }
        },
    }
}
