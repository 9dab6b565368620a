//! Page URL generation.
//!
//! Renderers take any `Fn(u32) -> String` for hrefs. [`LinkPattern`] is the
//! configured default: the first page of a listing lives at the listing root
//! and later pages under a numbered path.
//!
//! ```text
//! page 1 → /
//! page 2 → /page/2/
//! page 7 → /page/7/
//! ```

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the page number.
pub const PAGE_PLACEHOLDER: &str = "{page}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkPattern {
    /// URL of page 1.
    pub first_page: String,
    /// URL of every other page; must contain `{page}`.
    pub pattern: String,
}

impl Default for LinkPattern {
    fn default() -> Self {
        Self {
            first_page: "/".to_string(),
            pattern: "/page/{page}/".to_string(),
        }
    }
}

impl LinkPattern {
    pub fn href(&self, page: u32) -> String {
        if page <= 1 {
            self.first_page.clone()
        } else {
            self.pattern.replace(PAGE_PLACEHOLDER, &page.to_string())
        }
    }

    pub fn has_placeholder(&self) -> bool {
        self.pattern.contains(PAGE_PLACEHOLDER)
    }
}
