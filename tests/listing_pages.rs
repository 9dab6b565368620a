//! End-to-end: config on disk → listing → page row → rendered control.

use playful_pager::config::{self, CONFIG_FILENAME};
use playful_pager::listing::{page_count, page_info_for_listing, page_items};
use playful_pager::render::render_pagination;
use playful_pager::window::{PageEntry, compute};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join(CONFIG_FILENAME), content).unwrap();
}

#[test]
fn blog_listing_with_custom_config() {
    let tmp = TempDir::new().unwrap();
    write_config(
        &tmp,
        r#"
page_size = 5

[links]
first_page = "/blog/"
pattern = "/blog/page/{page}/"

[labels]
previous = "Newer"
next = "Older"
"#,
    );
    let config = config::load_config(tmp.path()).unwrap();
    let posts: Vec<String> = (1..=53).map(|n| format!("post-{n}")).collect();

    assert_eq!(page_count(posts.len(), config.page_size), Ok(11));

    let info = page_info_for_listing(1, posts.len(), config.page_size).unwrap();
    assert_eq!(page_items(&posts, 1, config.page_size).len(), 5);

    let result = compute(info, config.window());
    assert_eq!(result.pages[7], PageEntry::Ellipsis);

    let html = render_pagination(&result, |n| config.links.href(n), &config.labels).into_string();
    assert!(html.contains(r#"<a href="/blog/" aria-current="page">1</a>"#));
    assert!(html.contains(r#"<a href="/blog/page/2/" rel="next">Older</a>"#));
    assert!(html.contains(r#"<span aria-disabled="true">Newer</span>"#));
    assert!(html.contains(r#"href="/blog/page/11/""#));
}

#[test]
fn every_page_of_a_listing_through_the_cache() {
    let tmp = TempDir::new().unwrap();
    write_config(&tmp, "cache_capacity = 4\n");
    let config = config::load_config(tmp.path()).unwrap();
    let cache = config.cache();

    let total = 100;
    let last = page_count(total, config.page_size).unwrap();
    assert_eq!(last, 13);

    // Header and footer controls on every page.
    for _ in 0..2 {
        for page in 1..=last {
            let info = page_info_for_listing(page, total, config.page_size).unwrap();
            let result = cache.get_or_compute(info);
            assert_eq!(result, compute(info, config.window()));
        }
    }
    assert!(cache.len() <= 4);
    assert_eq!(cache.stats().total(), 26);
}

#[test]
fn last_page_of_listing() {
    let config = config::PaginationConfig::default();
    let posts: Vec<u32> = (1..=90).collect();
    let last = page_count(posts.len(), config.page_size).unwrap();
    let info = page_info_for_listing(last, posts.len(), config.page_size).unwrap();
    let result = compute(info, config.window());

    assert_eq!(page_items(&posts, last, config.page_size), &[89, 90]);
    assert_eq!(result.pages[1], PageEntry::Ellipsis);
    assert!(!result.is_next_enabled);
}
