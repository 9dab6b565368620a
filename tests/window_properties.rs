//! Property tests for the page row over arbitrary valid positions.

use playful_pager::cache::WindowCache;
use playful_pager::window::{PageEntry, PageInfo, WindowConfig, compute, paginate};
use proptest::prelude::*;

/// `(current, last)` with `1 <= current <= last`.
fn position(max_last: u32) -> impl Strategy<Value = (u32, u32)> {
    (1..=max_last).prop_flat_map(|last| (1..=last, Just(last)))
}

proptest! {
    #[test]
    fn first_and_last_page_always_shown((current, last) in position(500), count in 1u32..12) {
        let result = paginate(current, last, WindowConfig::new(count).unwrap()).unwrap();
        prop_assert_eq!(result.pages.first(), Some(&PageEntry::Page(1)));
        prop_assert_eq!(result.pages.last(), Some(&PageEntry::Page(last)));
    }

    #[test]
    fn numbered_pages_strictly_increase((current, last) in position(500), count in 1u32..12) {
        let result = paginate(current, last, WindowConfig::new(count).unwrap()).unwrap();
        let numbers: Vec<u32> = result.page_numbers().collect();
        prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]), "{:?}", numbers);
        prop_assert!(numbers.iter().all(|&n| (1..=last).contains(&n)));
    }

    #[test]
    fn at_most_one_ellipsis((current, last) in position(500), count in 1u32..12) {
        let config = WindowConfig::new(count).unwrap();
        let result = paginate(current, last, config).unwrap();
        let dots = result.pages.iter().filter(|e| e.is_ellipsis()).count();
        prop_assert!(dots <= 1);
        prop_assert_eq!(dots == 1, result.is_dots_enabled);
        prop_assert_eq!(result.is_dots_enabled, last > count + 2);
    }

    #[test]
    fn ellipsis_only_where_pages_are_hidden((current, last) in position(500)) {
        let result = paginate(current, last, WindowConfig::default()).unwrap();
        for (i, entry) in result.pages.iter().enumerate() {
            if entry.is_ellipsis() {
                let before = result.pages[i - 1].page().unwrap();
                let after = result.pages[i + 1].page().unwrap();
                prop_assert!(after - before > 1);
            }
        }
    }

    #[test]
    fn current_page_is_visible((current, last) in position(500)) {
        let result = paginate(current, last, WindowConfig::default()).unwrap();
        prop_assert!(result.page_numbers().any(|n| n == current));
    }

    #[test]
    fn short_listings_show_every_page((current, last) in position(8)) {
        let result = paginate(current, last, WindowConfig::default()).unwrap();
        let expected: Vec<PageEntry> = (1..=last).map(PageEntry::Page).collect();
        prop_assert_eq!(result.pages, expected);
    }

    #[test]
    fn previous_next_flags((current, last) in position(500)) {
        let result = paginate(current, last, WindowConfig::default()).unwrap();
        prop_assert_eq!(result.is_previous_enabled, current > 1);
        prop_assert_eq!(result.is_next_enabled, current < last);
    }

    #[test]
    fn identical_inputs_identical_rows((current, last) in position(500)) {
        let info = PageInfo::new(current, last).unwrap();
        let cache = WindowCache::new(WindowConfig::default(), 4);
        let direct = compute(info, WindowConfig::default());
        prop_assert_eq!(&compute(info, WindowConfig::default()), &direct);
        prop_assert_eq!(&cache.get_or_compute(info), &direct);
        prop_assert_eq!(&cache.get_or_compute(info), &direct);
    }

    #[test]
    fn row_never_exceeds_budget((current, last) in position(500), count in 1u32..12) {
        let result = paginate(current, last, WindowConfig::new(count).unwrap()).unwrap();
        // window + first + last + one ellipsis
        prop_assert!(result.pages.len() <= count as usize + 3);
    }

    #[test]
    fn any_button_count_keeps_row_within_listing(
        (current, last) in position(500),
        count in 1u32..=u32::MAX,
    ) {
        let result = paginate(current, last, WindowConfig::new(count).unwrap()).unwrap();
        let numbers: Vec<u32> = result.page_numbers().collect();
        prop_assert!(numbers.len() <= last as usize);
        prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(numbers.first(), Some(&1));
        prop_assert_eq!(numbers.last(), Some(&last));
        prop_assert!(result.pages.len() <= last as usize + 1);
    }

    #[test]
    fn invalid_positions_rejected(current in 0u32..50, last in 0u32..50) {
        let valid = last >= 1 && current >= 1 && current <= last;
        prop_assert_eq!(PageInfo::new(current, last).is_ok(), valid);
    }
}
