use motorpool_bot::util::{clamp_page, page_window};

#[test]
fn exact_multiple_of_page_size() {
    assert_eq!(page_window(10, 0, 5), (0, 5, 2));
    assert_eq!(page_window(10, 1, 5), (5, 10, 2));
}

#[test]
fn remainder_page_is_short() {
    assert_eq!(page_window(12, 2, 5), (10, 12, 3));
}

#[test]
fn single_page_listing_has_no_extra_pages() {
    assert_eq!(page_window(3, 0, 5), (0, 3, 1));
    assert_eq!(page_window(5, 0, 5), (0, 5, 1));
}

#[test]
fn empty_listing_yields_one_empty_page() {
    assert_eq!(page_window(0, 0, 5), (0, 0, 1));
}

#[test]
fn out_of_range_page_clamps_to_last() {
    // A stale Next button after cars were booked away must not land on an
    // empty screen.
    assert_eq!(page_window(12, 99, 5), (10, 12, 3));
    assert_eq!(clamp_page(12, 99, 5), 2);
    assert_eq!(clamp_page(12, 1, 5), 1);
    assert_eq!(clamp_page(0, 7, 5), 0);
}
