//! Misc small utilities shared across modules.

/// Pagination window over a listing of `total` entries.
///
/// Returned as (start, end, total_pages) where `start..end` indexes the
/// current page and `total_pages` is at least 1. Out-of-range pages clamp to
/// the last page so a stale Next button never lands on an empty screen.
pub fn page_window(total: usize, page: usize, page_size: usize) -> (usize, usize, usize) {
    assert!(page_size > 0);
    let total_pages = total.div_ceil(page_size).max(1);
    let page = page.min(total_pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(total);
    (start, end, total_pages)
}

/// Clamp a requested page index to the valid range for `total` entries.
pub fn clamp_page(total: usize, page: usize, page_size: usize) -> usize {
    assert!(page_size > 0);
    let total_pages = total.div_ceil(page_size).max(1);
    page.min(total_pages - 1)
}
