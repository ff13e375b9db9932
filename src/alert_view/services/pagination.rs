/// Pagination math for the alert table.
///
/// Every function here is a pure derivation from (total, page, page_size);
/// callers must re-derive on each state change rather than cache results.
/// Stale derived paging state is the primary bug class this module guards
/// against.

/// Maximum number of page buttons shown in the pagination control.
const MAX_VISIBLE_PAGES: usize = 7;

/// Total page count: at least 1, even for an empty collection.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    debug_assert!(page_size >= 1);
    std::cmp::max(1, total.div_ceil(page_size))
}

/// Clamps a 1-based page number into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages)
}

/// Half-open index range `[start, end)` of the records visible on `page`.
///
/// `page` must already be clamped. For an empty collection this is `[0, 0)`.
pub fn slice_bounds(total: usize, page: usize, page_size: usize) -> (usize, usize) {
    let start = (page - 1) * page_size;
    let end = std::cmp::min(start + page_size, total);
    (std::cmp::min(start, end), end)
}

/// Inclusive range of page numbers to render as buttons.
///
/// At most [`MAX_VISIBLE_PAGES`] buttons, centered on the current page when
/// possible. At either end the window slides to stay inside
/// `[1, total_pages]` instead of shrinking.
pub fn page_window(current: usize, total_pages: usize) -> (usize, usize) {
    let start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = start + MAX_VISIBLE_PAGES - 1;
    if end > total_pages {
        let end = total_pages;
        let start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
        (start, end)
    } else {
        (start, end)
    }
}
