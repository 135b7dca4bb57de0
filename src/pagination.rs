//! Fixed-size page slicing and the ellipsis page-number window.

use std::ops::Range;

use serde::Serialize;

/// Items shown per page on the public blog grid.
pub const BLOG_PAGE_SIZE: usize = 6;
/// Items shown per page on the admin tables.
pub const ADMIN_PAGE_SIZE: usize = 10;

/// Clamps a requested page into the valid range and returns the slice
/// bounds for it.
///
/// `total_pages` is zero when there are no items at all; the caller renders
/// the empty state instead of a one-page shell. Out-of-range requests (for
/// example a stale page after the filter narrowed the set) clamp silently,
/// they are never an error.
pub fn page_bounds(total: usize, page_size: usize, page: usize) -> (usize, usize, Range<usize>) {
    debug_assert!(page_size > 0);

    if total == 0 {
        return (1, 0, 0..0);
    }

    let total_pages = total.div_ceil(page_size);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total);
    (page, total_pages, start..end)
}

fn page_window(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page of records plus the page-number links for the template. `None`
/// entries in `pages` render as an ellipsis.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = current_page.max(1);

        // First and last page stay visible, current keeps two neighbors on
        // each side, gaps collapse to an ellipsis.
        let pages = page_window(total_pages, current_page, 1, 2, 2, 1);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
        }
    }

    /// Slices one page out of an ordered, already-filtered sequence.
    pub fn from_filtered(filtered: Vec<T>, page_size: usize, requested_page: usize) -> Self {
        let (page, total_pages, range) = page_bounds(filtered.len(), page_size, requested_page);
        let items = filtered
            .into_iter()
            .skip(range.start)
            .take(range.len())
            .collect();
        Self::new(items, page, total_pages)
    }
}
