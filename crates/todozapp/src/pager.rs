//! Slice windowing and the page-number display list.
//!
//! Two independent derivations from `(filtered_count, per_page, current)`: the
//! index window of the visible slice, and the ellipsis-compressed row of page
//! controls. An ellipsis stands in for a run of hidden pages only when more
//! than one page is hidden; a single hidden page is simply omitted.

use std::ops::Range;

/// How many pages to show on each side of the current page.
pub const NEIGHBOR_RADIUS: usize = 2;

/// One entry in the page-control row. Ellipsis entries are non-interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// The current page number and fixed page size governing which slice of the
/// filtered set is rendered. `current` is 1-based and never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current: usize,
    pub per_page: usize,
}

impl PageState {
    /// `per_page` is clamped to at least 1; a zero page size has no meaning
    /// and would make every derivation divide by zero.
    pub fn new(per_page: usize) -> Self {
        Self {
            current: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn window(&self, filtered_len: usize) -> Range<usize> {
        slice_window(filtered_len, self.per_page, self.current)
    }

    pub fn total_pages(&self, filtered_len: usize) -> usize {
        total_pages(filtered_len, self.per_page)
    }

    pub fn numbers(&self, filtered_len: usize) -> Vec<PageItem> {
        page_numbers(self.total_pages(filtered_len), self.current)
    }
}

/// Number of pages needed for `filtered_len` records: `ceil(len / per_page)`.
/// Zero records means zero pages. A zero `per_page` is treated as 1.
pub fn total_pages(filtered_len: usize, per_page: usize) -> usize {
    filtered_len.div_ceil(per_page.max(1))
}

/// The half-open index range of records visible on `current`. Clamped to the
/// available length, so a page past the end yields an empty window.
pub fn slice_window(filtered_len: usize, per_page: usize, current: usize) -> Range<usize> {
    let per_page = per_page.max(1);
    let first_unclamped = current.saturating_sub(1).saturating_mul(per_page);
    let last = first_unclamped.saturating_add(per_page).min(filtered_len);
    let first = first_unclamped.min(last);
    first..last
}

/// The ellipsis-compressed page-control row.
///
/// Page 1 and the last page are always present; the pages within
/// [`NEIGHBOR_RADIUS`] of `current` fill the middle. A gap of more than one
/// hidden page collapses to an ellipsis. One page or fewer produces no
/// controls at all.
pub fn page_numbers(total_pages: usize, current: usize) -> Vec<PageItem> {
    page_numbers_with_radius(total_pages, current, NEIGHBOR_RADIUS)
}

fn page_numbers_with_radius(total_pages: usize, current: usize, delta: usize) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let start = current.saturating_sub(delta).max(2);
    let end = current.saturating_add(delta).min(total_pages - 1);

    let mut items = vec![PageItem::Page(1)];
    if start <= end {
        // Pages 2..start are hidden; more than one of them earns a marker.
        if start > 3 {
            items.push(PageItem::Ellipsis);
        }
        for page in start..=end {
            items.push(PageItem::Page(page));
        }
        // Same rule for the run between the range end and the last page.
        if end + 2 < total_pages {
            items.push(PageItem::Ellipsis);
        }
    } else if total_pages > 3 {
        // current sits past the last page, so the whole middle is hidden.
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));
    items
}
