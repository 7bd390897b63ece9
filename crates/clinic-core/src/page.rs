//! Offset pagination over a derived view.
//!
//! The processor never paginates; screens slice the sorted view themselves.

use clinic_contracts::view::Page;

/// Slice page `page` (1-based) of `items`.
///
/// Page 0 is treated as page 1 and a page size of 0 as 1. A page past the
/// end yields an empty slice while still reporting the real totals.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);

    Page {
        items: &items[start..end],
        page,
        page_size,
        total_items,
        total_pages,
    }
}
