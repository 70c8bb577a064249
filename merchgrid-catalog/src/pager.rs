//! Pagination arithmetic shared by the grid renderer and the pager controls.

/// Products shown per grid page.
pub const PAGE_SIZE: usize = 6;

/// Number of pages needed for `total_items` at `page_size` items per page.
/// Zero items means zero pages, as does a zero page size (nothing fits on
/// any page).
#[must_use]
pub const fn page_count(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// The slice of `items` belonging to 1-based `page`. Out-of-range pages
/// yield a short or empty slice, never a panic.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Pager position derived from the browse state and the current bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    /// 1-based current page.
    pub current: usize,
    /// Total pages; 0 when the bucket is empty.
    pub total: usize,
}

impl PageView {
    #[must_use]
    pub fn new(current: usize, total: usize) -> Self {
        Self {
            current: current.max(1),
            total,
        }
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.total > 0 && self.current < self.total
    }
}
