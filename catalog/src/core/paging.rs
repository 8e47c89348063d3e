//! Page arithmetic for the fixed-size catalog paginator.

/// Records per page. The endpoint is always queried with this limit.
pub const PAGE_SIZE: u32 = 12;

/// Number of pages needed for `total` records. An empty catalog still has
/// one (empty) page so the paginator always has somewhere to stand.
pub fn total_pages(total: u64) -> u32 {
    if total == 0 {
        return 1;
    }
    u32::try_from(total.div_ceil(u64::from(PAGE_SIZE))).unwrap_or(u32::MAX)
}

/// Next page number, clamped to the last page.
pub fn next_page(current: u32, total: u64) -> u32 {
    current.saturating_add(1).min(total_pages(total))
}

/// Previous page number, clamped to page 1.
pub fn prev_page(current: u32) -> u32 {
    current.saturating_sub(1).max(1)
}

/// 1-indexed range of record positions shown on `page`, for "showing X-Y
/// of Z" displays. `None` when the page is past the data.
pub fn record_range(page: u32, total: u64) -> Option<(u64, u64)> {
    if total == 0 || page == 0 {
        return None;
    }
    let first = u64::from(page - 1) * u64::from(PAGE_SIZE) + 1;
    if first > total {
        return None;
    }
    let last = (first + u64::from(PAGE_SIZE) - 1).min(total);
    Some((first, last))
}
