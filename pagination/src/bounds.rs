//! Page arithmetic shared by the control and its hosts.
//!
//! Pages are 1-based. A page size of 0 is treated as 1 so the arithmetic
//! never divides by zero, and an empty table still has one (empty) page.

use std::ops::Range;

/// Number of pages needed for `row_count` rows, never less than 1.
pub fn number_of_pages(row_count: u32, rows_per_page: u32) -> u32 {
    row_count.div_ceil(rows_per_page.max(1)).max(1)
}

/// Clamp a page into `[1, total_pages]`.
///
/// Hosts call this after the page size changes, since the old page may no
/// longer exist.
pub fn recalculate_page(current_page: u32, total_pages: u32) -> u32 {
    current_page.min(total_pages).max(1)
}

/// Indices of the rows shown on `current_page`.
pub fn row_range(current_page: u32, rows_per_page: u32, row_count: u32) -> Range<usize> {
    let per_page = rows_per_page.max(1) as usize;
    let row_count = row_count as usize;
    let start = (current_page.max(1) as usize - 1)
        .saturating_mul(per_page)
        .min(row_count);
    let end = start.saturating_add(per_page).min(row_count);
    start..end
}

/// The 1-based rows shown on a page, as displayed in the range label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub first: u32,
    pub last: u32,
    pub total: u32,
}

impl PageRange {
    pub fn new(current_page: u32, rows_per_page: u32, row_count: u32) -> Self {
        let rows = row_range(current_page, rows_per_page, row_count);
        if rows.is_empty() {
            return Self {
                first: 0,
                last: 0,
                total: row_count,
            };
        }

        Self {
            first: rows.start as u32 + 1,
            last: rows.end as u32,
            total: row_count,
        }
    }

    /// Format as `"11-20 of 40"`.
    pub fn display(&self, separator: &str) -> String {
        format!("{}-{} {} {}", self.first, self.last, separator, self.total)
    }
}
