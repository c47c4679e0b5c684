//! The pagination control.
//!
//! [`Pagination`] holds one render's worth of props: the current page, the
//! page size, the row count and two callbacks. It never changes its own
//! props. Navigation invokes the page callback with the target page and the
//! host decides what to render next.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use datatable_pagination::Pagination;
//!
//! let requested = Rc::new(Cell::new(None));
//! let sink = requested.clone();
//! let mut pagination = Pagination::new(1, 10, 40)
//!     .on_change_page(move |page| sink.set(Some(page)));
//!
//! assert!(pagination.go_last());
//! assert_eq!(requested.get(), Some(4));
//! ```

mod events;
mod render;

use std::fmt;

use log::{debug, trace};

use crate::bounds::{number_of_pages, recalculate_page, PageRange};
use crate::options::{Direction, PaginationIcons, PaginationOptions, DEFAULT_ROWS_PER_PAGE_OPTIONS};

/// Stable element ids of the rendered control.
pub mod ids {
    pub const ROOT: &str = "pagination";
    pub const ROWS_PER_PAGE_LABEL: &str = "pagination-rows-per-page-label";
    pub const ROWS_PER_PAGE: &str = "pagination-rows-per-page";
    pub const RANGE: &str = "pagination-range";
    pub const FIRST_PAGE: &str = "pagination-first-page";
    pub const PREVIOUS_PAGE: &str = "pagination-previous-page";
    pub const NEXT_PAGE: &str = "pagination-next-page";
    pub const LAST_PAGE: &str = "pagination-last-page";
}

type PageHandler = Box<dyn FnMut(u32)>;
type RowsPerPageHandler = Box<dyn FnMut(u32, u32)>;

/// Page navigation buttons plus a rows-per-page selector.
pub struct Pagination {
    current_page: u32,
    rows_per_page: u32,
    row_count: u32,
    rows_per_page_options: Vec<u32>,
    options: PaginationOptions,
    icons: PaginationIcons,
    direction: Direction,
    compact: bool,
    on_change_page: PageHandler,
    on_change_rows_per_page: RowsPerPageHandler,
}

impl fmt::Debug for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pagination")
            .field("current_page", &self.current_page)
            .field("rows_per_page", &self.rows_per_page)
            .field("row_count", &self.row_count)
            .field("rows_per_page_options", &self.rows_per_page_options)
            .field("options", &self.options)
            .field("direction", &self.direction)
            .field("compact", &self.compact)
            .finish_non_exhaustive()
    }
}

impl Pagination {
    /// Create a control for `row_count` rows split into pages of `rows_per_page`.
    ///
    /// Both callbacks start as no-ops.
    pub fn new(current_page: u32, rows_per_page: u32, row_count: u32) -> Self {
        Self {
            current_page,
            rows_per_page,
            row_count,
            rows_per_page_options: DEFAULT_ROWS_PER_PAGE_OPTIONS.to_vec(),
            options: PaginationOptions::default(),
            icons: PaginationIcons::default(),
            direction: Direction::default(),
            compact: false,
            on_change_page: Box::new(|_| {}),
            on_change_rows_per_page: Box::new(|_, _| {}),
        }
    }

    /// Called with the requested page.
    pub fn on_change_page(mut self, handler: impl FnMut(u32) + 'static) -> Self {
        self.on_change_page = Box::new(handler);
        self
    }

    /// Called with the new page size and the page current at the time.
    pub fn on_change_rows_per_page(mut self, handler: impl FnMut(u32, u32) + 'static) -> Self {
        self.on_change_rows_per_page = Box::new(handler);
        self
    }

    pub fn options(mut self, options: PaginationOptions) -> Self {
        self.options = options;
        self
    }

    /// Page sizes offered by the selector.
    pub fn rows_per_page_options(mut self, sizes: impl IntoIterator<Item = u32>) -> Self {
        self.rows_per_page_options = sizes.into_iter().collect();
        self
    }

    pub fn icons(mut self, icons: PaginationIcons) -> Self {
        self.icons = icons;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Lay out for a narrow viewport: no range label, selector after the buttons.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    // -------------------------------------------------------------------------
    // Props
    // -------------------------------------------------------------------------

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn rows_per_page(&self) -> u32 {
        self.rows_per_page
    }

    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    pub fn pagination_options(&self) -> &PaginationOptions {
        &self.options
    }

    pub fn last_page(&self) -> u32 {
        number_of_pages(self.row_count, self.rows_per_page)
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.last_page()
    }

    /// Rows shown on the current page, clamped to the last page.
    pub fn page_range(&self) -> PageRange {
        let page = recalculate_page(self.current_page, self.last_page());
        PageRange::new(page, self.rows_per_page, self.row_count)
    }

    /// Values offered by the selector, including the show-everything item.
    pub fn selector_values(&self) -> Vec<u32> {
        let mut values = self.rows_per_page_options.clone();
        if self.options.select_all_rows_item {
            values.push(self.row_count);
        }
        values
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Request page 1. Returns false when already there.
    pub fn go_first(&mut self) -> bool {
        if self.is_first_page() {
            trace!("pagination: first page ignored on page {}", self.current_page);
            return false;
        }
        self.emit_page(1)
    }

    /// Request the last page. Returns false when already there.
    pub fn go_last(&mut self) -> bool {
        if self.is_last_page() {
            trace!("pagination: last page ignored on page {}", self.current_page);
            return false;
        }
        self.emit_page(self.last_page())
    }

    /// Request the following page. Returns false on the last page.
    pub fn go_next(&mut self) -> bool {
        if self.is_last_page() {
            trace!("pagination: next page ignored on page {}", self.current_page);
            return false;
        }
        self.emit_page(self.current_page + 1)
    }

    /// Request the preceding page. Returns false on the first page.
    ///
    /// A current page past the end (the table shrank) steps back to the last page.
    pub fn go_previous(&mut self) -> bool {
        if self.is_first_page() {
            trace!("pagination: previous page ignored on page {}", self.current_page);
            return false;
        }
        self.emit_page(recalculate_page(self.current_page - 1, self.last_page()))
    }

    /// Report a new page size along with the current page.
    pub fn change_rows_per_page(&mut self, rows_per_page: u32) {
        debug!(
            "pagination: rows per page {} -> {} on page {}",
            self.rows_per_page, rows_per_page, self.current_page
        );
        (self.on_change_rows_per_page)(rows_per_page, self.current_page);
    }

    /// Step the page size to the next larger (or smaller) selector value.
    ///
    /// With `wrap`, stepping past either end continues from the other one.
    /// Returns false when the selector is hidden or no such value exists.
    pub fn step_rows_per_page(&mut self, larger: bool, wrap: bool) -> bool {
        if self.options.no_rows_per_page {
            return false;
        }

        let current = self.rows_per_page;
        let values: Vec<u32> = self
            .selector_values()
            .into_iter()
            .filter(|&size| size > 0)
            .collect();
        let sizes = values.iter().copied();
        let target = if larger {
            sizes.filter(|&size| size > current).min()
        } else {
            sizes.filter(|&size| size < current).max()
        };
        let target = match target {
            None if wrap && larger => values.iter().copied().min(),
            None if wrap => values.iter().copied().max(),
            other => other,
        };

        match target {
            Some(size) if size != current => {
                self.change_rows_per_page(size);
                true
            }
            _ => false,
        }
    }

    fn emit_page(&mut self, page: u32) -> bool {
        debug!("pagination: page {} -> {}", self.current_page, page);
        (self.on_change_page)(page);
        true
    }
}
