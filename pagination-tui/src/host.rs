//! Table state owned by the terminal host.

use std::cell::RefCell;
use std::rc::Rc;

use datatable_pagination::{
    number_of_pages, recalculate_page, row_range, Direction, Pagination, PaginationOptions,
};
use log::info;

/// Callback invocations queued until the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMessage {
    ChangePage(u32),
    ChangeRowsPerPage(u32, u32),
}

pub struct TableHost {
    rows: Vec<String>,
    current_page: u32,
    rows_per_page: u32,
    options: PaginationOptions,
    direction: Direction,
    queue: Rc<RefCell<Vec<HostMessage>>>,
}

impl TableHost {
    pub fn new(rows: Vec<String>, options: PaginationOptions) -> Self {
        Self {
            rows,
            current_page: 1,
            rows_per_page: 10,
            options,
            direction: Direction::Ltr,
            queue: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn rows_per_page(&self) -> u32 {
        self.rows_per_page
    }

    fn row_count(&self) -> u32 {
        self.rows.len().min(u32::MAX as usize) as u32
    }

    /// Props for this frame's control.
    pub fn pagination(&self, compact: bool) -> Pagination {
        let pages = self.queue.clone();
        let sizes = self.queue.clone();
        Pagination::new(self.current_page, self.rows_per_page, self.row_count())
            .options(self.options.clone())
            .direction(self.direction)
            .compact(compact)
            .on_change_page(move |page| pages.borrow_mut().push(HostMessage::ChangePage(page)))
            .on_change_rows_per_page(move |size, page| {
                sizes
                    .borrow_mut()
                    .push(HostMessage::ChangeRowsPerPage(size, page))
            })
    }

    /// Apply queued callbacks. Returns true if anything changed.
    pub fn apply_pending(&mut self) -> bool {
        let messages: Vec<HostMessage> = self.queue.borrow_mut().drain(..).collect();
        let changed = !messages.is_empty();

        for message in messages {
            match message {
                HostMessage::ChangePage(page) => {
                    info!("page {} -> {}", self.current_page, page);
                    self.current_page = page;
                }
                HostMessage::ChangeRowsPerPage(size, page) => {
                    let pages = number_of_pages(self.row_count(), size);
                    self.rows_per_page = size;
                    self.current_page = recalculate_page(page, pages);
                    info!(
                        "rows per page -> {}, page {} of {}",
                        size, self.current_page, pages
                    );
                }
            }
        }

        changed
    }

    pub fn visible_rows(&self) -> &[String] {
        &self.rows[row_range(self.current_page, self.rows_per_page, self.row_count())]
    }

    pub fn toggle_direction(&mut self) {
        self.direction = match self.direction {
            Direction::Ltr => Direction::Rtl,
            Direction::Rtl => Direction::Ltr,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datatable_pagination::{ids, Event};

    fn host(rows: usize) -> TableHost {
        let rows = (1..=rows).map(|n| format!("Row {n}")).collect();
        TableHost::new(rows, PaginationOptions::default())
    }

    #[test]
    fn next_page_shows_following_rows() {
        let mut host = host(25);

        host.pagination(false)
            .dispatch(&Event::click(ids::NEXT_PAGE))
            .unwrap();
        assert!(host.apply_pending());

        assert_eq!(host.current_page(), 2);
        assert_eq!(host.visible_rows().first().map(String::as_str), Some("Row 11"));
    }

    #[test]
    fn larger_page_size_clamps_current_page() {
        let mut host = host(25);
        host.pagination(false).go_last();
        host.apply_pending();
        assert_eq!(host.current_page(), 3);

        host.pagination(false)
            .dispatch(&Event::change(ids::ROWS_PER_PAGE, "20"))
            .unwrap();
        host.apply_pending();

        assert_eq!(host.rows_per_page(), 20);
        assert_eq!(host.current_page(), 2);
        assert_eq!(host.visible_rows().len(), 5);
    }

    #[test]
    fn noop_leaves_state_untouched() {
        let mut host = host(25);

        host.pagination(false).go_previous();

        assert!(!host.apply_pending());
        assert_eq!(host.current_page(), 1);
    }
}
