//! Event routing for the pagination control.

use log::trace;

use crate::error::{PaginationError, Result};
use crate::event::{Event, EventResult, Key};
use crate::options::Direction;

use super::{ids, Pagination};

impl Pagination {
    /// Route an event to the operation its target stands for.
    ///
    /// Clicks reach the navigation operations even when the button renders
    /// disabled; the operations themselves refuse to leave `[1, last_page]`.
    pub fn dispatch(&mut self, event: &Event) -> Result<EventResult> {
        match event {
            Event::Click { target } => self.on_click(target),
            Event::Change { target, value } => self.on_change(target, value),
            Event::Key { key } => Ok(self.on_key(*key)),
        }
    }

    fn on_click(&mut self, target: &str) -> Result<EventResult> {
        match target {
            ids::FIRST_PAGE => {
                self.go_first();
            }
            ids::PREVIOUS_PAGE => {
                self.go_previous();
            }
            ids::NEXT_PAGE => {
                self.go_next();
            }
            ids::LAST_PAGE => {
                self.go_last();
            }
            ids::ROOT | ids::RANGE | ids::ROWS_PER_PAGE_LABEL | ids::ROWS_PER_PAGE => {
                trace!("pagination: click on '{target}' ignored");
                return Ok(EventResult::Ignored);
            }
            _ => return Err(PaginationError::UnknownTarget(target.to_string())),
        }
        Ok(EventResult::Consumed)
    }

    fn on_change(&mut self, target: &str, value: &str) -> Result<EventResult> {
        match target {
            ids::ROWS_PER_PAGE => {
                let size = value
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|&size| size > 0)
                    .ok_or_else(|| PaginationError::InvalidValue {
                        target: target.to_string(),
                        value: value.to_string(),
                    })?;
                self.change_rows_per_page(size);
                Ok(EventResult::Consumed)
            }
            ids::ROOT
            | ids::RANGE
            | ids::ROWS_PER_PAGE_LABEL
            | ids::FIRST_PAGE
            | ids::PREVIOUS_PAGE
            | ids::NEXT_PAGE
            | ids::LAST_PAGE => Err(PaginationError::NotASelect(target.to_string())),
            _ => Err(PaginationError::UnknownTarget(target.to_string())),
        }
    }

    fn on_key(&mut self, key: Key) -> EventResult {
        let rtl = self.direction == Direction::Rtl;
        match key {
            Key::Home => {
                self.go_first();
            }
            Key::End => {
                self.go_last();
            }
            Key::Left if rtl => {
                self.go_next();
            }
            Key::Left => {
                self.go_previous();
            }
            Key::Right if rtl => {
                self.go_previous();
            }
            Key::Right => {
                self.go_next();
            }
            Key::PageDown | Key::PageUp if self.options.no_rows_per_page => {
                return EventResult::Ignored;
            }
            Key::PageDown => {
                self.step_rows_per_page(true, false);
            }
            Key::PageUp => {
                self.step_rows_per_page(false, false);
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}
