//! Pagination control for data tables.
//!
//! The control renders into a small element tree where every node has a
//! stable id, a role and an accessible name. Hosts draw the tree however they
//! like and feed user input back as [`Event`]s targeted at those ids.

pub mod bounds;
pub mod element;
pub mod error;
pub mod event;
pub mod hit;
pub mod layout;
pub mod options;
pub mod pagination;
pub mod render;
pub mod text;

pub use bounds::{number_of_pages, recalculate_page, row_range, PageRange};
pub use element::{find_by_label, find_element, Element, Role, SelectOption};
pub use error::{PaginationError, Result};
pub use event::{Event, EventResult, Key};
pub use hit::hit_test;
pub use layout::{layout_row, LayoutResult, Rect};
pub use options::{Direction, PaginationIcons, PaginationOptions, DEFAULT_ROWS_PER_PAGE_OPTIONS};
pub use pagination::{ids, Pagination};
pub use render::render_line;
