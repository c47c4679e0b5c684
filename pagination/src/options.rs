//! Control configuration.

use serde::Deserialize;

use crate::error::Result;

/// Page sizes offered by the rows-per-page selector unless the host overrides them.
pub const DEFAULT_ROWS_PER_PAGE_OPTIONS: [u32; 5] = [10, 15, 20, 25, 30];

/// Labels and switches consulted when the control renders.
///
/// Keys deserialize in camelCase (`noRowsPerPage`, `firstPageLabel`, ...) and
/// missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationOptions {
    /// Hide the rows-per-page selector entirely.
    pub no_rows_per_page: bool,

    /// Text before the selector; also its accessible name.
    pub rows_per_page_text: String,

    /// Word between the row range and the total, as in `1-10 of 40`.
    pub range_separator_text: String,

    /// Append a selector option showing every row at once.
    pub select_all_rows_item: bool,

    /// Label of the show-everything option.
    pub select_all_rows_item_text: String,

    pub first_page_label: String,
    pub last_page_label: String,
    pub next_page_label: String,
    pub previous_page_label: String,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            no_rows_per_page: false,
            rows_per_page_text: "Rows per page:".into(),
            range_separator_text: "of".into(),
            select_all_rows_item: false,
            select_all_rows_item_text: "All".into(),
            first_page_label: "First Page".into(),
            last_page_label: "Last Page".into(),
            next_page_label: "Next Page".into(),
            previous_page_label: "Previous Page".into(),
        }
    }
}

impl PaginationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Hide the rows-per-page selector.
    pub fn no_rows_per_page(mut self) -> Self {
        self.no_rows_per_page = true;
        self
    }

    pub fn rows_per_page_text(mut self, text: impl Into<String>) -> Self {
        self.rows_per_page_text = text.into();
        self
    }

    pub fn range_separator_text(mut self, text: impl Into<String>) -> Self {
        self.range_separator_text = text.into();
        self
    }

    /// Offer a selector option that shows every row, labelled `text`.
    pub fn select_all_rows_item(mut self, text: impl Into<String>) -> Self {
        self.select_all_rows_item = true;
        self.select_all_rows_item_text = text.into();
        self
    }

    pub fn first_page_label(mut self, label: impl Into<String>) -> Self {
        self.first_page_label = label.into();
        self
    }

    pub fn last_page_label(mut self, label: impl Into<String>) -> Self {
        self.last_page_label = label.into();
        self
    }

    pub fn next_page_label(mut self, label: impl Into<String>) -> Self {
        self.next_page_label = label.into();
        self
    }

    pub fn previous_page_label(mut self, label: impl Into<String>) -> Self {
        self.previous_page_label = label.into();
        self
    }
}

/// Reading direction of the host table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Glyphs drawn on the navigation buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationIcons {
    pub first: String,
    pub previous: String,
    pub next: String,
    pub last: String,
}

impl Default for PaginationIcons {
    fn default() -> Self {
        Self {
            first: "«".into(),
            previous: "‹".into(),
            next: "›".into(),
            last: "»".into(),
        }
    }
}

impl PaginationIcons {
    /// Glyphs as drawn for `direction`; right-to-left mirrors every arrow.
    pub fn for_direction(&self, direction: Direction) -> Self {
        match direction {
            Direction::Ltr => self.clone(),
            Direction::Rtl => Self {
                first: self.last.clone(),
                previous: self.next.clone(),
                next: self.previous.clone(),
                last: self.first.clone(),
            },
        }
    }
}
