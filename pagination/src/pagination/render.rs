//! Element tree for the pagination control.

use crate::element::{Element, Role, SelectOption};

use super::{ids, Pagination};

impl Pagination {
    /// Build the element tree for the current props.
    ///
    /// Buttons at a bound are rendered disabled. The selector is left out when
    /// `no_rows_per_page` is set, whatever the layout.
    pub fn element(&self) -> Element {
        let options = self.pagination_options();
        let icons = self.icons.for_direction(self.direction);
        let show_selector = !options.no_rows_per_page;
        let at_start = self.is_first_page();
        let at_end = self.is_last_page();

        let mut root = Element::row()
            .id(ids::ROOT)
            .role(Role::Group)
            .data("direction", self.direction.as_str());

        if show_selector && !self.compact {
            root = root
                .child(Element::text(&options.rows_per_page_text).id(ids::ROWS_PER_PAGE_LABEL))
                .child(self.selector());
        }

        if !self.compact {
            root = root.child(
                Element::text(self.page_range().display(&options.range_separator_text))
                    .id(ids::RANGE),
            );
        }

        root = root.children([
            nav_button(ids::FIRST_PAGE, &icons.first, &options.first_page_label, at_start),
            nav_button(
                ids::PREVIOUS_PAGE,
                &icons.previous,
                &options.previous_page_label,
                at_start,
            ),
            nav_button(ids::NEXT_PAGE, &icons.next, &options.next_page_label, at_end),
            nav_button(ids::LAST_PAGE, &icons.last, &options.last_page_label, at_end),
        ]);

        if show_selector && self.compact {
            root = root.child(self.selector());
        }

        root
    }

    fn selector(&self) -> Element {
        let mut choices: Vec<SelectOption> = self
            .rows_per_page_options
            .iter()
            .map(|size| SelectOption::new(size.to_string(), size.to_string()))
            .collect();

        if self.options.select_all_rows_item {
            choices.push(SelectOption::new(
                self.row_count().to_string(),
                &self.options.select_all_rows_item_text,
            ));
        }

        Element::select(choices, self.rows_per_page.to_string())
            .id(ids::ROWS_PER_PAGE)
            .aria_label(&self.options.rows_per_page_text)
    }
}

fn nav_button(id: &str, glyph: &str, label: &str, disabled: bool) -> Element {
    Element::button(glyph)
        .id(id)
        .aria_label(label)
        .clickable(!disabled)
        .disabled(disabled)
}
