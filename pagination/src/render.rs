//! Single-line text rendering of an element tree.

use crate::element::{leaves, Content, Element, Role};
use crate::text::truncate_to_width;

/// Columns between rendered leaves.
pub const GAP: u16 = 1;

/// Render the leaves of `root` on one line, cut to `width` columns.
///
/// Enabled buttons render as `[glyph]`, disabled ones as ` glyph `, and a
/// selector as `<label ▾>`. Positions match [`crate::layout::layout_row`]
/// with the same gap.
pub fn render_line(root: &Element, width: u16) -> String {
    let separator = " ".repeat(GAP as usize);
    let line = leaves(root)
        .into_iter()
        .map(node_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(&separator);
    truncate_to_width(&line, width as usize)
}

pub(crate) fn node_text(element: &Element) -> String {
    match (&element.role, &element.content) {
        (Role::Button, Content::Text(glyph)) if element.disabled => format!(" {glyph} "),
        (Role::Button, Content::Text(glyph)) => format!("[{glyph}]"),
        (Role::Select, Content::Select { value, .. }) => {
            let label = element
                .selected_option()
                .map(|option| option.label.as_str())
                .unwrap_or(value.as_str());
            format!("<{label} ▾>")
        }
        (_, Content::Text(text)) => text.clone(),
        _ => String::new(),
    }
}
