use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest clickable, enabled element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    let rect = layout.get(&root.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    for child in root.child_elements().iter().rev() {
        if let Some(id) = hit_test(layout, child, x, y) {
            return Some(id);
        }
    }

    if root.clickable && !root.disabled {
        Some(root.id.clone())
    } else {
        None
    }
}
