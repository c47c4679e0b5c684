mod content;
mod node;

pub use content::{Content, Role, SelectOption};
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find the first element with the given role whose accessible name matches `label`.
pub fn find_by_label<'a>(root: &'a Element, role: Role, label: &str) -> Option<&'a Element> {
    if root.role == role && root.accessible_name() == Some(label) {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_by_label(child, role, label) {
            return Some(found);
        }
    }

    None
}

/// Collect the leaf elements in document order.
pub fn leaves(root: &Element) -> Vec<&Element> {
    let mut out = Vec::new();
    collect_leaves(root, &mut out);
    out
}

fn collect_leaves<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    match &element.content {
        Content::Children(children) => {
            for child in children {
                collect_leaves(child, out);
            }
        }
        _ => out.push(element),
    }
}
