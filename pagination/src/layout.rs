use std::collections::HashMap;

use crate::element::{leaves, Element};
use crate::render::node_text;
use crate::text::display_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Element id to the rect it occupies.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }
}

/// Place the leaves of `root` left to right on row `y`, `gap` columns apart.
///
/// Every container gets the rect spanning its leaves. Leaves that would start
/// past `max_width` are not placed.
pub fn layout_row(root: &Element, x: u16, y: u16, gap: u16, max_width: u16) -> LayoutResult {
    let mut layout = LayoutResult::new();
    let mut cursor = x;
    let limit = x.saturating_add(max_width);

    for leaf in leaves(root) {
        let width = display_width(&node_text(leaf)).min(u16::MAX as usize) as u16;
        if width == 0 || cursor >= limit {
            continue;
        }
        let width = width.min(limit - cursor);
        layout.insert(leaf.id.clone(), Rect::new(cursor, y, width, 1));
        cursor = cursor.saturating_add(width).saturating_add(gap);
    }

    span_containers(root, &mut layout);
    layout
}

fn span_containers(element: &Element, layout: &mut LayoutResult) -> Option<Rect> {
    let children = element.child_elements();
    if children.is_empty() {
        return layout.get(&element.id).copied();
    }

    let mut span: Option<Rect> = None;
    for child in children {
        if let Some(rect) = span_containers(child, layout) {
            span = Some(match span {
                Some(acc) => {
                    let left = acc.x.min(rect.x);
                    let right = acc.right().max(rect.right());
                    Rect::new(left, acc.y, right - left, acc.height.max(rect.height))
                }
                None => rect,
            });
        }
    }

    if let Some(rect) = span {
        layout.insert(element.id.clone(), rect);
    }
    span
}
