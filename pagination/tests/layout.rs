use datatable_pagination::{hit_test, ids, layout_row, render::GAP, Element, Pagination, Rect};

// ============================================================================
// Row layout
// ============================================================================

#[test]
fn test_layout_places_leaves_with_gap() {
    let root = Element::row()
        .id("root")
        .child(Element::text("ab").id("a"))
        .child(Element::button("x").id("b"));

    let layout = layout_row(&root, 0, 0, 1, 80);

    assert_eq!(layout.get("a"), Some(&Rect::new(0, 0, 2, 1)));
    // "[x]" starts after "ab" and one gap column
    assert_eq!(layout.get("b"), Some(&Rect::new(3, 0, 3, 1)));
    assert_eq!(layout.get("root"), Some(&Rect::new(0, 0, 6, 1)));
}

#[test]
fn test_layout_stops_at_max_width() {
    let root = Element::row()
        .id("root")
        .child(Element::text("abcdef").id("a"))
        .child(Element::text("gh").id("b"));

    let layout = layout_row(&root, 0, 0, 1, 4);

    assert_eq!(layout.get("a"), Some(&Rect::new(0, 0, 4, 1)));
    assert_eq!(layout.get("b"), None);
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_test_finds_enabled_button() {
    let root = Pagination::new(1, 10, 40).compact(true).element();
    let layout = layout_row(&root, 0, 5, GAP, 80);

    let next = *layout.get(ids::NEXT_PAGE).unwrap();

    assert_eq!(
        hit_test(&layout, &root, next.x + 1, 5),
        Some(ids::NEXT_PAGE.to_string())
    );
    // Wrong row
    assert_eq!(hit_test(&layout, &root, next.x + 1, 4), None);
}

#[test]
fn test_hit_test_skips_disabled_button() {
    let root = Pagination::new(1, 10, 40).compact(true).element();
    let layout = layout_row(&root, 0, 0, GAP, 80);

    let first = *layout.get(ids::FIRST_PAGE).unwrap();

    assert_eq!(hit_test(&layout, &root, first.x + 1, 0), None);
}

#[test]
fn test_hit_test_finds_selector() {
    let root = Pagination::new(1, 10, 40).element();
    let layout = layout_row(&root, 0, 0, GAP, 80);

    let select = *layout.get(ids::ROWS_PER_PAGE).unwrap();

    assert_eq!(
        hit_test(&layout, &root, select.x, 0),
        Some(ids::ROWS_PER_PAGE.to_string())
    );
}
