use datatable_pagination::{
    find_by_label, find_element, ids, render_line, Direction, Element, Pagination,
    PaginationOptions, Role,
};

fn child_ids(root: &Element) -> Vec<&str> {
    root.child_elements().iter().map(|el| el.id.as_str()).collect()
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_default_layout_order() {
    let root = Pagination::new(1, 10, 40).element();

    assert_eq!(root.id, ids::ROOT);
    assert_eq!(root.role, Role::Group);
    assert_eq!(
        child_ids(&root),
        vec![
            ids::ROWS_PER_PAGE_LABEL,
            ids::ROWS_PER_PAGE,
            ids::RANGE,
            ids::FIRST_PAGE,
            ids::PREVIOUS_PAGE,
            ids::NEXT_PAGE,
            ids::LAST_PAGE,
        ]
    );
}

#[test]
fn test_compact_layout_moves_selector_after_buttons() {
    let root = Pagination::new(1, 10, 40).compact(true).element();

    assert_eq!(
        child_ids(&root),
        vec![
            ids::FIRST_PAGE,
            ids::PREVIOUS_PAGE,
            ids::NEXT_PAGE,
            ids::LAST_PAGE,
            ids::ROWS_PER_PAGE,
        ]
    );
}

#[test]
fn test_no_rows_per_page_hides_selector() {
    let options = PaginationOptions::new().no_rows_per_page();
    let root = Pagination::new(1, 10, 40).options(options).element();

    assert!(find_element(&root, ids::ROWS_PER_PAGE).is_none());
    assert!(find_element(&root, ids::ROWS_PER_PAGE_LABEL).is_none());
    assert!(find_element(&root, ids::RANGE).is_some());
}

#[test]
fn test_no_rows_per_page_respected_when_compact() {
    let options = PaginationOptions::new().no_rows_per_page();
    let root = Pagination::new(1, 10, 40)
        .options(options)
        .compact(true)
        .element();

    assert!(find_element(&root, ids::ROWS_PER_PAGE).is_none());
    assert_eq!(root.child_elements().len(), 4);
}

// ============================================================================
// Disabled state
// ============================================================================

#[test]
fn test_bound_buttons_disabled_on_first_page() {
    let root = Pagination::new(1, 10, 40).element();

    for (id, disabled) in [
        (ids::FIRST_PAGE, true),
        (ids::PREVIOUS_PAGE, true),
        (ids::NEXT_PAGE, false),
        (ids::LAST_PAGE, false),
    ] {
        let button = find_element(&root, id).unwrap();
        assert_eq!(button.disabled, disabled, "{id}");
        assert_eq!(button.clickable, !disabled, "{id}");
    }
}

#[test]
fn test_all_buttons_disabled_for_single_page() {
    let root = Pagination::new(1, 10, 5).element();

    for id in [
        ids::FIRST_PAGE,
        ids::PREVIOUS_PAGE,
        ids::NEXT_PAGE,
        ids::LAST_PAGE,
    ] {
        assert!(find_element(&root, id).unwrap().disabled, "{id}");
    }
}

// ============================================================================
// Accessibility labels
// ============================================================================

#[test]
fn test_default_labels() {
    let root = Pagination::new(1, 10, 40).element();

    for (id, label) in [
        (ids::FIRST_PAGE, "First Page"),
        (ids::PREVIOUS_PAGE, "Previous Page"),
        (ids::NEXT_PAGE, "Next Page"),
        (ids::LAST_PAGE, "Last Page"),
        (ids::ROWS_PER_PAGE, "Rows per page:"),
    ] {
        assert_eq!(
            find_element(&root, id).unwrap().accessible_name(),
            Some(label)
        );
    }
}

#[test]
fn test_custom_labels_are_used_verbatim() {
    let options = PaginationOptions::new()
        .first_page_label("Primeira página")
        .last_page_label("Última página")
        .next_page_label("Próxima página")
        .previous_page_label("Página anterior");
    let root = Pagination::new(1, 10, 40).options(options).element();

    for (id, label) in [
        (ids::FIRST_PAGE, "Primeira página"),
        (ids::LAST_PAGE, "Última página"),
        (ids::NEXT_PAGE, "Próxima página"),
        (ids::PREVIOUS_PAGE, "Página anterior"),
    ] {
        let button = find_by_label(&root, Role::Button, label).unwrap();
        assert_eq!(button.id, id);
        assert_eq!(button.aria_label.as_deref(), Some(label));
    }
}

// ============================================================================
// Range and selector
// ============================================================================

#[test]
fn test_range_text() {
    let root = Pagination::new(2, 10, 40).element();
    let range = find_element(&root, ids::RANGE).unwrap();

    assert_eq!(range.text_content(), Some("11-20 of 40"));
}

#[test]
fn test_range_text_clamped_on_last_page() {
    let options = PaginationOptions::new().range_separator_text("de");
    let root = Pagination::new(3, 10, 25).options(options).element();
    let range = find_element(&root, ids::RANGE).unwrap();

    assert_eq!(range.text_content(), Some("21-25 de 25"));
}

#[test]
fn test_range_text_clamped_when_page_past_end() {
    let pagination = Pagination::new(7, 10, 40);
    let root = pagination.element();

    assert_eq!(pagination.page_range().display("of"), "31-40 of 40");
    assert_eq!(
        find_element(&root, ids::RANGE).unwrap().text_content(),
        Some("31-40 of 40")
    );
}

#[test]
fn test_selector_options_and_value() {
    let root = Pagination::new(1, 15, 40).element();
    let select = find_element(&root, ids::ROWS_PER_PAGE).unwrap();

    let values: Vec<&str> = select.options().iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["10", "15", "20", "25", "30"]);
    assert_eq!(select.value(), Some("15"));
    assert_eq!(select.selected_option().unwrap().label, "15");
}

#[test]
fn test_select_all_item_uses_row_count() {
    let options = PaginationOptions::new().select_all_rows_item("Todos");
    let root = Pagination::new(1, 10, 42)
        .rows_per_page_options([10, 50])
        .options(options)
        .element();
    let select = find_element(&root, ids::ROWS_PER_PAGE).unwrap();

    let last = select.options().last().unwrap();
    assert_eq!(last.value, "42");
    assert_eq!(last.label, "Todos");
    assert_eq!(select.options().len(), 3);
}

// ============================================================================
// Text rendering
// ============================================================================

#[test]
fn test_render_line() {
    let root = Pagination::new(1, 10, 40).element();

    assert_eq!(
        render_line(&root, 80),
        "Rows per page: <10 ▾> 1-10 of 40  «   ‹  [›] [»]"
    );
}

#[test]
fn test_render_line_rtl_mirrors_glyphs() {
    let root = Pagination::new(4, 10, 40)
        .direction(Direction::Rtl)
        .compact(true)
        .element();

    assert_eq!(render_line(&root, 80), "[»] [›]  ‹   «  <10 ▾>");
    assert_eq!(root.get_data("direction").map(String::as_str), Some("rtl"));
}

#[test]
fn test_render_line_truncates() {
    let root = Pagination::new(1, 10, 40).element();

    let line = render_line(&root, 10);

    assert_eq!(line, "Rows per …");
}
