use dom::DomRange;
use navigation::keyboard::handle_key;
use navigation::{EditorHost, HeadlessEditor, NavigationEvent, NavigationKey, non_editable};

const INLINE_ISLAND: &str = r#"<p>ab<span contenteditable="false">Z</span>cd</p>"#;

#[test]
fn island_is_selected_on_approach_and_caret_shown_past_it() {
    let mut editor = HeadlessEditor::new(INLINE_ISLAND).unwrap();
    let p = editor.node_at(&[0]).unwrap();
    let island = editor.node_at(&[0, 1]).unwrap();
    editor.set_caret(p, 1);

    assert!(non_editable::move_h(&mut editor, true));
    assert_eq!(editor.selection(), DomRange::new(p, 1, p, 2));

    assert!(non_editable::move_h(&mut editor, true));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 2));
    let caret = editor.fake_caret().unwrap();
    assert_eq!((caret.node, caret.before), (island, false));

    assert!(non_editable::move_h(&mut editor, false));
    assert_eq!(editor.selection(), DomRange::new(p, 1, p, 2));
    assert!(non_editable::move_h(&mut editor, false));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 1));
    assert_eq!(editor.fake_caret().map(|c| c.before), Some(true));

    let names: Vec<_> = editor.events().iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        vec!["BeforeObjectSelected", "ShowCaret", "BeforeObjectSelected", "ShowCaret"]
    );
}

#[test]
fn text_edge_beside_island_lands_on_its_far_side() {
    let mut editor = HeadlessEditor::new(INLINE_ISLAND).unwrap();
    let p = editor.node_at(&[0]).unwrap();
    let island = editor.node_at(&[0, 1]).unwrap();
    let ab = editor.find_text("ab").unwrap();
    let cd = editor.find_text("cd").unwrap();
    editor.set_caret(ab, 2);

    assert!(handle_key(&mut editor, NavigationKey::Right));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 2));
    assert_eq!(editor.fake_caret().map(|c| (c.node, c.before)), Some((island, false)));

    // Same from the other side: the island is passed, not selected.
    editor.set_caret(cd, 0);
    assert!(handle_key(&mut editor, NavigationKey::Left));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 1));
    assert_eq!(editor.fake_caret().map(|c| (c.node, c.before)), Some((island, true)));
    assert!(
        !editor
            .events()
            .iter()
            .any(|e| matches!(e, NavigationEvent::BeforeObjectSelected { .. }))
    );
}

#[test]
fn plain_text_moves_are_left_to_the_host() {
    let mut editor =
        HeadlessEditor::new(r#"<p>ab<span contenteditable="false">Z</span>cdef</p>"#).unwrap();
    let cdef = editor.find_text("cdef").unwrap();
    editor.set_caret(cdef, 2);

    assert!(!handle_key(&mut editor, NavigationKey::Right));
    assert!(!handle_key(&mut editor, NavigationKey::Left));
    assert_eq!(editor.selection(), DomRange::collapsed_at(cdef, 2));
    assert!(editor.events().is_empty());
}

#[test]
fn one_character_from_an_island_shows_the_caret_beside_it() {
    let mut editor = HeadlessEditor::new(INLINE_ISLAND).unwrap();
    let p = editor.node_at(&[0]).unwrap();
    let island = editor.node_at(&[0, 1]).unwrap();
    let ab = editor.find_text("ab").unwrap();
    let cd = editor.find_text("cd").unwrap();

    editor.set_caret(ab, 1);
    assert!(handle_key(&mut editor, NavigationKey::Right));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 1));
    assert_eq!(editor.fake_caret().map(|c| (c.node, c.before)), Some((island, true)));

    editor.set_caret(cd, 1);
    assert!(handle_key(&mut editor, NavigationKey::Left));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 2));
    assert_eq!(editor.fake_caret().map(|c| (c.node, c.before)), Some((island, false)));
}

#[test]
fn island_after_a_line_break_is_not_reached_from_the_line_above() {
    let mut editor =
        HeadlessEditor::new(r#"<p>abc<br><span contenteditable="false">Z</span></p>"#).unwrap();
    let p = editor.node_at(&[0]).unwrap();
    let island = editor.node_at(&[0, 2]).unwrap();
    let abc = editor.find_text("abc").unwrap();
    editor.set_caret(abc, 2);

    assert!(!handle_key(&mut editor, NavigationKey::Right));
    assert_eq!(editor.selection(), DomRange::collapsed_at(abc, 2));
    assert!(editor.events().is_empty());

    // From the end of the line the next stop is already beside the island.
    editor.set_caret(abc, 3);
    assert!(handle_key(&mut editor, NavigationKey::Right));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 2));
    assert_eq!(editor.fake_caret().map(|c| (c.node, c.before)), Some((island, true)));
}

#[test]
fn vetoed_events_leave_selection_untouched() {
    let mut editor = HeadlessEditor::new(INLINE_ISLAND).unwrap();
    let p = editor.node_at(&[0]).unwrap();
    let island = editor.node_at(&[0, 1]).unwrap();

    editor.veto("BeforeObjectSelected");
    editor.set_caret(p, 1);
    assert!(!handle_key(&mut editor, NavigationKey::Right));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 1));
    assert_eq!(
        editor.events(),
        &[NavigationEvent::BeforeObjectSelected { target: island }]
    );

    let mut editor = HeadlessEditor::new(INLINE_ISLAND).unwrap();
    editor.veto("ShowCaret");
    let selected = DomRange::new(p, 1, p, 2);
    editor.set_selection(selected);
    assert!(!handle_key(&mut editor, NavigationKey::Right));
    assert_eq!(editor.selection(), selected);
    assert_eq!(editor.fake_caret(), None);
}

#[test]
fn backward_at_document_start_is_idempotent() {
    let mut editor = HeadlessEditor::new("<p>ab</p><p>cd</p>").unwrap();
    let ab = editor.find_text("ab").unwrap();
    editor.set_caret(ab, 0);

    for _ in 0..3 {
        assert!(!handle_key(&mut editor, NavigationKey::Left));
        assert!(!handle_key(&mut editor, NavigationKey::Up));
        assert_eq!(editor.selection(), DomRange::collapsed_at(ab, 0));
    }
}

const ISLAND_BELOW: &str =
    r#"<p>abcde</p><p><span contenteditable="false">XYZW</span></p>"#;

#[test]
fn down_onto_island_shows_caret_on_the_nearer_side() {
    let mut editor = HeadlessEditor::new(ISLAND_BELOW).unwrap();
    let text = editor.find_text("abcde").unwrap();
    let p2 = editor.node_at(&[1]).unwrap();
    let island = editor.node_at(&[1, 0]).unwrap();

    editor.set_caret(text, 1);
    assert!(handle_key(&mut editor, NavigationKey::Down));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p2, 0));
    assert_eq!(editor.fake_caret().map(|c| (c.node, c.before)), Some((island, true)));

    editor.set_caret(text, 3);
    assert!(handle_key(&mut editor, NavigationKey::Down));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p2, 1));
    assert_eq!(editor.fake_caret().map(|c| (c.node, c.before)), Some((island, false)));
}

#[test]
fn up_from_beside_island_returns_to_the_line_above() {
    let mut editor = HeadlessEditor::new(ISLAND_BELOW).unwrap();
    let text = editor.find_text("abcde").unwrap();
    let p2 = editor.node_at(&[1]).unwrap();
    editor.set_caret(p2, 0);

    assert!(handle_key(&mut editor, NavigationKey::Up));
    assert_eq!(editor.selection(), DomRange::collapsed_at(text, 0));
    assert_eq!(editor.fake_caret(), None);
}

#[test]
fn down_on_last_line_jumps_to_trailing_island() {
    let mut editor =
        HeadlessEditor::new(r#"<p>ab<span contenteditable="false">Z</span></p>"#).unwrap();
    let p = editor.node_at(&[0]).unwrap();
    let island = editor.node_at(&[0, 1]).unwrap();
    let ab = editor.find_text("ab").unwrap();
    editor.set_caret(ab, 1);

    assert!(non_editable::move_v(&mut editor, true));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 2));
    assert_eq!(editor.fake_caret().map(|c| (c.node, c.before)), Some((island, false)));

    let mut editor = HeadlessEditor::new("<p>ab</p>").unwrap();
    let ab = editor.find_text("ab").unwrap();
    editor.set_caret(ab, 1);
    assert!(!handle_key(&mut editor, NavigationKey::Down));
    assert_eq!(editor.selection(), DomRange::collapsed_at(ab, 1));
}
