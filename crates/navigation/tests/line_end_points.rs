use dom::DomRange;
use navigation::keyboard::handle_key;
use navigation::{EditorHost, HeadlessEditor, NavigationKey, media, non_editable};

#[test]
fn end_moves_past_a_trailing_island() {
    let mut editor =
        HeadlessEditor::new(r#"<p>ab<span contenteditable="false">Z</span></p>"#).unwrap();
    let p = editor.node_at(&[0]).unwrap();
    let ab = editor.find_text("ab").unwrap();
    editor.set_caret(ab, 0);

    assert!(handle_key(&mut editor, NavigationKey::End));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 2));

    // The line starts with text, so Home is the host's business.
    assert!(!handle_key(&mut editor, NavigationKey::Home));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 2));
}

#[test]
fn home_moves_before_a_leading_island() {
    let mut editor =
        HeadlessEditor::new(r#"<p><span contenteditable="false">Z</span>ab</p>"#).unwrap();
    let p = editor.node_at(&[0]).unwrap();
    let ab = editor.find_text("ab").unwrap();
    editor.set_caret(ab, 2);

    assert!(non_editable::move_to_line_end_point(&mut editor, false));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 0));
}

#[test]
fn end_moves_past_trailing_media() {
    let mut editor = HeadlessEditor::new("<p>ab<audio></audio></p>").unwrap();
    let p = editor.node_at(&[0]).unwrap();
    let ab = editor.find_text("ab").unwrap();
    editor.set_caret(ab, 0);

    assert!(!non_editable::move_to_line_end_point(&mut editor, true));
    assert!(media::move_to_line_end_point(&mut editor, true));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 2));
}

#[test]
fn line_edges_stop_at_line_breaks() {
    let mut editor = HeadlessEditor::new(
        r#"<p>ab<span contenteditable="false">Z</span><br>cd</p>"#,
    )
    .unwrap();
    let p = editor.node_at(&[0]).unwrap();
    let ab = editor.find_text("ab").unwrap();
    let cd = editor.find_text("cd").unwrap();

    // The line ends before the break, right after the island.
    editor.set_caret(ab, 1);
    assert!(handle_key(&mut editor, NavigationKey::End));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 2));

    editor.set_caret(cd, 1);
    assert!(!handle_key(&mut editor, NavigationKey::Home));
    assert!(!handle_key(&mut editor, NavigationKey::End));
    assert_eq!(editor.selection(), DomRange::collapsed_at(cd, 1));
}
