use core_types::HDirection;
use dom::DomRange;
use navigation::keyboard::handle_key;
use navigation::{EditorHost, HeadlessEditor, NavigationEvent, NavigationKey, ScrollTarget};

#[test]
fn right_from_text_before_media_shows_caret_after_it() {
    let mut editor = HeadlessEditor::new("<p>ab<video></video></p>").unwrap();
    let p = editor.node_at(&[0]).unwrap();
    let ab = editor.node_at(&[0, 0]).unwrap();
    let video = editor.node_at(&[0, 1]).unwrap();
    editor.set_caret(ab, 2);

    assert!(handle_key(&mut editor, NavigationKey::Right));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 2));
    let caret = editor.fake_caret().expect("caret marker after the video");
    assert_eq!((caret.node, caret.before), (video, false));
    assert_eq!(
        editor.events(),
        &[NavigationEvent::ShowCaret {
            target: video,
            direction: HDirection::Forwards,
            before: false,
        }]
    );
    assert_eq!(
        editor.scrolls(),
        &[ScrollTarget::Range(DomRange::collapsed_at(p, 2))]
    );

    // Nothing follows the video: the key goes back to the host.
    assert!(!handle_key(&mut editor, NavigationKey::Right));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 2));
}

#[test]
fn approaching_media_selects_it_then_steps_past() {
    let mut editor = HeadlessEditor::new("<p>ab<video></video></p>").unwrap();
    let p = editor.node_at(&[0]).unwrap();
    let video = editor.node_at(&[0, 1]).unwrap();
    editor.set_caret(p, 1);

    assert!(handle_key(&mut editor, NavigationKey::Right));
    assert_eq!(editor.selection(), DomRange::new(p, 1, p, 2));
    assert_eq!(
        editor.events(),
        &[NavigationEvent::BeforeObjectSelected { target: video }]
    );

    assert!(handle_key(&mut editor, NavigationKey::Right));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 2));
    assert_eq!(editor.fake_caret().map(|c| c.before), Some(false));

    // And back: select from the far side, then land in front of it.
    assert!(handle_key(&mut editor, NavigationKey::Left));
    assert_eq!(editor.selection(), DomRange::new(p, 1, p, 2));
    assert!(handle_key(&mut editor, NavigationKey::Left));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 1));
    assert_eq!(editor.fake_caret().map(|c| (c.node, c.before)), Some((video, true)));
}

#[test]
fn vetoed_selection_leaves_the_key_to_the_host() {
    let mut editor = HeadlessEditor::new("<p>ab<video></video></p>").unwrap();
    let p = editor.node_at(&[0]).unwrap();
    editor.veto("BeforeObjectSelected");
    editor.set_caret(p, 1);

    assert!(!handle_key(&mut editor, NavigationKey::Right));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p, 1));
}

#[test]
fn down_onto_media_picks_the_nearer_side() {
    let mut editor = HeadlessEditor::new("<p>abcdefghij</p><p><video></video></p>").unwrap();
    let text = editor.node_at(&[0, 0]).unwrap();
    let p2 = editor.node_at(&[1]).unwrap();
    let video = editor.node_at(&[1, 0]).unwrap();

    editor.set_caret(text, 1);
    assert!(handle_key(&mut editor, NavigationKey::Down));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p2, 0));
    assert_eq!(editor.fake_caret().map(|c| (c.node, c.before)), Some((video, true)));

    editor.set_caret(text, 9);
    assert!(handle_key(&mut editor, NavigationKey::Down));
    assert_eq!(editor.selection(), DomRange::collapsed_at(p2, 1));
    assert_eq!(editor.fake_caret().map(|c| (c.node, c.before)), Some((video, false)));
}
