use super::*;

#[test]
fn ctrl_space_normalizes_from_null() {
    let event = ct::KeyEvent::new(ct::KeyCode::Null, ct::KeyModifiers::NONE);
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn key_modifiers_are_mapped() {
    let event = ct::KeyEvent::new(
        ct::KeyCode::Char('c'),
        ct::KeyModifiers::CONTROL | ct::KeyModifiers::ALT,
    );
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char('c'));
    assert_eq!(converted.modifiers, KeyModifiers::CONTROL | KeyModifiers::ALT);
    assert_eq!(converted.kind, KeyEventKind::Press);
}

#[test]
fn unsupported_keys_are_unknown() {
    let event = ct::KeyEvent::new(ct::KeyCode::CapsLock, ct::KeyModifiers::NONE);
    assert_eq!(into_key_event(event).code, KeyCode::Unknown);
}

#[test]
fn mouse_clicks_keep_their_position() {
    let event = ct::MouseEvent {
        kind: ct::MouseEventKind::Down(ct::MouseButton::Left),
        column: 7,
        row: 3,
        modifiers: ct::KeyModifiers::NONE,
    };
    let converted = into_mouse_event(event);
    assert_eq!(converted.kind, MouseEventKind::Down(MouseButton::Left));
    assert_eq!((converted.column, converted.row), (7, 3));
}

#[test]
fn resize_passes_through() {
    assert_eq!(
        into_input_event(ct::Event::Resize(80, 24)),
        InputEvent::Resize(80, 24)
    );
}
