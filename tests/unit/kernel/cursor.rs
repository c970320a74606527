use super::*;

#[test]
fn starts_without_selection() {
    let cursor = Cursor::default();
    assert_eq!(cursor.index(), None);
    assert_eq!(cursor.raw(), -1);
}

#[test]
fn next_from_none_selects_first() {
    let mut cursor = Cursor::NONE;
    assert!(cursor.next(3));
    assert_eq!(cursor.index(), Some(0));
}

#[test]
fn next_wraps_back_to_start_after_len_steps() {
    for len in 1..=7 {
        for start in 0..len {
            let mut cursor = Cursor::at(start);
            for _ in 0..len {
                cursor.next(len);
            }
            assert_eq!(cursor, Cursor::at(start), "len={len} start={start}");
        }
    }
}

#[test]
fn next_wraps_from_last_to_zero() {
    let mut cursor = Cursor::at(2);
    cursor.next(3);
    assert_eq!(cursor.index(), Some(0));
}

#[test]
fn previous_from_zero_selects_last() {
    let mut cursor = Cursor::at(0);
    cursor.previous(4);
    assert_eq!(cursor.index(), Some(3));
}

#[test]
fn previous_from_none_selects_last() {
    let mut cursor = Cursor::NONE;
    assert!(cursor.previous(4));
    assert_eq!(cursor.index(), Some(3));
}

#[test]
fn previous_steps_back() {
    let mut cursor = Cursor::at(2);
    cursor.previous(4);
    assert_eq!(cursor.index(), Some(1));
}

#[test]
fn movement_on_empty_list_is_noop() {
    let mut cursor = Cursor::NONE;
    assert!(!cursor.next(0));
    assert!(!cursor.previous(0));
    assert_eq!(cursor, Cursor::NONE);
}

#[test]
fn single_item_list_reports_no_change_once_selected() {
    let mut cursor = Cursor::NONE;
    assert!(cursor.next(1));
    assert!(!cursor.next(1));
    assert!(!cursor.previous(1));
    assert_eq!(cursor.index(), Some(0));
}
