use super::*;

#[test]
fn smooth_reveal_converges_on_target() {
    let mut scroll = ScrollState::default();
    scroll.reveal(10, 100, 20, true);
    assert_eq!(scroll.offset(), 0);
    assert!(scroll.is_animating());

    let mut frames = 0;
    while scroll.tick() {
        frames += 1;
        assert!(frames < 20);
    }
    assert_eq!(scroll.offset(), 10);
    assert!(frames > 1);
}

#[test]
fn instant_reveal_jumps() {
    let mut scroll = ScrollState::default();
    scroll.reveal(10, 100, 20, false);
    assert_eq!(scroll.offset(), 10);
    assert!(!scroll.tick());
}

#[test]
fn reveal_stops_at_content_end() {
    let mut scroll = ScrollState::default();
    scroll.reveal(95, 100, 20, false);
    assert_eq!(scroll.offset(), 80);

    scroll.reveal(5, 10, 20, false);
    assert_eq!(scroll.offset(), 0);
}

#[test]
fn scroll_by_saturates_both_ways() {
    let mut scroll = ScrollState::default();
    scroll.scroll_by(-3, 100, 20);
    assert_eq!(scroll.offset(), 0);
    scroll.scroll_by(500, 100, 20);
    assert_eq!(scroll.offset(), 80);
    scroll.scroll_by(-5, 100, 20);
    assert_eq!(scroll.offset(), 75);
}

#[test]
fn clamp_after_shrink() {
    let mut scroll = ScrollState::default();
    scroll.reveal(50, 100, 10, false);
    scroll.clamp(30, 10);
    assert_eq!(scroll.offset(), 20);
    assert_eq!(scroll.target(), 20);
}
