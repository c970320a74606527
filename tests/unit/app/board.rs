use super::*;
use crate::core::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::kernel::services::ports::{
    BoxFuture, ClipboardWriter, CopyAttempt, CopyError, FetchError, FetchResponse, LegacyCopy,
    ResourceFetcher,
};
use crate::ui::backend::test::TestBackend;
use std::sync::Arc;
use std::time::Instant;

struct ManyPrompts;

impl ResourceFetcher for ManyPrompts {
    fn fetch<'a>(
        &'a self,
        _location: &'a ResourceLocation,
    ) -> BoxFuture<'a, Result<FetchResponse, FetchError>> {
        let prompts: Vec<_> = (0..12)
            .map(|i| format!(r#"{{"title":"P{i}","text":"line one\nline two"}}"#))
            .collect();
        let body = format!(r#"{{"prompts":[{}]}}"#, prompts.join(","));
        Box::pin(async move { Ok(FetchResponse::ok(body)) })
    }
}

struct NoClipboard;

impl ClipboardWriter for NoClipboard {
    fn write_text<'a>(&'a self, _text: &'a str) -> BoxFuture<'a, CopyAttempt> {
        Box::pin(async { CopyAttempt::Failed(CopyError::Unavailable) })
    }
}

impl LegacyCopy for NoClipboard {
    fn copy(&self, _text: &str) -> CopyAttempt {
        CopyAttempt::Failed(CopyError::Unavailable)
    }
}

fn loaded_board() -> (PromptBoard, TestBackend) {
    let services = RuntimeServices {
        fetcher: Arc::new(ManyPrompts),
        clipboard: Arc::new(NoClipboard),
        legacy: Arc::new(NoClipboard),
        offline: None,
    };
    let mut board = PromptBoard::new(
        ResourceLocation::parse("prompts.json"),
        &Settings::default(),
        services,
    )
    .unwrap();
    board.start();
    let start = Instant::now();
    while board.state().prompts.is_empty() {
        assert!(start.elapsed() < Duration::from_secs(5), "load timed out");
        board.wait_message(Duration::from_millis(20));
    }
    let mut backend = TestBackend::new(40, 12);
    let area = backend.area();
    board.render(&mut backend, area);
    (board, backend)
}

fn key(code: KeyCode, kind: KeyEventKind) -> InputEvent {
    InputEvent::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
    })
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> InputEvent {
    InputEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn key_release_is_ignored() {
    let (mut board, _) = loaded_board();
    let result = board.handle_input(&key(KeyCode::Down, KeyEventKind::Release));
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(board.state().cursor.index(), None);

    let result = board.handle_input(&key(KeyCode::Down, KeyEventKind::Press));
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(board.state().cursor.index(), Some(0));
}

#[test]
fn render_clears_dirty_and_input_sets_it() {
    let (mut board, mut backend) = loaded_board();
    assert!(!board.needs_redraw());

    board.handle_input(&InputEvent::Resize(40, 12));
    assert!(board.needs_redraw());

    let area = backend.area();
    board.render(&mut backend, area);
    assert!(!board.needs_redraw());
}

#[test]
fn wheel_scrolls_the_list() {
    let (mut board, mut backend) = loaded_board();
    assert_eq!(board.view().scroll_offset(), 0);

    let result = board.handle_input(&mouse(MouseEventKind::ScrollDown, 5, 5));
    assert_eq!(result, EventResult::Consumed);
    let area = backend.area();
    board.render(&mut backend, area);
    assert_eq!(board.view().scroll_offset(), 3);

    board.handle_input(&mouse(MouseEventKind::ScrollUp, 5, 5));
    board.render(&mut backend, area);
    assert_eq!(board.view().scroll_offset(), 0);
}

#[test]
fn click_outside_cards_is_ignored() {
    let (mut board, _) = loaded_board();
    let result = board.handle_input(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 0));
    assert_eq!(result, EventResult::Ignored);
}

#[test]
fn failed_copy_leaves_state_alone() {
    let (mut board, backend) = loaded_board();
    let pos = backend.buffer().find("P0").unwrap();
    let result = board.handle_input(&mouse(
        MouseEventKind::Down(MouseButton::Left),
        pos.x,
        pos.y,
    ));
    assert_eq!(result, EventResult::Consumed);

    // Both paths fail: nothing but a log line.
    assert!(board.wait_message(Duration::from_secs(5)));
    assert!(!board.state().notification.visible);
    assert!(board.state().feedback.iter().all(|card| !card.copying));
    assert_eq!(board.state().cursor.index(), None);
}
