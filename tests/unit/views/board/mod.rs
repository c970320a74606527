use super::*;
use crate::kernel::services::ports::LoadError;
use crate::kernel::{LoadStatus, Prompt};
use crate::ui::backend::test::TestBackend;
use crate::ui::backend::Backend;

fn prompts(items: &[(&str, &str)]) -> PromptList {
    items
        .iter()
        .map(|(title, text)| Prompt::new(*title, *text))
        .collect()
}

fn ready_state(items: &[(&str, &str)]) -> BoardState {
    let mut state = BoardState::default();
    state.loading_visible = false;
    state.set_prompts(prompts(items));
    state
}

fn draw(view: &mut BoardView, state: &BoardState, w: u16, h: u16) -> TestBackend {
    let mut painter = Painter::new();
    let mut backend = TestBackend::new(w, h);
    let area = backend.area();
    view.paint(&mut painter, area, state);
    backend.draw(area, painter.cmds());
    backend
}

#[test]
fn empty_list_renders_placeholder_only() {
    assert_eq!(render(&PromptList::default()), RenderedBoard::Placeholder);

    let state = ready_state(&[]);
    let mut view = BoardView::default();
    let backend = draw(&mut view, &state, 60, 10);
    let text = backend.buffer().text();
    assert!(text.contains(EMPTY_MESSAGE));
    assert!(!text.contains(COPY_ICON));
}

#[test]
fn cards_are_tagged_in_order() {
    let board = render(&prompts(&[("A", "alpha"), ("B", "beta\nsecond")]));
    let cards = board.cards();
    assert_eq!(cards.len(), 2);
    assert_eq!((cards[0].index, cards[0].title.as_str()), (0, "A"));
    assert_eq!(cards[1].index, 1);
    assert_eq!(cards[1].lines, vec!["beta", "second"]);
}

#[test]
fn prompt_text_is_shown_literally() {
    let state = ready_state(&[("<b>t</b>", "<script>alert('x')</script>\u{1b}[31mred")]);
    let mut view = BoardView::default();
    let backend = draw(&mut view, &state, 70, 10);
    let text = backend.buffer().text();

    assert!(text.contains("<b>t</b>"));
    assert!(text.contains("<script>alert('x')</script>^[[31mred"));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn loading_indicator_until_finished() {
    let state = BoardState::default();
    let mut view = BoardView::default();
    let text = draw(&mut view, &state, 60, 10).buffer().text();
    assert!(text.contains(LOADING_MESSAGE));
    assert!(!text.contains(EMPTY_MESSAGE));
}

#[test]
fn finished_signal_before_result_shows_neither_placeholder_nor_cards() {
    let mut store = crate::kernel::Store::new(BoardState::default());
    store.dispatch(crate::kernel::Action::LoadingFinished);
    assert!(!store.state().loading_visible);

    let mut view = BoardView::default();
    let text = draw(&mut view, store.state(), 60, 10).buffer().text();
    assert!(!text.contains(EMPTY_MESSAGE));
    assert!(!text.contains(LOADING_MESSAGE));
    assert!(!text.contains(ERROR_MESSAGE));
    assert!(!text.contains(COPY_ICON));
}

#[test]
fn load_failure_shows_error_panel_without_cards() {
    let mut state = BoardState::default();
    state.loading_visible = false;
    state.status = LoadStatus::Failed(LoadError::HttpStatus(404));
    let mut view = BoardView::default();
    let text = draw(&mut view, &state, 60, 10).buffer().text();

    assert!(text.contains(ERROR_MESSAGE));
    assert!(text.contains("HTTP error! status: 404"));
    assert!(!text.contains(LOADING_MESSAGE));
    assert!(!text.contains(COPY_ICON));
    assert!(!text.contains(EMPTY_MESSAGE));
}

#[test]
fn hit_test_maps_rows_to_cards() {
    let state = ready_state(&[("A", "alpha"), ("B", "beta")]);
    let mut view = BoardView::default();
    let backend = draw(&mut view, &state, 40, 20);

    let alpha = backend.buffer().find("alpha").unwrap();
    let beta = backend.buffer().find("beta").unwrap();
    assert_eq!(view.hit_test(alpha), Some(0));
    assert_eq!(view.hit_test(beta), Some(1));
    // Gap between the cards.
    assert_eq!(view.hit_test(Pos::new(alpha.x, alpha.y + 2)), None);
    // Header.
    assert_eq!(view.hit_test(Pos::new(alpha.x, 0)), None);
}

#[test]
fn scroll_request_reveals_card() {
    let items: Vec<(String, String)> = (0..10)
        .map(|i| (format!("title {i}"), format!("text {i}")))
        .collect();
    let refs: Vec<(&str, &str)> = items
        .iter()
        .map(|(a, b)| (a.as_str(), b.as_str()))
        .collect();
    let mut state = ready_state(&refs);
    let mut view = BoardView::default();
    draw(&mut view, &state, 40, 12);
    assert_eq!(view.scroll_offset(), 0);

    state.scroll_request = Some(ScrollRequest {
        index: 6,
        smooth: false,
        generation: 1,
    });
    let backend = draw(&mut view, &state, 40, 12);
    assert_eq!(view.scroll_offset(), 30);
    assert!(backend.buffer().text().contains("title 6"));
    let pos = backend.buffer().find("text 6").unwrap();
    assert_eq!(view.hit_test(pos), Some(6));
}

#[test]
fn smooth_scroll_animates_over_ticks() {
    let items: Vec<(String, String)> = (0..10)
        .map(|i| (format!("title {i}"), format!("text {i}")))
        .collect();
    let refs: Vec<(&str, &str)> = items
        .iter()
        .map(|(a, b)| (a.as_str(), b.as_str()))
        .collect();
    let mut state = ready_state(&refs);
    let mut view = BoardView::default();
    state.scroll_request = Some(ScrollRequest {
        index: 4,
        smooth: true,
        generation: 7,
    });
    draw(&mut view, &state, 40, 12);
    assert!(view.is_animating());

    while view.tick() {}
    assert_eq!(view.scroll_offset(), 20);

    // The same request is not applied twice.
    view.scroll_by(-20);
    draw(&mut view, &state, 40, 12);
    assert_eq!(view.scroll_offset(), 0);
}

#[test]
fn highlighted_and_copying_cards_change_border() {
    let mut state = ready_state(&[("A", "alpha"), ("B", "beta")]);
    state.feedback[0].copying = true;
    state.feedback[1].highlight = Some(3);
    let mut view = BoardView::default();
    let backend = draw(&mut view, &state, 40, 20);
    let buf = backend.buffer();

    let alpha = buf.find("alpha").unwrap();
    let beta = buf.find("beta").unwrap();
    assert_eq!(buf.cell(1, alpha.y).unwrap().symbol, "┃");
    assert_eq!(buf.cell(1, beta.y).unwrap().symbol, "┃");
    let theme = BoardTheme::default();
    assert_eq!(buf.cell(alpha.x, alpha.y).unwrap().style.bg, theme.card_copying.bg);
    assert_eq!(buf.cell(beta.x, beta.y).unwrap().style.bg, None);
}

#[test]
fn replace_discards_previous_cards() {
    let mut state = ready_state(&[("A", "alpha"), ("B", "beta")]);
    let mut view = BoardView::default();
    draw(&mut view, &state, 40, 20);
    assert_eq!(view.board().cards().len(), 2);

    state.set_prompts(prompts(&[("C", "gamma")]));
    let text = draw(&mut view, &state, 40, 20).buffer().text();
    assert_eq!(view.board().cards().len(), 1);
    assert!(text.contains("gamma"));
    assert!(!text.contains("alpha"));
}

#[test]
fn notification_toast_is_painted() {
    let mut state = ready_state(&[("A", "alpha")]);
    let mut view = BoardView::default();
    assert!(!draw(&mut view, &state, 60, 10)
        .buffer()
        .text()
        .contains(NOTIFICATION_MESSAGE));

    state.notification.visible = true;
    let backend = draw(&mut view, &state, 60, 10);
    assert_eq!(backend.buffer().find(NOTIFICATION_MESSAGE).map(|p| p.y), Some(9));
}
