use super::*;
use crate::kernel::services::ports::{CopyError, ResourceLocation};
use crate::kernel::{CardFeedback, Prompt, Timings};
use std::time::Duration;

fn list(n: usize) -> PromptList {
    (0..n)
        .map(|i| Prompt::new(format!("title {i}"), format!("text {i}")))
        .collect()
}

fn loaded_store(n: usize) -> Store {
    let mut store = Store::new(BoardState::new(Timings::default()));
    store.dispatch(Action::PromptsLoaded(Ok(list(n))));
    store
}

fn scheduled(effects: &[Effect]) -> Vec<Timer> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Schedule { timer, .. } => Some(*timer),
            _ => None,
        })
        .collect()
}

fn highlighted(store: &Store) -> Vec<usize> {
    store
        .state()
        .feedback
        .iter()
        .enumerate()
        .filter(|(_, card)| card.is_highlighted())
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn load_emits_fetch_once() {
    let mut store = Store::new(BoardState::default());
    let location = ResourceLocation::default();

    let first = store.dispatch(Action::Load(location.clone()));
    assert_eq!(first.effects, vec![Effect::LoadPrompts(location.clone())]);

    let second = store.dispatch(Action::Load(location));
    assert!(second.effects.is_empty());
    assert!(!second.state_changed);
}

#[test]
fn loading_finished_hides_indicator() {
    let mut store = Store::new(BoardState::default());
    assert!(store.state().loading_visible);

    let result = store.dispatch(Action::LoadingFinished);
    assert!(result.state_changed);
    assert!(!store.state().loading_visible);
}

#[test]
fn load_failure_is_recorded() {
    let mut store = Store::new(BoardState::default());
    store.dispatch(Action::PromptsLoaded(Err(LoadError::HttpStatus(404))));

    assert_eq!(store.state().error(), Some(&LoadError::HttpStatus(404)));
    assert!(!store.state().loading_visible);
    assert!(store.state().is_empty());
}

#[test]
fn loaded_prompts_reset_feedback_and_cursor() {
    let store = loaded_store(3);
    assert_eq!(store.state().status, LoadStatus::Ready);
    assert_eq!(store.state().feedback.len(), 3);
    assert_eq!(store.state().cursor, Cursor::NONE);
    assert_eq!(store.state().revision, 1);
}

#[test]
fn navigate_next_highlights_and_schedules_removal() {
    let mut store = loaded_store(3);
    let result = store.dispatch(Action::NavigateNext);

    assert!(result.state_changed);
    assert_eq!(store.state().cursor, Cursor::at(0));
    assert_eq!(highlighted(&store), vec![0]);
    let request = store.state().scroll_request.unwrap();
    assert_eq!((request.index, request.smooth), (0, true));
    assert_eq!(Some(request.generation), store.state().feedback[0].highlight);
    match result.effects.as_slice() {
        [Effect::Schedule { after, timer }] => {
            assert_eq!(*after, Duration::from_millis(1000));
            assert!(matches!(timer, Timer::HighlightExpired { index: 0, .. }));
        }
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn navigation_clears_previous_highlights() {
    let mut store = loaded_store(3);
    store.dispatch(Action::NavigateNext);
    store.dispatch(Action::NavigateNext);
    assert_eq!(highlighted(&store), vec![1]);

    store.dispatch(Action::NavigatePrevious);
    assert_eq!(highlighted(&store), vec![0]);
}

#[test]
fn previous_before_any_navigation_selects_last() {
    let mut store = loaded_store(4);
    store.dispatch(Action::NavigatePrevious);
    assert_eq!(store.state().cursor, Cursor::at(3));
}

#[test]
fn navigation_on_empty_list_is_noop() {
    let mut store = loaded_store(0);
    for action in [
        Action::NavigateNext,
        Action::NavigatePrevious,
        Action::CopyCurrent,
    ] {
        let result = store.dispatch(action);
        assert!(result.effects.is_empty());
        assert!(!result.state_changed);
    }
    assert_eq!(store.state().cursor, Cursor::NONE);
}

#[test]
fn stale_highlight_removal_keeps_newer_highlight() {
    let mut store = loaded_store(2);
    let first = scheduled(&store.dispatch(Action::NavigateNext).effects);
    store.dispatch(Action::NavigateNext);
    store.dispatch(Action::NavigatePrevious);
    assert_eq!(highlighted(&store), vec![0]);

    // The timer from the first highlight of card 0 fires late.
    let result = store.dispatch(Action::TimerFired(first[0]));
    assert!(!result.state_changed);
    assert_eq!(highlighted(&store), vec![0]);
}

#[test]
fn highlight_removal_clears_matching_generation() {
    let mut store = loaded_store(2);
    let timers = scheduled(&store.dispatch(Action::NavigateNext).effects);
    let result = store.dispatch(Action::TimerFired(timers[0]));
    assert!(result.state_changed);
    assert!(highlighted(&store).is_empty());
}

#[test]
fn copy_current_requires_selection() {
    let mut store = loaded_store(2);
    assert!(store.dispatch(Action::CopyCurrent).effects.is_empty());

    store.dispatch(Action::NavigateNext);
    store.dispatch(Action::NavigateNext);
    let result = store.dispatch(Action::CopyCurrent);
    assert_eq!(
        result.effects,
        vec![Effect::WriteClipboard {
            index: 1,
            text: "text 1".to_string()
        }]
    );
}

#[test]
fn copy_out_of_range_is_ignored() {
    let mut store = loaded_store(2);
    for index in [-1, -5, 2, 99] {
        let result = store.dispatch(Action::CopyPrompt { index });
        assert!(result.effects.is_empty(), "index {index}");
        assert!(!result.state_changed, "index {index}");
    }
    assert_eq!(store.state().cursor, Cursor::NONE);
    assert!(store.state().feedback.iter().all(|c| *c == CardFeedback::default()));
}

#[test]
fn primary_copy_sets_cursor_and_feedback() {
    let mut store = loaded_store(3);
    let result = store.dispatch(Action::ClipboardWritten {
        index: 1,
        outcome: CopyOutcome::Primary,
    });

    assert_eq!(store.state().cursor, Cursor::at(1));
    assert!(store.state().card(1).unwrap().copying);
    assert!(store.state().notification.visible);

    let timers = scheduled(&result.effects);
    assert!(timers.contains(&Timer::CopyingFinished { index: 1 }));
    assert!(timers
        .iter()
        .any(|t| matches!(t, Timer::NotificationExpired { .. })));
}

#[test]
fn copying_finished_advances_view_to_next_card() {
    let mut store = loaded_store(3);
    store.dispatch(Action::ClipboardWritten {
        index: 2,
        outcome: CopyOutcome::Primary,
    });
    let result = store.dispatch(Action::TimerFired(Timer::CopyingFinished { index: 2 }));

    assert!(!store.state().card(2).unwrap().copying);
    assert_eq!(store.state().cursor, Cursor::at(2));
    assert_eq!(highlighted(&store), vec![0]);
    assert_eq!(store.state().scroll_request.map(|r| r.index), Some(0));
    assert!(matches!(
        scheduled(&result.effects).as_slice(),
        [Timer::HighlightExpired { index: 0, .. }]
    ));
}

#[test]
fn fallback_copy_only_notifies() {
    let mut store = loaded_store(2);
    let result = store.dispatch(Action::ClipboardWritten {
        index: 0,
        outcome: CopyOutcome::Fallback,
    });

    assert!(store.state().notification.visible);
    assert_eq!(store.state().cursor, Cursor::NONE);
    assert!(!store.state().card(0).unwrap().copying);
    assert_eq!(scheduled(&result.effects).len(), 1);
}

#[test]
fn failed_copy_changes_nothing() {
    let mut store = loaded_store(2);
    let result = store.dispatch(Action::ClipboardWritten {
        index: 0,
        outcome: CopyOutcome::Failed {
            primary: CopyError::Unavailable,
            fallback: CopyError::Unavailable,
        },
    });

    assert!(result.effects.is_empty());
    assert!(!result.state_changed);
    assert!(!store.state().notification.visible);
}

#[test]
fn notification_hides_only_for_latest_generation() {
    let mut store = loaded_store(2);
    let first = scheduled(
        &store
            .dispatch(Action::ClipboardWritten {
                index: 0,
                outcome: CopyOutcome::Fallback,
            })
            .effects,
    );
    let second = scheduled(
        &store
            .dispatch(Action::ClipboardWritten {
                index: 1,
                outcome: CopyOutcome::Fallback,
            })
            .effects,
    );

    store.dispatch(Action::TimerFired(first[0]));
    assert!(store.state().notification.visible);

    store.dispatch(Action::TimerFired(second[0]));
    assert!(!store.state().notification.visible);
}
