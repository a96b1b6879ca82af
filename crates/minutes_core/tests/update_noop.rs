use std::path::PathBuf;
use std::sync::Once;

use minutes_core::{update, AppState, Msg, ShareChannel};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn with_summary() -> AppState {
    let state = AppState::new();
    let (state, _) = update(
        state,
        Msg::FileChosen {
            path: PathBuf::from("notes/retro.md"),
            name: "retro.md".to_string(),
        },
    );
    let (state, _) = update(state, Msg::SummarizeClicked);
    let (state, _) = update(
        state,
        Msg::UploadFinished {
            request_id: 1,
            result: Ok("Decisions and action items".to_string()),
        },
    );
    state
}

#[test]
fn noop_changes_nothing() {
    init_logging();
    let mut fresh = AppState::new();
    fresh.consume_dirty();

    let before = fresh.clone();
    let (mut after, effects) = update(fresh, Msg::NoOp);

    assert!(effects.is_empty());
    assert!(!after.consume_dirty());
    assert_eq!(after, before);
}

#[test]
fn noop_preserves_a_populated_state() {
    init_logging();
    let state = with_summary();
    let (state, _) = update(state, Msg::ShareClicked(ShareChannel::Email));
    let (mut state, _) = update(state, Msg::RecipientsEdited("team@x.com".to_string()));
    state.consume_dirty();

    let before = state.clone();
    let (mut after, effects) = update(state, Msg::NoOp);

    assert!(effects.is_empty());
    assert!(!after.consume_dirty());
    assert_eq!(after, before);
}

#[test]
fn noop_does_not_disturb_an_inflight_upload() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(
        state,
        Msg::FileChosen {
            path: PathBuf::from("notes/retro.md"),
            name: "retro.md".to_string(),
        },
    );
    let (mut state, _) = update(state, Msg::SummarizeClicked);
    state.consume_dirty();

    let before = state.clone();
    let (after, effects) = update(state, Msg::NoOp);

    assert!(effects.is_empty());
    assert!(after.view().uploading);
    assert_eq!(after, before);
}
