use std::path::PathBuf;
use std::sync::Once;

use minutes_core::{update, AppState, Effect, Msg, NoticeSeverity, ShareChannel};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

/// State after one full summarization round trip.
fn summarized(summary: &str) -> AppState {
    let state = AppState::new();
    let (state, _) = update(
        state,
        Msg::FileChosen {
            path: PathBuf::from("notes/standup.txt"),
            name: "standup.txt".to_string(),
        },
    );
    let (state, _) = update(state, Msg::SummarizeClicked);
    let (state, _) = update(
        state,
        Msg::UploadFinished {
            request_id: 1,
            result: Ok(summary.to_string()),
        },
    );
    state
}

#[test]
fn share_email_opens_dialog_without_effects() {
    init_logging();
    let mut state = summarized("Team agreed on the Q3 scope.");
    state.consume_dirty();

    let (next, effects) = update(state, Msg::ShareClicked(ShareChannel::Email));

    assert!(effects.is_empty());
    let view = next.view();
    assert!(view.dialog_visible);
    assert!(view.dirty);
}

#[test]
fn share_slack_shows_coming_soon_notice() {
    init_logging();
    let mut state = summarized("Team agreed on the Q3 scope.");
    state.consume_dirty();

    let (mut next, effects) = update(state, Msg::ShareClicked(ShareChannel::Slack));

    assert_eq!(
        effects,
        vec![Effect::ShowNotice {
            severity: NoticeSeverity::Info,
            message: "Sharing to Slack is coming soon".to_string(),
        }]
    );
    assert!(!next.view().dialog_visible);
    assert!(!next.consume_dirty());
}

#[test]
fn share_copy_link_shows_coming_soon_notice() {
    init_logging();
    let state = summarized("Team agreed on the Q3 scope.");

    let (next, effects) = update(state, Msg::ShareClicked(ShareChannel::CopyLink));

    assert_eq!(
        effects,
        vec![Effect::ShowNotice {
            severity: NoticeSeverity::Info,
            message: "Sharing to Copy Link is coming soon".to_string(),
        }]
    );
    assert!(!next.view().dialog_visible);
}

#[test]
fn share_without_summary_is_ignored() {
    init_logging();
    let state = AppState::new();

    let (mut next, effects) = update(state, Msg::ShareClicked(ShareChannel::Email));

    assert!(effects.is_empty());
    assert!(!next.view().dialog_visible);
    assert!(!next.consume_dirty());
}

#[test]
fn editing_summary_is_local_and_effect_free() {
    init_logging();
    let mut state = summarized("backend text");
    state.consume_dirty();

    let (next, effects) = update(state, Msg::SummaryEdited("my rewrite".to_string()));

    assert!(effects.is_empty());
    let view = next.view();
    assert_eq!(view.edited_summary, "my rewrite");
    assert!(view.has_summary);
    assert!(view.dirty);
}

#[test]
fn summary_edit_before_any_summary_is_ignored() {
    init_logging();
    let state = AppState::new();

    let (mut next, effects) = update(state, Msg::SummaryEdited("typed too early".to_string()));

    assert!(effects.is_empty());
    assert_eq!(next.view().edited_summary, "");
    assert!(!next.consume_dirty());
}
