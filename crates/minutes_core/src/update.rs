use crate::{AppState, Effect, Msg, NoticeSeverity, RequestFailure, ShareChannel, EMAIL_SUBJECT};

/// Shown when the user submits without selecting a notes document.
pub const NOTICE_NO_FILE: &str = "Select a meeting notes file first";
/// Shown when the recipients line parses to nothing.
pub const NOTICE_NO_RECIPIENTS: &str = "Enter at least one recipient address";
/// Shown when the edited summary is blank at send time.
pub const NOTICE_NO_SUMMARY: &str = "There is no summary to send";
/// Shown when a summarization request fails at the transport level.
pub const NOTICE_UPLOAD_UNREACHABLE: &str =
    "Could not reach the summarizer backend. Is it running?";
/// Shown when an email delivery fails at the transport level.
pub const NOTICE_SEND_UNREACHABLE: &str = "Could not reach the backend to send the email";

/// Applies one message to the state, returning the new state and the
/// effects it calls for. The only side channel is the dirty flag.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileChosen { path, name } => {
            state.choose_file(path, name);
            Vec::new()
        }
        Msg::PromptEdited(text) => {
            state.set_custom_prompt(text);
            Vec::new()
        }
        Msg::SummarizeClicked => {
            // The submit control is disabled while a request is in flight;
            // the state machine enforces the same rule.
            if state.is_uploading() {
                return (state, Vec::new());
            }
            let Some(file) = state.selected_file().cloned() else {
                return (
                    state,
                    vec![notice(NoticeSeverity::Warning, NOTICE_NO_FILE)],
                );
            };
            let custom_prompt = state.custom_prompt().to_owned();
            let request_id = state.begin_upload();
            vec![Effect::UploadNotes {
                request_id,
                path: file.path,
                file_name: file.name,
                custom_prompt,
            }]
        }
        Msg::UploadFinished { request_id, result } => {
            if !state.finish_upload(request_id) {
                // Stale or unsolicited: a newer request owns the form now.
                return (state, Vec::new());
            }
            match result {
                Ok(summary) => {
                    state.apply_summary(summary);
                    Vec::new()
                }
                Err(failure) => vec![upload_failure_notice(&failure)],
            }
        }
        Msg::SummaryEdited(text) => {
            // Editing is purely local and only meaningful once a summary
            // exists; it never touches the backend copy.
            if state.has_summary() {
                state.set_edited_summary(text);
            }
            Vec::new()
        }
        Msg::ShareClicked(channel) => {
            if !state.has_summary() {
                return (state, Vec::new());
            }
            match channel {
                ShareChannel::Email => {
                    state.open_dialog();
                    Vec::new()
                }
                other => vec![notice(
                    NoticeSeverity::Info,
                    format!("Sharing to {} is coming soon", other.label()),
                )],
            }
        }
        Msg::RecipientsEdited(text) => {
            state.set_recipients(text);
            Vec::new()
        }
        Msg::SendClicked => {
            if state.is_sending() {
                return (state, Vec::new());
            }
            // First violation wins, recipients before body.
            let recipients = parse_recipients(state.recipients());
            if recipients.is_empty() {
                return (
                    state,
                    vec![notice(NoticeSeverity::Warning, NOTICE_NO_RECIPIENTS)],
                );
            }
            if state.edited_summary().trim().is_empty() {
                return (
                    state,
                    vec![notice(NoticeSeverity::Warning, NOTICE_NO_SUMMARY)],
                );
            }
            let body = state.edited_summary().to_owned();
            let request_id = state.begin_send(recipients.len());
            vec![Effect::DeliverSummary {
                request_id,
                recipients,
                subject: EMAIL_SUBJECT.to_owned(),
                body,
            }]
        }
        Msg::SendFinished { request_id, result } => {
            let Some(recipient_count) = state.finish_send(request_id) else {
                return (state, Vec::new());
            };
            match result {
                Ok(()) => {
                    state.close_dialog();
                    state.clear_recipients();
                    vec![notice(
                        NoticeSeverity::Info,
                        format!("Summary sent to {recipient_count} recipient(s)"),
                    )]
                }
                // The dialog stays open with the entered data so the user
                // may retry.
                Err(failure) => vec![send_failure_notice(&failure)],
            }
        }
        Msg::CancelClicked => {
            if !state.is_sending() {
                state.close_dialog();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Splits the raw recipients line on commas and trims each token. Empty
/// tokens are dropped; duplicates and malformed addresses are kept as-is.
fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn notice(severity: NoticeSeverity, message: impl Into<String>) -> Effect {
    Effect::ShowNotice {
        severity,
        message: message.into(),
    }
}

fn upload_failure_notice(failure: &RequestFailure) -> Effect {
    match failure {
        RequestFailure::Rejected { message } => notice(
            NoticeSeverity::Error,
            format!("Summarization failed: {message}"),
        ),
        RequestFailure::FileUnreadable { message } => notice(
            NoticeSeverity::Error,
            format!("Could not read the notes file: {message}"),
        ),
        RequestFailure::Unreachable => notice(NoticeSeverity::Error, NOTICE_UPLOAD_UNREACHABLE),
    }
}

fn send_failure_notice(failure: &RequestFailure) -> Effect {
    match failure {
        RequestFailure::Rejected { message } => notice(
            NoticeSeverity::Error,
            format!("Email delivery failed: {message}"),
        ),
        RequestFailure::FileUnreadable { message } => notice(
            NoticeSeverity::Error,
            format!("Could not read the notes file: {message}"),
        ),
        RequestFailure::Unreachable => notice(NoticeSeverity::Error, NOTICE_SEND_UNREACHABLE),
    }
}
