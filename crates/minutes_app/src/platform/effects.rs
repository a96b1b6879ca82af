use app_logging::{app_error, app_info, app_warn};
use minutes_client::{BackendError, BackendSettings, ClientEvent, ClientHandle};
use minutes_core::{Effect, Msg, NoticeSeverity, RequestFailure};

/// A message for the user, surfaced as a modal overlay by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub message: String,
}

/// Executes the effects the state machine emits. IO effects go to the
/// backend client; notices are handed back for the UI to display.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        Ok(Self {
            client: ClientHandle::new(settings)?,
        })
    }

    pub fn run(&self, effects: Vec<Effect>) -> Vec<Notice> {
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                Effect::UploadNotes {
                    request_id,
                    path,
                    file_name,
                    custom_prompt,
                } => {
                    app_info!(
                        "UploadNotes request_id={} file={} prompt_len={}",
                        request_id,
                        file_name,
                        custom_prompt.len()
                    );
                    self.client
                        .summarize(request_id, path, file_name, custom_prompt);
                }
                Effect::DeliverSummary {
                    request_id,
                    recipients,
                    subject,
                    body,
                } => {
                    app_info!(
                        "DeliverSummary request_id={} recipients={}",
                        request_id,
                        recipients.len()
                    );
                    self.client.deliver_email(request_id, recipients, subject, body);
                }
                Effect::ShowNotice { severity, message } => {
                    match severity {
                        NoticeSeverity::Info => app_info!("notice: {}", message),
                        NoticeSeverity::Warning => app_warn!("notice: {}", message),
                        NoticeSeverity::Error => app_error!("notice: {}", message),
                    }
                    notices.push(Notice { severity, message });
                }
            }
        }
        notices
    }

    /// Drains one completion event from the client, mapped to a core message.
    pub fn poll(&self) -> Option<Msg> {
        self.client.try_recv().map(|event| match event {
            ClientEvent::UploadFinished { request_id, result } => Msg::UploadFinished {
                request_id,
                result: result.map_err(|err| {
                    app_warn!("upload {} failed: {}", request_id, err);
                    map_failure(err)
                }),
            },
            ClientEvent::DeliveryFinished { request_id, result } => Msg::SendFinished {
                request_id,
                result: result.map_err(|err| {
                    app_warn!("delivery {} failed: {}", request_id, err);
                    map_failure(err)
                }),
            },
        })
    }
}

fn map_failure(err: BackendError) -> RequestFailure {
    match err {
        BackendError::Rejected(message) => RequestFailure::Rejected { message },
        BackendError::FileRead(message) => RequestFailure::FileUnreadable { message },
        err @ BackendError::NotesTooLarge { .. } => RequestFailure::FileUnreadable {
            message: err.to_string(),
        },
        // Timeouts, connect failures and malformed replies all read as
        // "the backend is not reachable" to the user.
        BackendError::Timeout
        | BackendError::Network(_)
        | BackendError::InvalidResponse(_)
        | BackendError::InvalidBaseUrl(_) => RequestFailure::Unreachable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_failures_collapse_to_core_categories() {
        assert_eq!(
            map_failure(BackendError::Rejected("nope".to_string())),
            RequestFailure::Rejected {
                message: "nope".to_string()
            }
        );
        assert_eq!(
            map_failure(BackendError::FileRead("denied".to_string())),
            RequestFailure::FileUnreadable {
                message: "denied".to_string()
            }
        );
        assert!(matches!(
            map_failure(BackendError::NotesTooLarge {
                max_bytes: 8,
                actual: 16
            }),
            RequestFailure::FileUnreadable { .. }
        ));
        assert_eq!(map_failure(BackendError::Timeout), RequestFailure::Unreachable);
        assert_eq!(
            map_failure(BackendError::Network("refused".to_string())),
            RequestFailure::Unreachable
        );
        assert_eq!(
            map_failure(BackendError::InvalidResponse("not json".to_string())),
            RequestFailure::Unreachable
        );
    }
}
