use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a notes document (path plus display name).
    FileChosen { path: PathBuf, name: String },
    /// User edited the optional custom instructions.
    PromptEdited(String),
    /// User asked for a summary of the selected document.
    SummarizeClicked,
    /// The backend finished (or failed) a summarization request.
    UploadFinished {
        request_id: crate::RequestId,
        result: Result<String, RequestFailure>,
    },
    /// User edited the returned summary in place.
    SummaryEdited(String),
    /// User picked a share channel for the edited summary.
    ShareClicked(ShareChannel),
    /// User edited the recipients line in the email dialog.
    RecipientsEdited(String),
    /// User confirmed the email dialog.
    SendClicked,
    /// The backend finished (or failed) an email delivery.
    SendFinished {
        request_id: crate::RequestId,
        result: Result<(), RequestFailure>,
    },
    /// User dismissed the email dialog.
    CancelClicked,
    /// Explicit do-nothing message for wiring that has no effect yet.
    NoOp,
}

/// Destination of a share action. Only email is wired to a real channel;
/// the others are placeholders awaiting integrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareChannel {
    Email,
    Slack,
    CopyLink,
}

impl ShareChannel {
    /// Channel name as shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Slack => "Slack",
            Self::CopyLink => "Copy Link",
        }
    }
}

/// Failure classes the core distinguishes when a backend interaction ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// The backend processed the request and reported `success: false`.
    Rejected { message: String },
    /// The notes document could not be read before any network call.
    FileUnreadable { message: String },
    /// Transport-level failure: connect, timeout, malformed response.
    Unreachable,
}
