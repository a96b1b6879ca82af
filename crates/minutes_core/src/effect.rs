use std::path::PathBuf;

/// Subject line attached to every delivered summary.
pub const EMAIL_SUBJECT: &str = "Meeting Summary";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Upload the selected notes document for summarization.
    UploadNotes {
        request_id: crate::RequestId,
        path: PathBuf,
        file_name: String,
        custom_prompt: String,
    },
    /// Deliver the edited summary to the parsed recipients.
    DeliverSummary {
        request_id: crate::RequestId,
        recipients: Vec<String>,
        subject: String,
        body: String,
    },
    /// Show a blocking notice to the user.
    ShowNotice {
        severity: NoticeSeverity,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Info,
    Warning,
    Error,
}
