//! Wire shapes for the summarizer backend. Both endpoints reply with a
//! `success` flag plus either a payload or an `error` message; HTTP status
//! codes carry no meaning.

use serde::{Deserialize, Serialize};

pub(crate) const UPLOAD_PATH: &str = "upload";
pub(crate) const SEND_EMAIL_PATH: &str = "send-email";

/// Multipart field holding the notes document on `POST /upload`.
pub(crate) const NOTES_PART: &str = "meetingNotes";
/// Multipart field holding the optional prompt. Sent even when empty.
pub(crate) const PROMPT_PART: &str = "customPrompt";

#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) summary: Option<String>,
    #[serde(default)]
    pub(crate) error: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SendEmailRequest<'a> {
    pub(crate) recipients: &'a [String],
    pub(crate) subject: &'a str,
    pub(crate) summary: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SendEmailResponse {
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) error: Option<String>,
}
