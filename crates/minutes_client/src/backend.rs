use std::time::Duration;

use reqwest::multipart::{Form, Part};

use crate::api::{
    SendEmailRequest, SendEmailResponse, UploadResponse, NOTES_PART, PROMPT_PART, SEND_EMAIL_PATH,
    UPLOAD_PATH,
};
use crate::error::BackendError;

#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_notes_bytes: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            connect_timeout: Duration::from_secs(10),
            // Summarization sits on an LLM call, which can take a while.
            request_timeout: Duration::from_secs(120),
            max_notes_bytes: 10 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Uploads the notes document and returns the generated summary.
    async fn summarize(
        &self,
        file_name: &str,
        notes: Vec<u8>,
        custom_prompt: &str,
    ) -> Result<String, BackendError>;

    /// Asks the backend to email `body` to `recipients`.
    async fn deliver_email(
        &self,
        recipients: &[String],
        subject: &str,
        body: &str,
    ) -> Result<(), BackendError>;
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    settings: BackendSettings,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| BackendError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait::async_trait]
impl Backend for HttpBackend {
    async fn summarize(
        &self,
        file_name: &str,
        notes: Vec<u8>,
        custom_prompt: &str,
    ) -> Result<String, BackendError> {
        let notes_part = Part::bytes(notes).file_name(file_name.to_string());
        let form = Form::new()
            .part(NOTES_PART, notes_part)
            .text(PROMPT_PART, custom_prompt.to_string());

        let response = self
            .client
            .post(self.endpoint(UPLOAD_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // The backend signals failure inside the JSON envelope, not via the
        // HTTP status, so the body is parsed unconditionally.
        let reply: UploadResponse = response.json().await.map_err(map_reqwest_error)?;
        if reply.success {
            reply.summary.ok_or_else(|| {
                BackendError::InvalidResponse("success reply carried no summary".to_string())
            })
        } else {
            Err(BackendError::Rejected(
                reply.error.unwrap_or_else(|| "unspecified error".to_string()),
            ))
        }
    }

    async fn deliver_email(
        &self,
        recipients: &[String],
        subject: &str,
        body: &str,
    ) -> Result<(), BackendError> {
        let payload = SendEmailRequest {
            recipients,
            subject,
            summary: body,
        };

        let response = self
            .client
            .post(self.endpoint(SEND_EMAIL_PATH))
            .json(&payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let reply: SendEmailResponse = response.json().await.map_err(map_reqwest_error)?;
        if reply.success {
            Ok(())
        } else {
            Err(BackendError::Rejected(
                reply.error.unwrap_or_else(|| "unspecified error".to_string()),
            ))
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::Timeout;
    }
    if err.is_decode() {
        return BackendError::InvalidResponse(err.to_string());
    }
    if err.is_builder() {
        return BackendError::InvalidBaseUrl(err.to_string());
    }
    BackendError::Network(err.to_string())
}
