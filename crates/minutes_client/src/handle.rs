use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};
use std::thread;

use crate::backend::{Backend, BackendSettings, HttpBackend};
use crate::error::BackendError;
use crate::types::{ClientEvent, RequestId};

enum ClientCommand {
    Summarize {
        request_id: RequestId,
        path: PathBuf,
        file_name: String,
        custom_prompt: String,
    },
    DeliverEmail {
        request_id: RequestId,
        recipients: Vec<String>,
        subject: String,
        body: String,
    },
}

/// Owns the worker thread that runs backend calls. Commands go in over a
/// channel, completion events come back out and are drained without blocking
/// from the UI loop.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        let max_notes_bytes = settings.max_notes_bytes;
        let backend = Arc::new(HttpBackend::new(settings)?);
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), max_notes_bytes, command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn summarize(
        &self,
        request_id: RequestId,
        path: impl Into<PathBuf>,
        file_name: impl Into<String>,
        custom_prompt: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(ClientCommand::Summarize {
            request_id,
            path: path.into(),
            file_name: file_name.into(),
            custom_prompt: custom_prompt.into(),
        });
    }

    pub fn deliver_email(
        &self,
        request_id: RequestId,
        recipients: Vec<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(ClientCommand::DeliverEmail {
            request_id,
            recipients,
            subject: subject.into(),
            body: body.into(),
        });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    backend: &dyn Backend,
    max_notes_bytes: u64,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Summarize {
            request_id,
            path,
            file_name,
            custom_prompt,
        } => {
            let result = match read_notes(&path, max_notes_bytes).await {
                Ok(notes) => backend.summarize(&file_name, notes, &custom_prompt).await,
                Err(err) => Err(err),
            };
            let _ = event_tx.send(ClientEvent::UploadFinished { request_id, result });
        }
        ClientCommand::DeliverEmail {
            request_id,
            recipients,
            subject,
            body,
        } => {
            let result = backend.deliver_email(&recipients, &subject, &body).await;
            let _ = event_tx.send(ClientEvent::DeliveryFinished { request_id, result });
        }
    }
}

/// Reads the selected document, refusing anything over the size cap before
/// the bytes are pulled into memory.
async fn read_notes(path: &Path, max_notes_bytes: u64) -> Result<Vec<u8>, BackendError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|err| BackendError::FileRead(err.to_string()))?;
    if metadata.len() > max_notes_bytes {
        return Err(BackendError::NotesTooLarge {
            max_bytes: max_notes_bytes,
            actual: metadata.len(),
        });
    }
    tokio::fs::read(path)
        .await
        .map_err(|err| BackendError::FileRead(err.to_string()))
}
