use crate::error::BackendError;

pub type RequestId = u64;

/// Completion events drained by the UI loop via [`crate::ClientHandle::try_recv`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    UploadFinished {
        request_id: RequestId,
        result: Result<String, BackendError>,
    },
    DeliveryFinished {
        request_id: RequestId,
        result: Result<(), BackendError>,
    },
}
