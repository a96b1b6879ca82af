//! Minutes client: talks to the summarizer backend and executes IO off the UI thread.
mod api;
mod backend;
mod error;
mod handle;
mod types;

pub use backend::{Backend, BackendSettings, HttpBackend};
pub use error::BackendError;
pub use handle::ClientHandle;
pub use types::{ClientEvent, RequestId};
