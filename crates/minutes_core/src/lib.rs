//! Minutes core: pure state machine for the summarize-and-share workflow.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, NoticeSeverity, EMAIL_SUBJECT};
pub use msg::{Msg, RequestFailure, ShareChannel};
pub use state::{AppState, RequestId};
pub use update::{
    update, NOTICE_NO_FILE, NOTICE_NO_RECIPIENTS, NOTICE_NO_SUMMARY, NOTICE_SEND_UNREACHABLE,
    NOTICE_UPLOAD_UNREACHABLE,
};
pub use view_model::AppViewModel;
