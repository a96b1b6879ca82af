use std::path::PathBuf;

use crate::view_model::AppViewModel;

/// Generation counter for in-flight backend requests. A completion event
/// whose id no longer matches the pending one is stale and must be ignored.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectedFile {
    pub(crate) path: PathBuf,
    pub(crate) name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingUpload {
    request_id: RequestId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingSend {
    request_id: RequestId,
    recipient_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    selected_file: Option<SelectedFile>,
    custom_prompt: String,
    summary: Option<String>,
    edited_summary: String,
    recipients: String,
    dialog_visible: bool,
    upload: Option<PendingUpload>,
    send: Option<PendingSend>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            file_name: self.selected_file.as_ref().map(|file| file.name.clone()),
            custom_prompt: self.custom_prompt.clone(),
            has_summary: self.summary.is_some(),
            edited_summary: self.edited_summary.clone(),
            uploading: self.upload.is_some(),
            can_submit: self.selected_file.is_some() && self.upload.is_none(),
            dialog_visible: self.dialog_visible,
            recipients: self.recipients.clone(),
            sending: self.send.is_some(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub(crate) fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub(crate) fn custom_prompt(&self) -> &str {
        &self.custom_prompt
    }

    pub(crate) fn edited_summary(&self) -> &str {
        &self.edited_summary
    }

    pub(crate) fn recipients(&self) -> &str {
        &self.recipients
    }

    pub(crate) fn has_summary(&self) -> bool {
        self.summary.is_some()
    }

    pub(crate) fn is_uploading(&self) -> bool {
        self.upload.is_some()
    }

    pub(crate) fn is_sending(&self) -> bool {
        self.send.is_some()
    }

    /// Selects a new notes document. The previous summary (and any upload
    /// still in flight for it) no longer describes the selection, so both
    /// are dropped.
    pub(crate) fn choose_file(&mut self, path: PathBuf, name: String) {
        self.selected_file = Some(SelectedFile { path, name });
        self.summary = None;
        self.edited_summary.clear();
        self.upload = None;
        self.dirty = true;
    }

    pub(crate) fn set_custom_prompt(&mut self, text: String) {
        if self.custom_prompt != text {
            self.custom_prompt = text;
            self.dirty = true;
        }
    }

    pub(crate) fn set_edited_summary(&mut self, text: String) {
        if self.edited_summary != text {
            self.edited_summary = text;
            self.dirty = true;
        }
    }

    pub(crate) fn set_recipients(&mut self, text: String) {
        if self.recipients != text {
            self.recipients = text;
            self.dirty = true;
        }
    }

    pub(crate) fn open_dialog(&mut self) {
        if !self.dialog_visible {
            self.dialog_visible = true;
            self.dirty = true;
        }
    }

    pub(crate) fn close_dialog(&mut self) {
        if self.dialog_visible {
            self.dialog_visible = false;
            self.dirty = true;
        }
    }

    pub(crate) fn clear_recipients(&mut self) {
        if !self.recipients.is_empty() {
            self.recipients.clear();
            self.dirty = true;
        }
    }

    pub(crate) fn begin_upload(&mut self) -> RequestId {
        let request_id = self.allocate_request_id();
        self.upload = Some(PendingUpload { request_id });
        self.dirty = true;
        request_id
    }

    /// Clears the pending upload if `request_id` is the current one.
    /// Returns false for stale or unsolicited completions.
    pub(crate) fn finish_upload(&mut self, request_id: RequestId) -> bool {
        match self.upload {
            Some(pending) if pending.request_id == request_id => {
                self.upload = None;
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    /// Installs the backend summary and the user's editable copy of it.
    /// The two are decoupled from here on.
    pub(crate) fn apply_summary(&mut self, text: String) {
        self.edited_summary = text.clone();
        self.summary = Some(text);
        self.dirty = true;
    }

    pub(crate) fn begin_send(&mut self, recipient_count: usize) -> RequestId {
        let request_id = self.allocate_request_id();
        self.send = Some(PendingSend {
            request_id,
            recipient_count,
        });
        self.dirty = true;
        request_id
    }

    /// Clears the pending send if `request_id` is the current one and
    /// returns the recipient count captured at send time.
    pub(crate) fn finish_send(&mut self, request_id: RequestId) -> Option<usize> {
        match self.send {
            Some(pending) if pending.request_id == request_id => {
                self.send = None;
                self.dirty = true;
                Some(pending.recipient_count)
            }
            _ => None,
        }
    }

    fn allocate_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }
}
