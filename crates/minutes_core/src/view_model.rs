/// Flat snapshot of the workflow state, shaped for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub file_name: Option<String>,
    pub custom_prompt: String,
    pub has_summary: bool,
    pub edited_summary: String,
    pub uploading: bool,
    /// A document is selected and no upload is in flight.
    pub can_submit: bool,
    pub dialog_visible: bool,
    pub recipients: String,
    pub sending: bool,
    pub dirty: bool,
}
