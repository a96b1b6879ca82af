pub const TITLE: &str = "AI Meeting Notes Summarizer";

pub const NOTES_TITLE: &str = "Notes file";
pub const PROMPT_TITLE: &str = "Custom prompt (optional)";
pub const SUMMARY_TITLE: &str = "Summary";
pub const SUMMARY_TITLE_EDITABLE: &str = "Summary (editable)";

pub const PATH_PLACEHOLDER: &str = "Type a path and press Enter";
pub const PROMPT_PLACEHOLDER: &str = "e.g. Focus on decisions and action items";
pub const NO_SUMMARY_PLACEHOLDER: &str = "No summary yet. Pick a notes file and press Ctrl+G.";
pub const NO_FILE_LABEL: &str = "No file selected";

pub const SHARE_UNAVAILABLE: &str = "available once a summary exists";

pub const DIALOG_TITLE: &str = "Send summary by email";
pub const RECIPIENTS_LABEL: &str = "Recipients (comma separated)";
pub const DIALOG_WIDTH: u16 = 62;
pub const DIALOG_HEIGHT: u16 = 6;

pub const FORM_HINTS: &str =
    "Tab fields | Enter select file / summarize | Ctrl+G summarize | Ctrl+Q quit";
pub const DIALOG_HINTS: &str = "Enter send | Esc cancel";
pub const NOTICE_HINTS: &str = "Press any key to dismiss";

pub const UPLOADING_LABEL: &str = "Summarizing";
pub const SENDING_LABEL: &str = "Sending";
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
