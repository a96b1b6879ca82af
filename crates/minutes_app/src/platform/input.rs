use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use minutes_core::{AppViewModel, Msg, NoticeSeverity, ShareChannel};

use super::app::UiState;
use super::editing;
use super::effects::Notice;

/// What the main loop should do with a key press.
pub enum Action {
    Dispatch(Msg),
    Quit,
    None,
}

/// Form fields in tab order. Summary and the share row only join the
/// cycle once a summary exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    NotesPath,
    Prompt,
    Summary,
    ShareRow,
}

impl FocusField {
    pub const ALL: [Self; 4] = [Self::NotesPath, Self::Prompt, Self::Summary, Self::ShareRow];

    pub fn next(self, has_summary: bool) -> Self {
        self.cycle(1, has_summary)
    }

    pub fn prev(self, has_summary: bool) -> Self {
        self.cycle(-1, has_summary)
    }

    fn cycle(self, step: isize, has_summary: bool) -> Self {
        let fields: &[Self] = if has_summary {
            &Self::ALL
        } else {
            &Self::ALL[..2]
        };
        let len = fields.len() as isize;
        let idx = fields.iter().position(|&f| f == self).unwrap_or(0) as isize;
        fields[((idx + step + len) % len) as usize]
    }
}

pub const SHARE_CHANNELS: [ShareChannel; 3] = [
    ShareChannel::Email,
    ShareChannel::Slack,
    ShareChannel::CopyLink,
];

fn cycle_channel(current: ShareChannel, step: isize) -> ShareChannel {
    let len = SHARE_CHANNELS.len() as isize;
    let idx = SHARE_CHANNELS
        .iter()
        .position(|&c| c == current)
        .unwrap_or(0) as isize;
    SHARE_CHANNELS[((idx + step + len) % len) as usize]
}

pub fn handle_key(key: KeyEvent, view: &AppViewModel, ui: &mut UiState) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }
    if is_quit(&key) {
        return Action::Quit;
    }

    // A visible notice swallows the next key press.
    if ui.dismiss_notice() {
        return Action::None;
    }

    if view.dialog_visible {
        dialog_key(key, view, ui)
    } else {
        form_key(key, view, ui)
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
}

fn dialog_key(key: KeyEvent, view: &AppViewModel, ui: &mut UiState) -> Action {
    if view.sending {
        // The dialog freezes while the delivery is in flight.
        return Action::None;
    }
    match key.code {
        KeyCode::Esc => return Action::Dispatch(Msg::CancelClicked),
        KeyCode::Enter => return Action::Dispatch(Msg::SendClicked),
        _ => {}
    }
    match line_edit(&key, &view.recipients, ui.recipients_cursor) {
        LineEdit::Changed(text, cursor) => {
            ui.recipients_cursor = cursor;
            Action::Dispatch(Msg::RecipientsEdited(text))
        }
        LineEdit::Moved(cursor) => {
            ui.recipients_cursor = cursor;
            ui.mark_redraw();
            Action::None
        }
        LineEdit::Unhandled => Action::None,
    }
}

fn form_key(key: KeyEvent, view: &AppViewModel, ui: &mut UiState) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('g') {
        return Action::Dispatch(Msg::SummarizeClicked);
    }
    match key.code {
        KeyCode::Tab => {
            ui.focus = ui.focus.next(view.has_summary);
            ui.mark_redraw();
            return Action::None;
        }
        KeyCode::BackTab => {
            ui.focus = ui.focus.prev(view.has_summary);
            ui.mark_redraw();
            return Action::None;
        }
        _ => {}
    }

    match ui.focus {
        FocusField::NotesPath => path_key(key, ui),
        FocusField::Prompt => prompt_key(key, view, ui),
        FocusField::Summary => summary_key(key, view, ui),
        FocusField::ShareRow => share_key(key, view, ui),
    }
}

fn path_key(key: KeyEvent, ui: &mut UiState) -> Action {
    if key.code == KeyCode::Enter {
        return match probe_notes_file(&ui.path_input) {
            Ok((path, name)) => Action::Dispatch(Msg::FileChosen { path, name }),
            Err(reason) => {
                ui.push_notice(Notice {
                    severity: NoticeSeverity::Error,
                    message: format!("Could not read the notes file: {reason}"),
                });
                Action::None
            }
        };
    }
    let text = ui.path_input.clone();
    match line_edit(&key, &text, ui.path_cursor) {
        LineEdit::Changed(text, cursor) => {
            ui.path_input = text;
            ui.path_cursor = cursor;
            ui.mark_redraw();
            Action::None
        }
        LineEdit::Moved(cursor) => {
            ui.path_cursor = cursor;
            ui.mark_redraw();
            Action::None
        }
        LineEdit::Unhandled => Action::None,
    }
}

fn prompt_key(key: KeyEvent, view: &AppViewModel, ui: &mut UiState) -> Action {
    if key.code == KeyCode::Enter {
        return Action::Dispatch(Msg::SummarizeClicked);
    }
    match line_edit(&key, &view.custom_prompt, ui.prompt_cursor) {
        LineEdit::Changed(text, cursor) => {
            ui.prompt_cursor = cursor;
            Action::Dispatch(Msg::PromptEdited(text))
        }
        LineEdit::Moved(cursor) => {
            ui.prompt_cursor = cursor;
            ui.mark_redraw();
            Action::None
        }
        LineEdit::Unhandled => Action::None,
    }
}

fn summary_key(key: KeyEvent, view: &AppViewModel, ui: &mut UiState) -> Action {
    if !view.has_summary {
        return Action::None;
    }
    let text = view.edited_summary.as_str();
    match key.code {
        KeyCode::Enter => {
            let (out, cursor) = editing::insert_char(text, ui.summary_cursor, '\n');
            ui.set_summary_cursor(&out, cursor);
            Action::Dispatch(Msg::SummaryEdited(out))
        }
        KeyCode::Up => {
            let (row, col) = editing::cursor_position(text, ui.summary_cursor);
            if row > 0 {
                let goal = ui.summary_col_goal.max(col);
                ui.summary_cursor = editing::cursor_at(text, row - 1, goal);
                ui.summary_col_goal = goal;
                ui.mark_redraw();
            }
            Action::None
        }
        KeyCode::Down => {
            let (row, col) = editing::cursor_position(text, ui.summary_cursor);
            if row + 1 < editing::line_count(text) {
                let goal = ui.summary_col_goal.max(col);
                ui.summary_cursor = editing::cursor_at(text, row + 1, goal);
                ui.summary_col_goal = goal;
                ui.mark_redraw();
            }
            Action::None
        }
        KeyCode::Left => {
            ui.set_summary_cursor(text, ui.summary_cursor.saturating_sub(1));
            ui.mark_redraw();
            Action::None
        }
        KeyCode::Right => {
            ui.set_summary_cursor(text, editing::clamp_cursor(text, ui.summary_cursor + 1));
            ui.mark_redraw();
            Action::None
        }
        KeyCode::Home => {
            ui.set_summary_cursor(text, editing::line_start(text, ui.summary_cursor));
            ui.mark_redraw();
            Action::None
        }
        KeyCode::End => {
            ui.set_summary_cursor(text, editing::line_end(text, ui.summary_cursor));
            ui.mark_redraw();
            Action::None
        }
        KeyCode::Backspace => match editing::delete_before(text, ui.summary_cursor) {
            Some((out, cursor)) => {
                ui.set_summary_cursor(&out, cursor);
                Action::Dispatch(Msg::SummaryEdited(out))
            }
            None => Action::None,
        },
        KeyCode::Delete => match editing::delete_at(text, ui.summary_cursor) {
            Some(out) => Action::Dispatch(Msg::SummaryEdited(out)),
            None => Action::None,
        },
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let (out, cursor) = editing::insert_char(text, ui.summary_cursor, ch);
            ui.set_summary_cursor(&out, cursor);
            Action::Dispatch(Msg::SummaryEdited(out))
        }
        _ => Action::None,
    }
}

fn share_key(key: KeyEvent, _view: &AppViewModel, ui: &mut UiState) -> Action {
    match key.code {
        KeyCode::Left => {
            ui.share_choice = cycle_channel(ui.share_choice, -1);
            ui.mark_redraw();
            Action::None
        }
        KeyCode::Right => {
            ui.share_choice = cycle_channel(ui.share_choice, 1);
            ui.mark_redraw();
            Action::None
        }
        KeyCode::Enter => Action::Dispatch(Msg::ShareClicked(ui.share_choice)),
        _ => Action::None,
    }
}

enum LineEdit {
    Changed(String, usize),
    Moved(usize),
    Unhandled,
}

/// Shared editing for the single-line fields.
fn line_edit(key: &KeyEvent, text: &str, cursor: usize) -> LineEdit {
    match key.code {
        KeyCode::Left => LineEdit::Moved(cursor.saturating_sub(1)),
        KeyCode::Right => LineEdit::Moved(editing::clamp_cursor(text, cursor + 1)),
        KeyCode::Home => LineEdit::Moved(0),
        KeyCode::End => LineEdit::Moved(editing::char_len(text)),
        KeyCode::Backspace => match editing::delete_before(text, cursor) {
            Some((out, cursor)) => LineEdit::Changed(out, cursor),
            None => LineEdit::Unhandled,
        },
        KeyCode::Delete => match editing::delete_at(text, cursor) {
            Some(out) => LineEdit::Changed(out, cursor),
            None => LineEdit::Unhandled,
        },
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let (out, cursor) = editing::insert_char(text, cursor, ch);
            LineEdit::Changed(out, cursor)
        }
        _ => LineEdit::Unhandled,
    }
}

/// Checks that the typed path points at a readable regular file and
/// derives the display name the backend will see.
pub fn probe_notes_file(raw: &str) -> Result<(PathBuf, String), String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("no path entered".to_string());
    }
    let expanded = shellexpand::tilde(trimmed);
    let path = PathBuf::from(expanded.as_ref());
    let metadata = std::fs::metadata(&path).map_err(|err| err.to_string())?;
    if !metadata.is_file() {
        return Err(format!("{} is not a regular file", path.display()));
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| trimmed.to_string());
    Ok((path, name))
}
