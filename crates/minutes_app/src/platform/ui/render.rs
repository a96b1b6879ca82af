use minutes_core::{AppViewModel, NoticeSeverity};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout;
use crate::platform::app::UiState;
use crate::platform::editing;
use crate::platform::effects::Notice;
use crate::platform::input::{FocusField, SHARE_CHANNELS};

pub fn draw(frame: &mut Frame, view: &AppViewModel, ui: &mut UiState) {
    let areas = layout::form_areas(frame.area());
    let notice_up = ui.current_notice().is_some();
    // Focus highlights and the text cursor stay with the form only while
    // nothing is stacked on top of it.
    let form_active = !view.dialog_visible && !notice_up;

    frame.render_widget(
        Paragraph::new(TITLE)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        areas.title,
    );

    draw_line_input(
        frame,
        areas.notes_path,
        NOTES_TITLE,
        &ui.path_input,
        PATH_PLACEHOLDER,
        ui.path_cursor,
        form_active && ui.focus == FocusField::NotesPath,
    );
    draw_line_input(
        frame,
        areas.prompt,
        PROMPT_TITLE,
        &view.custom_prompt,
        PROMPT_PLACEHOLDER,
        ui.prompt_cursor,
        form_active && ui.focus == FocusField::Prompt,
    );

    let summary_focused = form_active && ui.focus == FocusField::Summary;
    draw_summary(frame, areas.summary, view, ui, summary_focused);

    draw_share_row(
        frame,
        areas.share,
        view,
        ui,
        form_active && ui.focus == FocusField::ShareRow,
    );
    draw_status(frame, areas.status, view, ui);
    draw_hints(frame, areas.hints, view);

    if view.dialog_visible {
        draw_dialog(frame, view, ui, notice_up);
    }
    if let Some(notice) = ui.current_notice() {
        draw_notice(frame, notice);
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn spinner(ui: &UiState) -> &'static str {
    SPINNER_FRAMES[ui.spinner_frame % SPINNER_FRAMES.len()]
}

/// Horizontal window over a single-line field so the cursor stays visible.
/// Returns the visible slice and the cursor column within it.
fn window_line(text: &str, cursor: usize, width: u16) -> (String, u16) {
    let width = width.max(1) as usize;
    let cursor = cursor.min(editing::char_len(text));
    let start = cursor.saturating_sub(width - 1);
    let visible: String = text.chars().skip(start).take(width).collect();
    (visible, (cursor - start) as u16)
}

fn draw_line_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    text: &str,
    placeholder: &str,
    cursor: usize,
    focused: bool,
) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let (visible, cursor_col) = window_line(text, cursor, inner.width);
    if text.is_empty() {
        frame.render_widget(
            Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray)),
            inner,
        );
    } else {
        frame.render_widget(Paragraph::new(visible), inner);
    }
    if focused {
        frame.set_cursor(inner.x + cursor_col, inner.y);
    }
}

/// Renders the summary editor, adjusting the stored scroll offset so the
/// cursor stays inside the viewport.
fn draw_summary(
    frame: &mut Frame,
    area: Rect,
    view: &AppViewModel,
    ui: &mut UiState,
    focused: bool,
) {
    let title = if view.has_summary {
        SUMMARY_TITLE_EDITABLE
    } else {
        SUMMARY_TITLE
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if !view.has_summary {
        frame.render_widget(
            Paragraph::new(NO_SUMMARY_PLACEHOLDER).style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let text = view.edited_summary.as_str();
    let (row, col) = editing::cursor_position(text, ui.summary_cursor);
    let row = row.min(u16::MAX as usize) as u16;
    let col = col.min(u16::MAX as usize) as u16;

    let (mut top, mut left) = ui.summary_scroll;
    if row < top {
        top = row;
    } else if row >= top.saturating_add(inner.height) {
        top = row - (inner.height - 1);
    }
    if col < left {
        left = col;
    } else if col >= left.saturating_add(inner.width) {
        left = col - (inner.width - 1);
    }
    ui.summary_scroll = (top, left);

    frame.render_widget(Paragraph::new(text).scroll((top, left)), inner);
    if focused {
        frame.set_cursor(inner.x + (col - left), inner.y + (row - top));
    }
}

fn draw_share_row(
    frame: &mut Frame,
    area: Rect,
    view: &AppViewModel,
    ui: &UiState,
    focused: bool,
) {
    let mut spans = vec![Span::styled("Share: ", Style::default().fg(Color::Gray))];
    if view.has_summary {
        for (idx, channel) in SHARE_CHANNELS.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("  "));
            }
            let selected = *channel == ui.share_choice;
            let label = if selected {
                format!("[{}]", channel.label())
            } else {
                format!(" {} ", channel.label())
            };
            let mut style = Style::default();
            if selected {
                style = style.fg(Color::Yellow);
                if focused {
                    style = style.add_modifier(Modifier::BOLD);
                }
            }
            spans.push(Span::styled(label, style));
        }
    } else {
        spans.push(Span::styled(
            SHARE_UNAVAILABLE,
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &UiState) {
    let file = view.file_name.as_deref().unwrap_or(NO_FILE_LABEL);
    let status = if view.uploading {
        format!("{file} | {UPLOADING_LABEL} {}", spinner(ui))
    } else if view.sending {
        format!("{file} | {SENDING_LABEL} {}", spinner(ui))
    } else if view.has_summary {
        format!("{file} | Summary ready")
    } else {
        file.to_string()
    };
    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::Gray)),
        area,
    );
}

fn draw_hints(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let hints = if view.dialog_visible {
        DIALOG_HINTS
    } else {
        FORM_HINTS
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)),
        area,
    );
}

fn draw_dialog(frame: &mut Frame, view: &AppViewModel, ui: &UiState, notice_up: bool) {
    let area = layout::centered_box(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(DIALOG_TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height < 4 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 4])
        .split(inner);

    frame.render_widget(
        Paragraph::new(RECIPIENTS_LABEL).style(Style::default().fg(Color::DarkGray)),
        rows[0],
    );

    let (visible, cursor_col) = window_line(&view.recipients, ui.recipients_cursor, rows[1].width);
    frame.render_widget(Paragraph::new(visible), rows[1]);

    let footer = if view.sending {
        Span::styled(
            format!("{SENDING_LABEL} {}", spinner(ui)),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled(
            DIALOG_HINTS,
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(footer)), rows[3]);

    if !view.sending && !notice_up {
        frame.set_cursor(rows[1].x + cursor_col, rows[1].y);
    }
}

fn draw_notice(frame: &mut Frame, notice: &Notice) {
    let (title, color) = match notice.severity {
        NoticeSeverity::Info => ("Notice", Color::Cyan),
        NoticeSeverity::Warning => ("Warning", Color::Yellow),
        NoticeSeverity::Error => ("Error", Color::Red),
    };

    let screen = frame.area();
    let desired = (notice.message.chars().count() as u16).saturating_add(4);
    let width = desired.clamp(24, screen.width.saturating_sub(4).max(24));
    let area = layout::centered_box(width, 7, screen);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height < 2 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    frame.render_widget(
        Paragraph::new(notice.message.as_str()).wrap(Wrap { trim: true }),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(NOTICE_HINTS)
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)),
        rows[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_line_keeps_the_cursor_in_view() {
        let text = "abcdefghij";
        let (visible, col) = window_line(text, 0, 4);
        assert_eq!(visible, "abcd");
        assert_eq!(col, 0);

        let (visible, col) = window_line(text, 10, 4);
        assert_eq!(visible, "hij");
        assert_eq!(col, 3);

        let (visible, col) = window_line(text, 6, 4);
        assert_eq!(visible, "defg");
        assert_eq!(col, 3);
    }

    #[test]
    fn window_line_handles_empty_text_and_stale_cursors() {
        assert_eq!(window_line("", 0, 10), (String::new(), 0));
        assert_eq!(window_line("ab", 9, 10), ("ab".to_string(), 2));
    }
}
