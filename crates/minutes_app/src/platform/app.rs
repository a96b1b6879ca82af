use std::collections::VecDeque;
use std::io::Stdout;
use std::time::Duration;

use app_logging::app_info;
use crossterm::event::{self, Event};
use minutes_client::BackendSettings;
use minutes_core::{update, AppState, AppViewModel, Msg, ShareChannel};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::editing;
use super::effects::{EffectRunner, Notice};
use super::input::{self, Action, FocusField};
use super::logging;
use super::terminal;
use super::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize();
    app_info!("minutes_app starting");

    let runner = EffectRunner::new(BackendSettings::default())?;
    let mut state = AppState::new();
    let mut ui = UiState::new();

    let (mut term, guard) = terminal::setup()?;
    let result = run_loop(&mut term, &mut state, &mut ui, &runner);
    drop(guard);
    app_info!("minutes_app exiting");
    result
}

fn run_loop(
    term: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut AppState,
    ui: &mut UiState,
    runner: &EffectRunner,
) -> anyhow::Result<()> {
    let mut redraw = true;
    loop {
        while let Some(msg) = runner.poll() {
            dispatch(state, ui, runner, msg);
        }
        if state.consume_dirty() || ui.take_redraw() {
            redraw = true;
        }

        let view = state.view();
        // In-flight requests animate the spinner, so they draw every pass.
        if redraw || view.uploading || view.sending {
            ui.advance_spinner();
            term.draw(|frame| ui::render::draw(frame, &view, ui))?;
            redraw = false;
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => match input::handle_key(key, &view, ui) {
                    Action::Dispatch(msg) => dispatch(state, ui, runner, msg),
                    Action::Quit => return Ok(()),
                    Action::None => {}
                },
                Event::Resize(_, _) => ui.mark_redraw(),
                _ => {}
            }
        }
    }
}

/// Runs a message through the pure core and executes whatever it asked for.
fn dispatch(state: &mut AppState, ui: &mut UiState, runner: &EffectRunner, msg: Msg) {
    let had_summary = state.view().has_summary;
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;

    for notice in runner.run(effects) {
        ui.push_notice(notice);
    }

    let view = state.view();
    if !had_summary && view.has_summary {
        // Drop the user straight into the editor when the summary lands.
        ui.focus = FocusField::Summary;
        ui.set_summary_cursor(&view.edited_summary, 0);
        ui.summary_scroll = (0, 0);
    }
    ui.sync_with(&view);
}

/// Presentation state the pure core does not track: focus, cursors, the
/// path being typed, scroll offsets and queued notices.
pub struct UiState {
    pub focus: FocusField,
    pub path_input: String,
    pub path_cursor: usize,
    pub prompt_cursor: usize,
    pub summary_cursor: usize,
    pub summary_col_goal: usize,
    pub summary_scroll: (u16, u16),
    pub recipients_cursor: usize,
    pub share_choice: ShareChannel,
    pub spinner_frame: usize,
    notices: VecDeque<Notice>,
    redraw: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focus: FocusField::NotesPath,
            path_input: String::new(),
            path_cursor: 0,
            prompt_cursor: 0,
            summary_cursor: 0,
            summary_col_goal: 0,
            summary_scroll: (0, 0),
            recipients_cursor: 0,
            share_choice: ShareChannel::Email,
            spinner_frame: 0,
            notices: VecDeque::new(),
            redraw: false,
        }
    }

    pub fn mark_redraw(&mut self) {
        self.redraw = true;
    }

    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.redraw, false)
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
        self.redraw = true;
    }

    /// Pops the front notice. Returns whether one was visible.
    pub fn dismiss_notice(&mut self) -> bool {
        let dismissed = self.notices.pop_front().is_some();
        if dismissed {
            self.redraw = true;
        }
        dismissed
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Moves the summary cursor and re-anchors the vertical goal column.
    pub fn set_summary_cursor(&mut self, text: &str, cursor: usize) {
        self.summary_cursor = editing::clamp_cursor(text, cursor);
        let (_, col) = editing::cursor_position(text, self.summary_cursor);
        self.summary_col_goal = col;
    }

    /// Clamps cursors and focus after the core state changed underneath.
    pub fn sync_with(&mut self, view: &AppViewModel) {
        self.prompt_cursor = editing::clamp_cursor(&view.custom_prompt, self.prompt_cursor);
        self.summary_cursor = editing::clamp_cursor(&view.edited_summary, self.summary_cursor);
        self.recipients_cursor = editing::clamp_cursor(&view.recipients, self.recipients_cursor);
        if !view.has_summary && matches!(self.focus, FocusField::Summary | FocusField::ShareRow) {
            self.focus = FocusField::NotesPath;
        }
    }
}
