//! Application state and key handling.

use super::input::{digit_to_index, move_cursor};
use crossterm::event::KeyCode;
use strictly_tictactoe::{Action, GameSession, HistoryOrder, Position};
use tracing::{debug, instrument, warn};

/// Which panel receives the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move the history selection.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    initial_order: HistoryOrder,
    cursor: Position,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh session.
    #[instrument]
    pub fn new(initial_order: HistoryOrder) -> Self {
        Self {
            session: GameSession::with_history_order(initial_order),
            initial_order,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            should_quit: false,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel receiving arrow keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the history list, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r' | 'R') => self.restart(),
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('t' | 'T') => self.dispatch(Action::ToggleHistoryOrder),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(index) = digit_to_index(key) {
                    self.play(index);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor.to_index()),
                Focus::History => {
                    if let Some(entry) = self.session.display_history().get(self.selected) {
                        self.dispatch(Action::JumpTo(entry.step_number));
                    }
                }
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::History => self.move_selection(key),
            },
            _ => {}
        }
    }

    /// Starts over with a new session.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session = GameSession::with_history_order(self.initial_order);
        self.cursor = Position::Center;
        self.selected = 0;
    }

    /// Plays a square unless the active step is already decided.
    fn play(&mut self, index: usize) {
        let status = self.session.status();
        if status.is_over() {
            debug!(index, %status, "Game over, play ignored");
            return;
        }
        self.dispatch(Action::Play(index));
    }

    fn dispatch(&mut self, action: Action) {
        if let Err(e) = self.session.dispatch(action) {
            warn!(%action, error = %e, "Action failed");
        }
        self.select_current_step();
    }

    /// Points the history selection at the active step.
    fn select_current_step(&mut self) {
        let current = self.session.step_number();
        if let Some(row) = self
            .session
            .display_history()
            .iter()
            .position(|entry| entry.step_number == current)
        {
            self.selected = row;
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.session.history().len() - 1;
        self.selected = match key {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => (self.selected + 1).min(last),
            _ => self.selected,
        };
    }
}
