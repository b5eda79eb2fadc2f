//! Application state and key handling.

use crate::config::TuiConfig;
use crate::input;
use crossterm::event::KeyCode;
use strictly_rewind::{GameSession, MoveControl, MoveDescriptor, PlayOutcome, Position, SortOrder};
use tracing::{debug, info, instrument, warn};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board selector.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    selector: Position,
    sort_order: SortOrder,
    highlight_winning_line: bool,
    focus: Focus,
    move_selection: usize,
    message: Option<String>,
}

impl App {
    /// Creates a new application with a fresh session.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            session: GameSession::new(),
            selector: Position::Center,
            sort_order: *config.sort_order(),
            highlight_winning_line: *config.highlight_winning_line(),
            focus: Focus::Board,
            move_selection: 0,
            message: None,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Highlighted board square.
    pub fn selector(&self) -> Position {
        self.selector
    }

    /// Current move list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Whether the winning line is highlighted.
    pub fn highlight_winning_line(&self) -> bool {
        self.highlight_winning_line
    }

    /// Panel receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Row of the move list highlighted while it has focus.
    pub fn move_selection(&self) -> usize {
        self.move_selection
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Move list in display order.
    pub fn moves(&self) -> Vec<MoveDescriptor> {
        self.session.move_list(self.sort_order)
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Esc if self.focus == Focus::Board => return AppAction::Quit,
            KeyCode::Esc | KeyCode::Tab => self.switch_focus(),
            KeyCode::Char('s') => self.toggle_sort(),
            KeyCode::Char('n') => self.restart(),
            KeyCode::Char('[') => self.step(-1),
            KeyCode::Char(']') => self.step(1),
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.session.len() - 1),
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.selector),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.selector = input::move_selector(self.selector, key);
            }
            other => {
                if let Some(position) = input::digit_position(other) {
                    self.selector = position;
                    self.play(position);
                }
            }
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.move_selection = self.move_selection.saturating_sub(1),
            KeyCode::Down => {
                self.move_selection = (self.move_selection + 1).min(self.session.len() - 1);
            }
            KeyCode::Enter => {
                let control = self
                    .moves()
                    .get(self.move_selection)
                    .map(MoveDescriptor::control);
                if let Some(MoveControl::Jump(move_index)) = control {
                    self.jump(move_index);
                }
            }
            _ => {}
        }
    }

    fn play(&mut self, position: Position) {
        match self.session.play(position) {
            PlayOutcome::Placed { discarded, .. } if discarded > 0 => {
                self.message = Some(format!("Discarded {} later move(s)", discarded));
            }
            PlayOutcome::Placed { .. } => self.message = None,
            PlayOutcome::Ignored(reason) => self.message = Some(reason.to_string()),
        }
        self.sync_move_selection();
    }

    fn jump(&mut self, move_index: usize) {
        match self.session.jump_to(move_index) {
            Ok(()) => self.message = None,
            Err(e) => {
                warn!(error = %e, "Jump failed");
                self.message = Some(e.to_string());
            }
        }
        self.sync_move_selection();
    }

    fn step(&mut self, delta: isize) {
        let target = self.session.cursor().checked_add_signed(delta);
        match target {
            Some(move_index) if move_index < self.session.len() => self.jump(move_index),
            _ => debug!(delta, "Step past end of history"),
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        };
        self.sync_move_selection();
    }

    fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        info!(sort_order = ?self.sort_order, "Toggled move order");
        self.sync_move_selection();
    }

    fn restart(&mut self) {
        info!("Restarting game");
        self.session = GameSession::new();
        self.message = Some("New game".to_string());
        self.sync_move_selection();
    }

    /// Points the move list highlight at the displayed move.
    fn sync_move_selection(&mut self) {
        let cursor = self.session.cursor();
        self.move_selection = match self.sort_order {
            SortOrder::Ascending => cursor,
            SortOrder::Descending => self.session.len() - 1 - cursor,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    #[test]
    fn test_digit_plays_square() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));

        assert_eq!(app.session().cursor(), 1);
        assert_eq!(app.selector(), Position::Center);
    }

    #[test]
    fn test_occupied_square_sets_message() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));

        assert_eq!(app.session().len(), 2);
        assert_eq!(app.message(), Some("Square Center is already occupied"));
    }

    #[test]
    fn test_steps_clamp_to_history() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('2'));

        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.session().cursor(), 2);

        app.handle_key(KeyCode::Char('['));
        app.handle_key(KeyCode::Char('['));
        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.session().cursor(), 0);

        app.handle_key(KeyCode::End);
        assert_eq!(app.session().cursor(), 2);
    }

    #[test]
    fn test_escape_leaves_move_list_before_quitting() {
        let mut app = app();
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Moves);

        assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Continue);
        assert_eq!(app.focus(), Focus::Board);
        assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Quit);
    }
}
