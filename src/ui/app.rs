use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

use crate::ai::{Agent, Difficulty};
use crate::config::{AppConfig, MAX_COLS, MAX_ROWS};
use crate::error::GameError;
use crate::game::{GameOutcome, GameState, Player, Rules, MIN_COLS, MIN_ROWS, MIN_WIN_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsAi,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::PlayerVsAi => "Player vs AI",
        }
    }
}

/// Field currently selected on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Rows,
    Cols,
    WinLength,
    Mode,
    Difficulty,
}

impl SetupField {
    const ORDER: [SetupField; 5] = [
        SetupField::Rows,
        SetupField::Cols,
        SetupField::WinLength,
        SetupField::Mode,
        SetupField::Difficulty,
    ];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|&f| f == self).unwrap();
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|&f| f == self).unwrap();
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Match settings being edited on the setup screen.
pub struct SetupForm {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub field: SetupField,
}

impl SetupForm {
    fn from_config(config: &AppConfig) -> Self {
        SetupForm {
            rows: config.board.rows,
            cols: config.board.cols,
            win_length: config.board.win_length,
            mode: GameMode::PlayerVsAi,
            difficulty: config.game.difficulty,
            field: SetupField::Rows,
        }
    }

    pub fn max_win_length(&self) -> usize {
        self.rows.min(self.cols)
    }

    fn adjust(&mut self, delta: i32) {
        let up = delta > 0;
        match self.field {
            SetupField::Rows => {
                self.rows = step(self.rows, up, MIN_ROWS, MAX_ROWS);
            }
            SetupField::Cols => {
                self.cols = step(self.cols, up, MIN_COLS, MAX_COLS);
            }
            SetupField::WinLength => {
                self.win_length = step(self.win_length, up, MIN_WIN_LENGTH, self.max_win_length());
            }
            SetupField::Mode => {
                self.mode = match self.mode {
                    GameMode::PlayerVsPlayer => GameMode::PlayerVsAi,
                    GameMode::PlayerVsAi => GameMode::PlayerVsPlayer,
                };
            }
            SetupField::Difficulty => {
                self.difficulty = match self.difficulty {
                    Difficulty::Easy => Difficulty::Hard,
                    Difficulty::Hard => Difficulty::Easy,
                };
            }
        }
        // Shrinking the board can invalidate the win length
        self.win_length = self.win_length.clamp(MIN_WIN_LENGTH, self.max_win_length());
    }
}

fn step(value: usize, up: bool, min: usize, max: usize) -> usize {
    if up {
        (value + 1).min(max)
    } else {
        value.saturating_sub(1).max(min)
    }
}

/// One match in play, driven by the game view.
pub struct Match {
    pub state: GameState,
    pub mode: GameMode,
    pub selected_column: usize,
    pub message: Option<String>,
    agent: Option<Box<dyn Agent>>,
}

enum Screen {
    Setup(SetupForm),
    Playing(Match),
}

pub struct App {
    screen: Screen,
    config: AppConfig,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            screen: Screen::Setup(SetupForm::from_config(&config)),
            config,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }
        match &mut self.screen {
            Screen::Setup(_) => self.handle_setup_key(key),
            Screen::Playing(_) => self.handle_game_key(key),
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        let Screen::Setup(form) = &mut self.screen else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => form.field = form.field.prev(),
            KeyCode::Down => form.field = form.field.next(),
            KeyCode::Left => form.adjust(-1),
            KeyCode::Right => form.adjust(1),
            KeyCode::Enter => self.start_match(),
            _ => {}
        }
    }

    fn start_match(&mut self) {
        let Screen::Setup(form) = &self.screen else {
            return;
        };
        // Unreachable with a clamped form, but fail soft if it happens
        let Ok(rules) = Rules::new(form.rows, form.cols, form.win_length) else {
            return;
        };
        let mode = form.mode;
        let agent = match mode {
            GameMode::PlayerVsAi => Some(form.difficulty.agent()),
            GameMode::PlayerVsPlayer => None,
        };
        self.screen = Screen::Playing(Match {
            state: GameState::new(rules),
            mode,
            selected_column: rules.cols() / 2,
            message: None,
            agent,
        });
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };
        game.message = None;

        match key.code {
            KeyCode::Esc | KeyCode::Char('r') => {
                // Back to setup for a new match with fresh settings
                self.screen = Screen::Setup(SetupForm::from_config(&self.config));
            }
            KeyCode::Left => {
                if game.selected_column > 0 {
                    game.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if game.selected_column + 1 < game.state.board().cols() {
                    game.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                Self::drop_piece(game);
            }
            _ => {}
        }
    }

    /// Apply the human move at the selected column, then let the AI answer
    /// if it is playing and the game continues.
    fn drop_piece(game: &mut Match) {
        if game.state.is_terminal() {
            game.message = Some("Game over! Press 'r' for a new game.".to_string());
            return;
        }

        match game.state.apply_move_mut(game.selected_column) {
            Ok(()) => {}
            Err(GameError::ColumnFull(_)) => {
                game.message = Some("Column is full!".to_string());
                return;
            }
            Err(err) => {
                game.message = Some(err.to_string());
                return;
            }
        }

        if !game.state.is_terminal() {
            if let Some(agent) = &mut game.agent {
                if let Some(col) = agent.select_column(&game.state) {
                    // Agents only pick available columns
                    let _ = game.state.apply_move_mut(col);
                }
            }
        }

        if let Some(outcome) = game.state.outcome() {
            game.message = Some(match outcome {
                GameOutcome::Winner(player) => Self::winner_message(game, player),
                GameOutcome::Draw => "It's a draw! The board is full.".to_string(),
            });
        }
    }

    fn winner_message(game: &Match, player: Player) -> String {
        match game.mode {
            GameMode::PlayerVsAi if player == Player::Cross => {
                format!("The AI ({}) wins!", player.symbol())
            }
            _ => format!("{} ({}) wins!", player.name(), player.symbol()),
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        match &self.screen {
            Screen::Setup(form) => super::setup_view::render(frame, form),
            Screen::Playing(game) => super::game_view::render(frame, game),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_setup_adjust_clamps_ranges() {
        let mut form = SetupForm::from_config(&AppConfig::default());
        form.field = SetupField::Rows;
        form.adjust(-1);
        assert_eq!(form.rows, 6); // already at the minimum

        for _ in 0..40 {
            form.adjust(1);
        }
        assert_eq!(form.rows, MAX_ROWS);
    }

    #[test]
    fn test_setup_shrinking_board_clamps_win_length() {
        let mut form = SetupForm::from_config(&AppConfig::default());
        form.rows = 10;
        form.cols = 10;
        form.win_length = 10;
        form.field = SetupField::Rows;
        form.adjust(-1);
        assert_eq!(form.rows, 9);
        assert_eq!(form.win_length, 9);
    }

    #[test]
    fn test_enter_starts_match_and_r_returns_to_setup() {
        let mut app = App::new(AppConfig::default());
        app.handle_key(key(KeyCode::Enter));
        assert!(matches!(app.screen, Screen::Playing(_)));

        app.handle_key(key(KeyCode::Char('r')));
        assert!(matches!(app.screen, Screen::Setup(_)));
    }

    #[test]
    fn test_human_drop_triggers_ai_reply() {
        let mut app = App::new(AppConfig::default());
        app.handle_key(key(KeyCode::Enter)); // start (Player vs AI by default)
        app.handle_key(key(KeyCode::Enter)); // drop at center column

        let Screen::Playing(game) = &app.screen else {
            panic!("expected a running match");
        };
        // Two pieces on the board: the human's and the AI's answer
        let pieces = (0..6)
            .flat_map(|r| (0..7).map(move |c| (r, c)))
            .filter(|&(r, c)| game.state.board().get(r, c) != crate::game::Cell::Empty)
            .count();
        assert_eq!(pieces, 2);
        assert_eq!(game.state.current_player(), Player::Circle);
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new(AppConfig::default());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = App::new(AppConfig::default());
        app.handle_key(key(KeyCode::Enter));
        for _ in 0..20 {
            app.handle_key(key(KeyCode::Right));
        }
        let Screen::Playing(game) = &app.screen else {
            panic!("expected a running match");
        };
        assert_eq!(game.selected_column, 6);
    }
}
