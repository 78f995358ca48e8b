use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::Backend, Terminal};

use crate::ai::{build_strategy, MoveStrategy};
use crate::config::AppConfig;
use crate::error::{ConfigError, GameError};
use crate::game::{BoardPoint, GameEngine, GameOutcome, Player};

/// Terminal application: the human plays as Player 1 against the
/// configured strategy.
pub struct App {
    engine: GameEngine,
    strategy: Box<dyn MoveStrategy>,
    current_player: Player,
    outcome: Option<GameOutcome>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    rng: StdRng,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let engine = GameEngine::new(config.preset()?);
        let strategy = build_strategy(&config.ai.strategy, config.ai.seed)?;
        let mut app = App {
            engine,
            strategy,
            current_player: Player::First,
            outcome: None,
            selected_column: 0,
            should_quit: false,
            message: None,
            rng: StdRng::from_os_rng(),
        };
        app.start_game();
        Ok(app)
    }

    /// Reset the board and roll for the starting side. If the AI starts,
    /// it moves immediately.
    fn start_game(&mut self) {
        self.engine.reset();
        self.outcome = None;
        self.selected_column = self.engine.board().columns() / 2;
        self.current_player = if self.rng.random_range(0..2) == 0 {
            Player::First
        } else {
            Player::Second
        };
        self.message = Some(format!("{} goes first!", self.current_player.name()));
        if self.current_player == Player::Second {
            self.ai_turn();
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.message = None;
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                self.message = None;
                if self.selected_column + 1 < self.engine.board().columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.start_game();
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column, then let the AI
    /// answer if the game continues.
    fn drop_piece(&mut self) {
        if self.outcome.is_some() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.engine.apply_move(self.selected_column, Player::First) {
            Ok(point) => {
                self.finish_move(point, Player::First);
                if self.outcome.is_none() {
                    self.current_player = Player::Second;
                    self.ai_turn();
                }
            }
            Err(GameError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// One AI move. A `None` column only happens on a full board, which
    /// evaluate_outcome has already reported as a draw.
    fn ai_turn(&mut self) {
        if let Some(column) = self.strategy.select_column(&mut self.engine, Player::Second) {
            if let Ok(point) = self.engine.apply_move(column, Player::Second) {
                self.finish_move(point, Player::Second);
            }
        }
        if self.outcome.is_none() {
            self.current_player = Player::First;
        }
    }

    /// Record the outcome of the move just played, if any.
    fn finish_move(&mut self, point: BoardPoint, player: Player) {
        self.outcome = self.engine.evaluate_outcome(point, player);
        if let Some(outcome) = self.outcome {
            self.message = Some(match outcome {
                GameOutcome::Winner(winner) => format!("{} wins!", winner.name()),
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            self.current_player,
            self.outcome,
            self.selected_column,
            self.strategy.name(),
            &self.message,
        );
    }
}
