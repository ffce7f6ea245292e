use crate::config::AppConfig;
use crate::game::{Board, Game, Status, COLS, ROWS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    game: Game,
    config: AppConfig,
    cursor: (usize, usize),
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            game: Game::new(),
            config,
            cursor: (ROWS / 2, COLS / 2),
            should_quit: false,
            message: None,
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
        let poll_interval = Duration::from_millis(self.config.input.poll_interval_ms);
        if event::poll(poll_interval)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.cursor.0 = self.cursor.0.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.cursor.0 < ROWS - 1 {
                    self.cursor.0 += 1;
                }
            }
            KeyCode::Left => {
                self.cursor.1 = self.cursor.1.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.cursor.1 < COLS - 1 {
                    self.cursor.1 += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_marker();
            }
            KeyCode::Char('[') => {
                self.jump_relative(-1);
            }
            KeyCode::Char(']') => {
                self.jump_relative(1);
            }
            KeyCode::Home => {
                self.jump_absolute(0);
            }
            KeyCode::End => {
                self.jump_absolute(self.game.history().len() - 1);
            }
            KeyCode::Char('r') => {
                // Reset game
                self.game = Game::new();
                self.cursor = (ROWS / 2, COLS / 2);
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Place the active player's marker at the cursor
    fn place_marker(&mut self) {
        let (row, col) = self.cursor;
        let index = Board::index(row, col);

        match self.game.apply_move(index) {
            Ok(()) => {
                // Announce the result if this move just decided the game
                match self.game.current_view().status {
                    Status::Won(player) => {
                        self.message = Some(format!("{} wins!", player.name()));
                    }
                    Status::Draw => {
                        self.message = Some("It's a draw!".to_string());
                    }
                    Status::InProgress(_) => {}
                }
            }
            Err(err) => {
                self.message = Some(format!("{err}."));
            }
        }
    }

    /// Step backward or forward through the recorded history
    fn jump_relative(&mut self, delta: isize) {
        let target = self.game.step() as isize + delta;
        if target >= 0 {
            self.jump_absolute(target as usize);
        }
    }

    fn jump_absolute(&mut self, step: usize) {
        if self.game.jump_to(step).is_ok() && step < self.game.history().len() - 1 {
            self.message = Some(format!("Viewing move {step}. New moves rewrite history."));
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            &self.config.display,
            self.cursor,
            &self.message,
        );
    }
}
