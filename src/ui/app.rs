use crate::config::{validate_colors, AppConfig};
use crate::game::{GameController, Phase};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

use super::display::Display;
use super::setup_view::{self, SetupForm};

pub struct App {
    controller: GameController,
    display: Display,
    setup: SetupForm,
    width: usize,
    height: usize,
    selected_column: usize,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            controller: GameController::new(),
            display: Display::default(),
            setup: SetupForm::new(&config.players.first_color, &config.players.second_color),
            width: config.board.width,
            height: config.board.height,
            selected_column: config.board.width / 2,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::<io::Error>::into)?;

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
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.controller.phase() {
            Phase::Setup => self.handle_setup_key(key),
            _ => self.handle_game_key(key),
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.setup.toggle_focus();
            }
            KeyCode::Backspace => self.setup.backspace(),
            KeyCode::Enter => self.start_match(),
            KeyCode::Char(c) => self.setup.push(c),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        self.display.clear_notice();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < self.width {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Char('r') => {
                self.controller.restart(&mut self.display);
                self.selected_column = self.width / 2;
                self.display.set_notice("New game started!");
            }
            KeyCode::Char('n') => {
                debug!("returning to player setup");
                if let Some(game) = self.controller.game() {
                    let [first, second] = game.players();
                    self.setup = SetupForm::new(first.color(), second.color());
                }
                self.controller.reset_to_setup();
            }
            _ => {}
        }
    }

    /// Drop piece in selected column; ignored when the move is not legal
    fn drop_piece(&mut self) {
        self.controller
            .select_column(self.selected_column, &mut self.display);
    }

    fn start_match(&mut self) {
        let [first, second] = &self.setup.colors;
        if let Err(reason) = validate_colors(first, second) {
            self.setup.error = Some(reason);
            return;
        }

        let (first, second) = (first.trim().to_string(), second.trim().to_string());
        self.controller
            .start(&first, &second, self.width, self.height, &mut self.display);
        self.selected_column = self.width / 2;
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.controller.game() {
            Some(game) => {
                super::game_view::render(frame, game, self.selected_column, &self.display)
            }
            None => setup_view::render(frame, &self.setup),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
