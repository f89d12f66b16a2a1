use tracing::{debug, info};

use super::player::Player;
use super::state::{GameState, GameStatus, MoveOutcome, Placement};

/// Display side of a match. The controller calls these after each state
/// change; implementors only draw.
pub trait Renderer {
    fn place_piece(&mut self, player: &Player, placement: Placement);
    fn announce_end(&mut self, message: &str);
    fn clear_board(&mut self);
}

/// Where the match lifecycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    InProgress,
    Won,
    Draw,
}

/// Owns the active match, if any. `None` means the players are still being
/// chosen.
#[derive(Debug, Default)]
pub struct GameController {
    game: Option<GameState>,
}

impl GameController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn phase(&self) -> Phase {
        match self.game.as_ref().map(GameState::status) {
            None => Phase::Setup,
            Some(GameStatus::InProgress) => Phase::InProgress,
            Some(GameStatus::Won(_)) => Phase::Won,
            Some(GameStatus::Draw) => Phase::Draw,
        }
    }

    /// Begin a new match, replacing whatever was being played
    pub fn start<R: Renderer>(
        &mut self,
        first_color: &str,
        second_color: &str,
        width: usize,
        height: usize,
        renderer: &mut R,
    ) {
        info!(first_color, second_color, width, height, "starting match");
        self.game = Some(GameState::new(first_color, second_color, width, height));
        renderer.clear_board();
    }

    /// Handle a column selection from the UI. Invalid moves are ignored.
    pub fn select_column<R: Renderer>(&mut self, col: usize, renderer: &mut R) -> Option<MoveOutcome> {
        let game = self.game.as_mut()?;
        let outcome = match game.apply_move(col) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(col, %err, "move ignored");
                return None;
            }
        };

        let mover = game.player(outcome.seat);
        renderer.place_piece(mover, outcome.placement);

        match outcome.status {
            GameStatus::Won(_) => {
                info!(winner = mover.color(), "game won");
                renderer.announce_end(&format!("{mover} won!"));
            }
            GameStatus::Draw => {
                info!("game drawn");
                renderer.announce_end("Tie!");
            }
            GameStatus::InProgress => {}
        }

        Some(outcome)
    }

    /// Replay with the same players. Does nothing before a match has started.
    pub fn restart<R: Renderer>(&mut self, renderer: &mut R) {
        if let Some(game) = self.game.as_mut() {
            info!("restarting match");
            game.restart();
            renderer.clear_board();
        }
    }

    /// Drop the current match and go back to choosing players
    pub fn reset_to_setup(&mut self) {
        self.game = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Seat;

    #[derive(Debug, Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Renderer for Recorder {
        fn place_piece(&mut self, player: &Player, placement: Placement) {
            self.events
                .push(format!("place {} {},{}", player.color(), placement.row, placement.col));
        }

        fn announce_end(&mut self, message: &str) {
            self.events.push(format!("end {message}"));
        }

        fn clear_board(&mut self) {
            self.events.push("clear".to_string());
        }
    }

    fn started() -> (GameController, Recorder) {
        let mut controller = GameController::new();
        let mut recorder = Recorder::default();
        controller.start("red", "yellow", 7, 6, &mut recorder);
        recorder.events.clear();
        (controller, recorder)
    }

    #[test]
    fn test_setup_ignores_moves() {
        let mut controller = GameController::new();
        let mut recorder = Recorder::default();
        assert_eq!(controller.phase(), Phase::Setup);
        assert!(controller.select_column(0, &mut recorder).is_none());
        controller.restart(&mut recorder);
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn test_start_clears_display() {
        let mut controller = GameController::new();
        let mut recorder = Recorder::default();
        controller.start("red", "yellow", 7, 6, &mut recorder);
        assert_eq!(controller.phase(), Phase::InProgress);
        assert_eq!(recorder.events, vec!["clear"]);
    }

    #[test]
    fn test_move_renders_piece() {
        let (mut controller, mut recorder) = started();
        let outcome = controller.select_column(2, &mut recorder).unwrap();
        assert_eq!(outcome.placement, Placement { row: 5, col: 2 });
        assert_eq!(recorder.events, vec!["place red 5,2"]);
    }

    #[test]
    fn test_win_is_announced_and_further_moves_ignored() {
        let (mut controller, mut recorder) = started();
        for col in [0, 0, 1, 1, 2, 2, 3] {
            controller.select_column(col, &mut recorder);
        }
        assert_eq!(controller.phase(), Phase::Won);
        assert_eq!(recorder.events.last().unwrap(), "end Player red won!");

        let count = recorder.events.len();
        assert!(controller.select_column(4, &mut recorder).is_none());
        assert_eq!(recorder.events.len(), count);
        assert_eq!(
            controller.game().unwrap().current_player().seat(),
            Seat::First
        );
    }

    #[test]
    fn test_draw_is_announced_as_tie() {
        let mut controller = GameController::new();
        let mut recorder = Recorder::default();
        // 4x1 board: no line of four can fit alternating pieces.
        controller.start("red", "yellow", 4, 1, &mut recorder);
        for col in 0..4 {
            controller.select_column(col, &mut recorder);
        }
        assert_eq!(controller.phase(), Phase::Draw);
        assert_eq!(recorder.events.last().unwrap(), "end Tie!");
    }

    #[test]
    fn test_full_column_is_silently_ignored() {
        let mut controller = GameController::new();
        let mut recorder = Recorder::default();
        controller.start("red", "yellow", 3, 2, &mut recorder);
        controller.select_column(1, &mut recorder);
        controller.select_column(1, &mut recorder);
        let count = recorder.events.len();

        assert!(controller.select_column(1, &mut recorder).is_none());
        assert!(controller.select_column(9, &mut recorder).is_none());
        assert_eq!(recorder.events.len(), count);
        assert_eq!(
            controller.game().unwrap().current_player().color(),
            "red"
        );
    }

    #[test]
    fn test_restart_after_win() {
        let (mut controller, mut recorder) = started();
        for col in [0, 0, 1, 1, 2, 2, 3] {
            controller.select_column(col, &mut recorder);
        }
        recorder.events.clear();

        controller.restart(&mut recorder);

        assert_eq!(controller.phase(), Phase::InProgress);
        assert_eq!(recorder.events, vec!["clear"]);
        let game = controller.game().unwrap();
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.current_player().color(), "red");
        assert_eq!(game.player(Seat::Second).color(), "yellow");
    }

    #[test]
    fn test_reset_to_setup_then_new_players() {
        let (mut controller, mut recorder) = started();
        controller.select_column(0, &mut recorder);
        controller.reset_to_setup();
        assert_eq!(controller.phase(), Phase::Setup);

        controller.start("blue", "green", 7, 6, &mut recorder);
        let game = controller.game().unwrap();
        assert_eq!(game.current_player().color(), "blue");
        assert_eq!(game.board().occupied_count(), 0);
    }
}
