//! Core Connect Four game logic: board representation, players, win
//! detection, the per-match state machine and the controller that drives it.

mod board;
mod controller;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use controller::{GameController, Phase, Renderer};
pub use player::{Player, Seat};
pub use state::{GameState, GameStatus, MoveOutcome, Placement};
