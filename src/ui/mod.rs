//! Terminal UI: a setup screen for choosing player colors and a game view
//! that renders whatever the controller reports.

mod app;
pub mod board_widget;
mod display;
mod game_view;
mod setup_view;

pub use app::App;
pub use display::Display;
