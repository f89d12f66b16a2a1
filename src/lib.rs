//! # Connect Four
//!
//! A two-player Connect Four game played in the terminal. The game engine is
//! independent of the UI: the UI forwards column selections to a
//! [`game::GameController`] and draws what it is told through the
//! [`game::Renderer`] trait.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, controller
//! - [`ui`] — Terminal UI: setup form, game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
