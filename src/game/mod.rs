//! Core game logic: board and cell model, gravity-based move application,
//! and four-directional exact-length line detection.

mod board;
mod cell;
mod engine;
mod player;

pub use board::{Board, BoardPoint, BoardPreset, LINE_LENGTH};
pub use cell::Cell;
pub use engine::{GameEngine, GameOutcome};
pub use player::Player;
