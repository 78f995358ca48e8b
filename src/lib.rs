//! # Connect Four
//!
//! A Connect Four variant with three board presets (normal 7x6, big 9x7,
//! small 5x4), a terminal front-end, and two AI opponents. The core is the
//! rules engine in [`game`]: gravity-based move application and exact
//! four-in-a-row detection scanning outward from the last placed piece.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board/cell model, move application, win
//!   and draw detection, snapshot/restore simulation support
//! - [`ai`] — Move-selection strategies: uniform random and win-or-block
//! - [`ui`] — Terminal UI built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
