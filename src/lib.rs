//! # Connect Four Replay
//!
//! A two-player Connect Four variant where a marker may be placed in
//! any empty cell, with a full "time machine": every move appends an
//! immutable snapshot, and any past snapshot can be revisited and
//! played from (discarding the abandoned future). Ships with a
//! terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, and
//!   the history-keeping engine
//! - [`ui`] — Terminal UI: board view and history panel
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
