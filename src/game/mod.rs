//! Core game logic: board representation, player identity, win
//! detection, and the history-keeping game engine with time travel.

mod board;
mod engine;
mod player;
mod referee;

pub use board::{Board, Cell, CELLS, COLS, ROWS, WIN_LENGTH};
pub use engine::{Game, GameView, Move, Snapshot, Status};
pub use player::Player;
pub use referee::{evaluate, Verdict};
