//! Terminal UI: cursor-driven board for placing markers, plus the
//! time-machine panel for jumping to any recorded snapshot.

mod app;
mod game_view;

pub use app::App;
