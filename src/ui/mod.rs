//! Console front end for the Gomoku game
//!
//! Text rendering of the board plus a prompt-driven app that runs over any
//! `BufRead`/`Write` pair.

mod app;
mod board_view;

pub use app::{ConsoleApp, MenuChoice};
pub use board_view::render_board;
