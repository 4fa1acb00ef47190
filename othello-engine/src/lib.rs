//! `othello-engine` is a small, safe Othello (Reversi) rules engine for UIs and tests.
//!
//! The crate is split into a few layers:
//!
//!  - [`Board`] is a dimension-agnostic grid of [`Cell`]s. It knows how to scan a
//!    direction from a candidate square and flip the captured run, but has no notion
//!    of whose turn it is.
//!  - [`Game`] owns a [`Board`] plus the active [`Player`] and is the only way to
//!    mutate a game: every move goes through [`Game::apply_move`].
//!  - [`BoardConfig`] selects the grid dimensions; the default is the standard 8x8 board.
//!
//! All operations are synchronous and bounded by the number of squares on the board.

pub mod test_utils;

mod board;
mod config;
mod error;
mod game;
mod location;
mod utils;

pub use board::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of a standard Othello board.
pub const EDGE_LENGTH: usize = 8;
