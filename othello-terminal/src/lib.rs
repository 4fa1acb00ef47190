//! A thin terminal front end for two humans sharing one keyboard.
//!
//! All rules live in `othello_engine`; this crate only draws the board, reads
//! squares, and feeds them to [`Game::apply_move`](othello_engine::Game::apply_move).

pub mod connectors;

mod session;

pub use connectors::{Connector, TerminalConnector};
pub use session::Session;
