//! Connectors are the ways a [`Session`](crate::Session) talks to the outside world.

mod connector;
mod terminal;

pub use connector::Connector;
pub use terminal::{parse_move, TerminalConnector};
