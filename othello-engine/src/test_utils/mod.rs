//! Utilities used for testing and benchmarking.

pub mod positions;

mod perft;
pub use perft::run_perft;

mod replay;
pub use replay::{play_sequence, playout, replay_locations};
