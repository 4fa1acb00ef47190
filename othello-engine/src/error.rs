//! Error types returned by the engine. None of them are fatal: every error is a
//! value handed back to the caller, and the game state is left untouched.

use derive_more::{Display, Error, From};

/// A rejected call to [`Game::apply_move`](crate::Game::apply_move).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square is on the board but placing there flips nothing (or it is occupied).
    #[display(fmt = "illegal move at row {}, column {}", row, col)]
    InvalidMove { row: usize, col: usize },

    /// The square is not on the board at all.
    #[display(
        fmt = "row {}, column {} is outside the {}x{} board",
        row,
        col,
        rows,
        cols
    )]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// A [`BoardConfig`](crate::BoardConfig) that cannot produce a playable board.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "board dimension {} is below the minimum of {}", _0, _1)]
    TooSmall(#[error(not(source))] usize, #[error(not(source))] usize),

    #[display(fmt = "board dimension {} is above the maximum of {}", _0, _1)]
    TooLarge(#[error(not(source))] usize, #[error(not(source))] usize),

    #[display(fmt = "board dimension {} must be even", _0)]
    OddDimension(#[error(not(source))] usize),

    #[display(fmt = "cannot parse board size {:?}", _0)]
    Parse(#[error(not(source))] String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "board has no rows")]
    Empty,

    #[display(fmt = "row {} has {} columns, expected {}", row, found, expected)]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[display(fmt = "unrecognized board character {:?}", _0)]
    BadCharacter(#[error(not(source))] char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

/// Failure to read a position written by [`Game::to_notation`](crate::Game::to_notation).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error, From)]
pub enum ParseGameError {
    #[display(fmt = "missing board")]
    #[from(ignore)]
    MissingBoard,

    #[display(fmt = "missing player to move")]
    #[from(ignore)]
    MissingPlayer,

    #[display(fmt = "unexpected trailing input")]
    #[from(ignore)]
    TrailingInput,

    #[display(fmt = "cannot parse board: {}", _0)]
    Board(ParseBoardError),

    #[display(fmt = "cannot parse player: {}", _0)]
    Player(ParsePlayerError),
}
