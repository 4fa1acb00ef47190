//! Utilities for loading annotated test positions.
//!
//! Each non-empty line holds `<board notation> <player to move> <legal move count>`,
//! and `;` starts a comment.

use crate::{Game, ParseGameError};
use derive_more::{Display, Error, From};
use std::fs;
use std::io;
use std::path::Path;

/// A single annotated position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixturePosition {
    pub game: Game,
    pub legal_moves: usize,
}

#[derive(Debug, Display, Error, From)]
pub enum LoadPositionError {
    #[display(fmt = "cannot read position file: {}", _0)]
    CannotReadFile(io::Error),

    #[display(fmt = "cannot parse position: {}", _0)]
    CannotParseGame(ParseGameError),

    #[display(fmt = "missing legal move count")]
    #[from(ignore)]
    MissingMoveCount,

    #[display(fmt = "cannot parse legal move count")]
    #[from(ignore)]
    CannotParseMoveCount,
}

/// Load all of the [`FixturePosition`]s in the file at `path`.
pub fn load_positions<P: AsRef<Path>>(path: P) -> Result<Vec<FixturePosition>, LoadPositionError> {
    parse_positions(&fs::read_to_string(path)?)
}

/// Parse every position line in `text`.
pub fn parse_positions(text: &str) -> Result<Vec<FixturePosition>, LoadPositionError> {
    text.lines()
        .map(|line| line.split(';').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(str::parse)
        .collect()
}

impl std::str::FromStr for FixturePosition {
    type Err = LoadPositionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (position, count) = line
            .trim()
            .rsplit_once(char::is_whitespace)
            .ok_or(LoadPositionError::MissingMoveCount)?;

        let legal_moves = count
            .parse()
            .or(Err(LoadPositionError::CannotParseMoveCount))?;
        let game = position.parse()?;

        Ok(Self { game, legal_moves })
    }
}
