//! Board size configuration.

use crate::location::COLUMN_LABELS;
use crate::{ConfigError, EDGE_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dimensions of the board a [`Game`](crate::Game) is played on.
///
/// The default is the standard 8x8 board. Other sizes must be even in both
/// dimensions so the four starting pieces sit exactly in the centre.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl BoardConfig {
    /// Smallest edge that leaves room around the starting block.
    pub const MIN_EDGE: usize = 4;

    /// Largest edge that still has a column letter.
    pub const MAX_EDGE: usize = COLUMN_LABELS.len();

    /// A square board with `edge` rows and columns.
    #[must_use]
    pub const fn square(edge: usize) -> Self {
        Self {
            rows: edge,
            cols: edge,
        }
    }

    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Check that both dimensions describe a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for &edge in [self.rows, self.cols].iter() {
            if edge < Self::MIN_EDGE {
                return Err(ConfigError::TooSmall(edge, Self::MIN_EDGE));
            }
            if edge > Self::MAX_EDGE {
                return Err(ConfigError::TooLarge(edge, Self::MAX_EDGE));
            }
            if edge % 2 != 0 {
                return Err(ConfigError::OddDimension(edge));
            }
        }
        Ok(())
    }

    /// Total number of squares.
    #[inline]
    pub fn num_spaces(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::square(EDGE_LENGTH)
    }
}

impl fmt::Display for BoardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Parse a size written as `"8"` (square) or `"6x10"` (rows x columns).
/// The result is validated.
impl std::str::FromStr for BoardConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_edge = |edge: &str| {
            edge.trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::Parse(s.to_string()))
        };

        let lowered = s.trim().to_ascii_lowercase();
        let config = match lowered.split_once('x') {
            Some((rows, cols)) => Self {
                rows: parse_edge(rows)?,
                cols: parse_edge(cols)?,
            },
            None => Self::square(parse_edge(&lowered)?),
        };

        config.validate()?;
        Ok(config)
    }
}
