//! Code for working with [`Location`]s and scan [`Direction`]s on the board.

use derive_more::{Display, Error, From, Into};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter, Write};

/// Column labels, in order. Also bounds the widest supported board.
pub(crate) const COLUMN_LABELS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A location on the board, as zero-based row and column coordinates.
///
/// A `Location` is not tied to a particular board size; whether it is on the
/// board is decided by [`Board::contains`](crate::Board::contains).
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, From, Into, Serialize, Deserialize,
)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Step once in `direction`. Returns None if that would leave the top or left edge;
    /// the bottom and right edges depend on the board and are checked there.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let row = offset(self.row, direction.d_row())?;
        let col = offset(self.col, direction.d_col())?;
        Some(Self { row, col })
    }
}

#[inline]
fn offset(coord: usize, delta: i8) -> Option<usize> {
    if delta < 0 {
        coord.checked_sub(delta.unsigned_abs() as usize)
    } else {
        coord.checked_add(delta as usize)
    }
}

/// Convert this [`Location`] into string notation ("D3" is row 2, column 3).
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match COLUMN_LABELS.chars().nth(self.col) {
            Some(col_str) => {
                f.write_char(col_str)?;
                write!(f, "{}", self.row + 1)
            }
            // Past the last letter: fall back to raw coordinates.
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("A4", "c12").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_LABELS.find(col_str).ok_or(ParseLocationError)?;

        let row_str = chars.as_str();
        if row_str.is_empty() || !row_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseLocationError);
        }
        let row: usize = row_str.parse().or(Err(ParseLocationError))?;
        if row == 0 {
            return Err(ParseLocationError);
        }

        Ok(Self::new(row - 1, col))
    }
}

/// One of the eight compass offsets used to scan outward from a square.
///
/// The constants below are the only values, so a scan always moves.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Direction {
    d_row: i8,
    d_col: i8,
}

impl Direction {
    pub const NORTH: Self = Self::new(-1, 0);
    pub const NORTH_EAST: Self = Self::new(-1, 1);
    pub const EAST: Self = Self::new(0, 1);
    pub const SOUTH_EAST: Self = Self::new(1, 1);
    pub const SOUTH: Self = Self::new(1, 0);
    pub const SOUTH_WEST: Self = Self::new(1, -1);
    pub const WEST: Self = Self::new(0, -1);
    pub const NORTH_WEST: Self = Self::new(-1, -1);

    /// Every scan direction, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::NORTH,
        Self::NORTH_EAST,
        Self::EAST,
        Self::SOUTH_EAST,
        Self::SOUTH,
        Self::SOUTH_WEST,
        Self::WEST,
        Self::NORTH_WEST,
    ];

    const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    /// Row offset: -1 is toward row 0.
    #[inline]
    pub const fn d_row(self) -> i8 {
        self.d_row
    }

    /// Column offset: -1 is toward column A.
    #[inline]
    pub const fn d_col(self) -> i8 {
        self.d_col
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match (self.d_row, self.d_col) {
            (-1, 0) => "N",
            (-1, 1) => "NE",
            (0, 1) => "E",
            (1, 1) => "SE",
            (1, 0) => "S",
            (1, -1) => "SW",
            (0, -1) => "W",
            (-1, -1) => "NW",
            _ => return Err(fmt::Error),
        };
        f.write_str(name)
    }
}
