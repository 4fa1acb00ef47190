//! The board grid and the direction scan at the heart of Othello.
//!
//! A [`Board`] has no notion of whose turn it is: every query takes the [`Player`]
//! it should be evaluated for. Turn order lives in [`Game`](crate::Game).
//! By convention, row 0 is the top of the board, and cells are stored in row-major order.

use crate::{utils, BoardConfig, ConfigError, Direction, Location, ParseBoardError, Player};
use log::trace;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::ops::Index;

/// The occupant of a single square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// The character used for this cell in board notation.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => '#',
            Cell::White => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            '#' | 'X' | 'x' => Some(Cell::Black),
            'O' | 'o' => Some(Cell::White),
            _ => None,
        }
    }

    /// Get the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    /// Swap Black and White; Empty stays Empty.
    pub fn swapped(self) -> Self {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Black => Cell::White,
            Cell::White => Cell::Black,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// A fixed-size grid of [`Cell`]s.
///
/// Serializes as its compact notation (see [`Board::to_notation`]) so that a
/// deserialized board always has consistent dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// An empty board. `rows` and `cols` are not validated; see [`BoardConfig::validate`].
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// The opening position: a 2x2 block in the centre, White on the NW-SE
    /// diagonal and Black on the NE-SW diagonal.
    pub fn starting(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::opening(config.rows, config.cols))
    }

    /// Place the starting block. Both edges must be at least 2.
    fn opening(rows: usize, cols: usize) -> Self {
        let mut board = Self::empty(rows, cols);
        let (top, left) = (rows / 2 - 1, cols / 2 - 1);

        board.set(Location::new(top, left), Cell::White);
        board.set(Location::new(top + 1, left + 1), Cell::White);
        board.set(Location::new(top, left + 1), Cell::Black);
        board.set(Location::new(top + 1, left), Cell::Black);
        board
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The dimensions of this board.
    pub fn config(&self) -> BoardConfig {
        BoardConfig::square(self.rows).with_cols(self.cols)
    }

    /// Returns whether `loc` is on the board.
    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        loc.row < self.rows && loc.col < self.cols
    }

    /// Get the cell at `loc`, or None if it is off the board.
    #[inline]
    pub fn get(&self, loc: Location) -> Option<Cell> {
        if self.contains(loc) {
            Some(self.cells[self.index_of(loc)])
        } else {
            None
        }
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.get(Location::new(row, col))
    }

    /// Count the cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Every location on the board, in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let cols = self.cols;
        (0..self.cells.len()).map(move |i| Location::new(i / cols, i % cols))
    }

    /// Every (location, cell) pair, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        self.locations().zip(self.cells.iter().copied())
    }

    /// A copy of this board with Black and White exchanged.
    pub fn swap_colors(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|c| c.swapped()).collect(),
        }
    }

    /// The adjacent location in `direction`, if it is on the board.
    #[inline]
    pub fn neighbor(&self, loc: Location, direction: Direction) -> Option<Location> {
        loc.step(direction).filter(|&next| self.contains(next))
    }

    /// Scan outward from `loc` in `direction` for a run of `player`'s opponent
    /// capped by one of `player`'s pieces.
    ///
    /// Returns the length of the run (at least 1) if the direction is valid.
    /// Running off the board or hitting an empty cell invalidates the direction.
    /// The cell at `loc` itself is not inspected.
    pub fn flank_length(&self, loc: Location, direction: Direction, player: Player) -> Option<usize> {
        let own = Cell::from(player);
        let opponent = Cell::from(!player);

        let mut run = 0;
        let mut cursor = self.neighbor(loc, direction);
        while let Some(next) = cursor {
            let cell = self[next];
            if cell == opponent {
                run += 1;
                cursor = self.neighbor(next, direction);
            } else if cell == own && run > 0 {
                return Some(run);
            } else {
                return None;
            }
        }
        None
    }

    /// Returns whether `player` may place a piece at `loc`: the cell must be
    /// empty and at least one direction must flank opponent pieces.
    pub fn is_legal(&self, loc: Location, player: Player) -> bool {
        self.get(loc) == Some(Cell::Empty)
            && Direction::ALL
                .iter()
                .any(|&direction| self.flank_length(loc, direction, player).is_some())
    }

    /// Flip every run flanked from `loc` to `player`'s color.
    /// Does not place the piece at `loc` itself. Returns the number of flipped cells.
    pub(crate) fn flip_from(&mut self, loc: Location, player: Player) -> usize {
        let own = Cell::from(player);
        let mut flipped = 0;

        for &direction in Direction::ALL.iter() {
            let run = match self.flank_length(loc, direction, player) {
                Some(run) => run,
                None => continue,
            };
            trace!("{} flips {} toward {} from {}", player, run, direction, loc);

            let mut cursor = loc;
            for _ in 0..run {
                cursor = match self.neighbor(cursor, direction) {
                    Some(next) => next,
                    None => break,
                };
                self.set(cursor, own);
            }
            flipped += run;
        }

        flipped
    }

    #[inline]
    pub(crate) fn set(&mut self, loc: Location, cell: Cell) {
        let index = self.index_of(loc);
        self.cells[index] = cell;
    }

    #[inline]
    fn index_of(&self, loc: Location) -> usize {
        loc.row * self.cols + loc.col
    }

    /// Write the board compactly: one character per cell, rows separated by `/`.
    pub fn to_notation(&self) -> String {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.iter().map(|c| c.to_char()).collect::<String>())
            .collect::<Vec<String>>()
            .join("/")
    }

    /// Render the board as a grid, choosing each square's character with `glyph`.
    pub fn render<F>(&self, glyph: F) -> String
    where
        F: Fn(Location, Cell) -> char,
    {
        Render { board: self, glyph }.to_string()
    }
}

impl Default for Board {
    /// The standard 8x8 opening position.
    fn default() -> Self {
        let config = BoardConfig::default();
        Self::opening(config.rows, config.cols)
    }
}

impl Index<Location> for Board {
    type Output = Cell;

    /// Panics if `loc` is off the board; use [`Board::get`] for checked access.
    fn index(&self, loc: Location) -> &Cell {
        assert!(self.contains(loc), "{:?} is off the board", loc);
        &self.cells[self.index_of(loc)]
    }
}

struct Render<'a, F> {
    board: &'a Board,
    glyph: F,
}

impl<'a, F> Display for Render<'a, F>
where
    F: Fn(Location, Cell) -> char,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.board.rows,
            self.board.cols,
            self.board.iter().map(|(loc, cell)| (self.glyph)(loc, cell)),
            f,
        )
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.rows,
            self.cols,
            self.cells.iter().map(|c| c.to_char()),
            f,
        )
    }
}

/// Read a board from compact notation. Rows may be separated by `/` or newlines,
/// and every row must have the same length.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        let cols = rows.first().ok_or(ParseBoardError::Empty)?.chars().count();
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (row, row_str) in rows.iter().enumerate() {
            let found = row_str.chars().count();
            if found != cols {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    found,
                    expected: cols,
                });
            }
            for c in row_str.chars() {
                cells.push(Cell::from_char(c).ok_or(ParseBoardError::BadCharacter(c))?);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_notation()
    }
}

impl TryFrom<String> for Board {
    type Error = ParseBoardError;

    fn try_from(notation: String) -> Result<Self, Self::Error> {
        notation.parse()
    }
}
