//! Implements game-level Othello logic: turn order, forced passes, and scoring.
//!
//! [`Game`] is the only way to change a position. Callers read it through
//! [`Game::board`] and friends and drive it with [`Game::apply_move`].

use crate::{
    Board, BoardConfig, Cell, ConfigError, Location, MoveError, ParseGameError, ParsePlayerError,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Both players, in turn order.
    pub const BOTH: [Player; 2] = [Player::Black, Player::White];
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "#" | "x" => Ok(Player::Black),
            "white" | "w" | "o" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// Piece counts for both players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// Get one player's count.
    pub fn of(self, player: Player) -> usize {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Total number of occupied squares.
    pub fn occupied(self) -> usize {
        self.black + self.white
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black {} - {} White", self.black, self.white)
    }
}

/// Who is ahead on the board. Final once [`Game::is_game_over`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Win(Player),
    Tie,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win(player) => write!(f, "{} wins", player),
            GameResult::Tie => f.write_str("Tie"),
        }
    }
}

/// What a successful [`Game::apply_move`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A piece was placed at `at`, flipping `flipped` opponent pieces.
    Placed {
        at: Location,
        flipped: usize,
        score: Score,
    },
    /// `passer` had no legal move, so the turn went to the opponent untouched.
    Passed { passer: Player, score: Score },
}

impl MoveOutcome {
    /// The piece counts after the move.
    pub fn score(self) -> Score {
        match self {
            MoveOutcome::Placed { score, .. } | MoveOutcome::Passed { score, .. } => score,
        }
    }

    pub fn is_pass(self) -> bool {
        matches!(self, MoveOutcome::Passed { .. })
    }
}

/// The complete state of an Othello game: the board and the player to move.
///
/// Every mutation goes through [`Game::apply_move`]; the board is only handed out
/// by shared reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    active_player: Player,
}

impl Default for Game {
    /// The standard 8x8 opening with Black to move.
    fn default() -> Self {
        Self::from_position(Board::default(), Player::default())
    }
}

impl Game {
    /// A new game on the standard 8x8 board.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new game on a board of the configured size.
    pub fn with_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_position(Board::starting(config)?, Player::default()))
    }

    /// Resume from an arbitrary position. The board is taken as-is, so this can
    /// build positions that are unreachable in real play.
    pub fn from_position(board: Board, active_player: Player) -> Self {
        Self {
            board,
            active_player,
        }
    }

    /// Read-only view of the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    #[inline]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.cell(row, col)
    }

    /// Returns whether `player` could place a piece at (`row`, `col`).
    /// False for occupied or off-board squares.
    pub fn is_legal_move(&self, row: usize, col: usize, player: Player) -> bool {
        self.board.is_legal(Location::new(row, col), player)
    }

    /// Every legal placement for `player`, in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<Location> {
        self.board
            .locations()
            .filter(|&loc| self.board.is_legal(loc, player))
            .collect()
    }

    /// Returns whether `player` has a legal placement anywhere on the board.
    pub fn has_any_legal_move(&self, player: Player) -> bool {
        self.board
            .locations()
            .any(|loc| self.board.is_legal(loc, player))
    }

    /// Play the active player's turn at (`row`, `col`).
    ///
    /// If the active player has no legal move at all, the turn is passed and the
    /// coordinates are ignored. Otherwise the move must be legal; on error the
    /// game is left unchanged.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        if let Some(passed) = self.resolve_turn() {
            return Ok(passed);
        }
        self.place_piece(Location::new(row, col))
    }

    /// Force a pass if the active player cannot move.
    fn resolve_turn(&mut self) -> Option<MoveOutcome> {
        if self.has_any_legal_move(self.active_player) {
            return None;
        }

        let passer = self.active_player;
        self.active_player = !passer;
        debug!("{} has no legal move and passes", passer);

        Some(MoveOutcome::Passed {
            passer,
            score: self.score(),
        })
    }

    fn place_piece(&mut self, loc: Location) -> Result<MoveOutcome, MoveError> {
        let player = self.active_player;

        if !self.board.contains(loc) {
            debug!("{} tried off-board square {:?}", player, loc.to_coords());
            return Err(MoveError::OutOfBounds {
                row: loc.row,
                col: loc.col,
                rows: self.board.rows(),
                cols: self.board.cols(),
            });
        }
        if !self.board.is_legal(loc, player) {
            debug!("{} tried illegal move {}", player, loc);
            return Err(MoveError::InvalidMove {
                row: loc.row,
                col: loc.col,
            });
        }

        let flipped = self.board.flip_from(loc, player);
        self.board.set(loc, Cell::from(player));
        self.active_player = !player;
        debug!("{} plays {}, flipping {}", player, loc, flipped);

        Ok(MoveOutcome::Placed {
            at: loc,
            flipped,
            score: self.score(),
        })
    }

    /// Count the squares holding `player`'s pieces.
    pub fn cell_count(&self, player: Player) -> usize {
        self.board.count(Cell::from(player))
    }

    pub fn empty_count(&self) -> usize {
        self.board.count(Cell::Empty)
    }

    pub fn score(&self) -> Score {
        Score {
            black: self.cell_count(Player::Black),
            white: self.cell_count(Player::White),
        }
    }

    /// The game ends when neither player can place a piece.
    pub fn is_game_over(&self) -> bool {
        !Player::BOTH
            .iter()
            .any(|&player| self.has_any_legal_move(player))
    }

    /// Whoever has more pieces on the board, or a tie on equal counts.
    /// Only a final result once [`Game::is_game_over`] holds.
    pub fn winner(&self) -> GameResult {
        let score = self.score();
        if score.black > score.white {
            GameResult::Win(Player::Black)
        } else if score.white > score.black {
            GameResult::Win(Player::White)
        } else {
            GameResult::Tie
        }
    }

    /// Write the position as `<board notation> <player>`, readable by [`str::parse`].
    pub fn to_notation(&self) -> String {
        let player = match self.active_player {
            Player::Black => 'b',
            Player::White => 'w',
        };
        format!("{} {}", self.board.to_notation(), player)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} | {} to move", self.score(), self.active_player)
    }
}

/// Read a position written by [`Game::to_notation`].
impl std::str::FromStr for Game {
    type Err = ParseGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut sections = s.split_whitespace();
        let board: Board = sections.next().ok_or(ParseGameError::MissingBoard)?.parse()?;
        let player: Player = sections
            .next()
            .ok_or(ParseGameError::MissingPlayer)?
            .parse()?;

        if sections.next().is_some() {
            return Err(ParseGameError::TrailingInput);
        }

        Ok(Self::from_position(board, player))
    }
}
