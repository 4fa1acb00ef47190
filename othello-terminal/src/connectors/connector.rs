use othello_engine::{Game, GameResult, Location, MoveError, MoveOutcome, Score};
use std::io;

/// A player-facing abstract interface to a way of playing Othello with "the outside world."
///
/// A connector never changes the game itself: it shows state and collects squares,
/// and the [`Session`](crate::Session) applies them.
pub trait Connector {
    /// Redraw the whole game: board, legal-move hints, scores and the player to move.
    fn render(&mut self, game: &Game) -> io::Result<()>;

    /// Ask the active player for a square. `Ok(None)` means they want to stop playing.
    ///
    /// When the active player has no legal move, any square will do: the engine
    /// passes the turn and ignores it.
    fn request_move(&mut self, game: &Game) -> io::Result<Option<Location>>;

    /// Tell the players what the last accepted move did. `game` is the state after it.
    fn report_outcome(&mut self, game: &Game, outcome: MoveOutcome) -> io::Result<()>;

    /// Tell the active player their square was refused.
    fn report_rejected(&mut self, game: &Game, error: MoveError) -> io::Result<()>;

    /// Show the final result once neither player can move.
    fn announce_result(&mut self, result: GameResult, score: Score) -> io::Result<()>;
}
