//! [`Connector`] for two people playing at one terminal.

use super::Connector;
use othello_engine::{
    Cell, Game, GameResult, Location, MoveError, MoveOutcome, ParseLocationError, Player, Score,
};
use std::io::{self, BufRead, Write};

/// Marks an empty square the active player may take.
const HINT: char = '*';

/// Plays over any line-based input and text output (stdin/stdout in the binary).
pub struct TerminalConnector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConnector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the input and output streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Read one trimmed line, or None at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Read a square typed as "D3", or as zero-based "row col" / "row,col".
pub fn parse_move(input: &str) -> Result<Location, ParseLocationError> {
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());

    match (parts.next(), parts.next(), parts.next()) {
        (Some(row), Some(col), None) => {
            let row = row.parse().or(Err(ParseLocationError))?;
            let col = col.parse().or(Err(ParseLocationError))?;
            Ok(Location::new(row, col))
        }
        _ => input.parse(),
    }
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}

impl<R: BufRead, W: Write> Connector for TerminalConnector<R, W> {
    fn render(&mut self, game: &Game) -> io::Result<()> {
        let player = game.active_player();
        let board = game.board();
        let grid = board.render(|loc, cell| match cell {
            Cell::Empty if board.is_legal(loc, player) => HINT,
            _ => cell.to_char(),
        });

        let score = game.score();
        writeln!(self.output, "\n{}\n", grid)?;
        writeln!(
            self.output,
            "Black ({}) {:>3}    White ({}) {:>3}",
            Cell::Black.to_char(),
            score.black,
            Cell::White.to_char(),
            score.white
        )?;
        writeln!(self.output, "{} to move.", player)
    }

    fn request_move(&mut self, game: &Game) -> io::Result<Option<Location>> {
        let player = game.active_player();

        if !game.has_any_legal_move(player) {
            writeln!(
                self.output,
                "{} has no legal moves. Press Enter to pass.",
                player
            )?;
            self.output.flush()?;
            return Ok(match self.read_line()? {
                Some(line) if is_quit(&line) => None,
                Some(_) => Some(Location::new(0, 0)),
                None => None,
            });
        }

        loop {
            write!(self.output, "{}, enter a move (e.g. D3) or 'quit': ", player)?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };
            if is_quit(&line) {
                return Ok(None);
            }

            match parse_move(&line) {
                Ok(loc) => return Ok(Some(loc)),
                Err(_) => writeln!(self.output, "Cannot parse move {:?}.", line)?,
            }
        }
    }

    fn report_outcome(&mut self, game: &Game, outcome: MoveOutcome) -> io::Result<()> {
        match outcome {
            MoveOutcome::Placed { at, flipped, .. } => {
                // The turn has already moved on.
                let mover: Player = !game.active_player();
                writeln!(self.output, "{} played {}, flipping {}.", mover, at, flipped)
            }
            MoveOutcome::Passed { passer, .. } => writeln!(self.output, "{} passes.", passer),
        }
    }

    fn report_rejected(&mut self, game: &Game, error: MoveError) -> io::Result<()> {
        let legal = game
            .legal_moves(game.active_player())
            .iter()
            .map(|loc| loc.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        writeln!(self.output, "Invalid move: {}. Legal moves: [{}]", error, legal)
    }

    fn announce_result(&mut self, result: GameResult, score: Score) -> io::Result<()> {
        let banner = match result {
            GameResult::Win(Player::Black) => "Black Wins!",
            GameResult::Win(Player::White) => "White Wins!",
            GameResult::Tie => "Tie!",
        };
        writeln!(self.output, "{} ({})", banner, score)?;
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn connector(input: &str) -> TerminalConnector<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalConnector::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(connector: TerminalConnector<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(connector.into_inner().1).unwrap()
    }

    #[test]
    fn parse_move_notations() {
        assert_eq!(parse_move("D3"), Ok(Location::new(2, 3)));
        assert_eq!(parse_move("2 3"), Ok(Location::new(2, 3)));
        assert_eq!(parse_move("2,3"), Ok(Location::new(2, 3)));
        assert_eq!(parse_move(" 7 ,  0 "), Ok(Location::new(7, 0)));
        assert_eq!(parse_move("2 x"), Err(ParseLocationError));
        assert_eq!(parse_move("1 2 3"), Err(ParseLocationError));
        assert_eq!(parse_move(""), Err(ParseLocationError));
    }

    #[test]
    fn render_shows_hints_and_scores() {
        let game = Game::with_config(&othello_engine::BoardConfig::square(4)).unwrap();
        let mut terminal = connector("");
        terminal.render(&game).unwrap();

        let text = output(terminal);
        assert!(text.contains(" 1 . * . . \n 2 * O # . \n 3 . # O * \n 4 . . * . "));
        assert!(text.contains("Black (#)   2    White (O)   2"));
        assert!(text.ends_with("Black to move.\n"));
    }

    #[test]
    fn request_move_retries_until_parsable() {
        let game = Game::new();
        let mut terminal = connector("banana\nd3\n");
        assert_eq!(
            terminal.request_move(&game).unwrap(),
            Some(Location::new(2, 3))
        );
        assert!(output(terminal).contains("Cannot parse move \"banana\"."));
    }

    #[test]
    fn request_move_quit_and_eof() {
        let game = Game::new();
        assert_eq!(connector("quit\n").request_move(&game).unwrap(), None);
        assert_eq!(connector("").request_move(&game).unwrap(), None);
    }

    #[test]
    fn request_move_when_stuck_offers_pass() {
        let game: Game = "O#....../......../......../......../......../......../......../........ b"
            .parse()
            .unwrap();
        let mut terminal = connector("\n");
        assert_eq!(
            terminal.request_move(&game).unwrap(),
            Some(Location::new(0, 0))
        );
        assert!(output(terminal).contains("Black has no legal moves. Press Enter to pass."));
    }

    #[test]
    fn report_rejected_lists_legal_moves() {
        let game = Game::new();
        let mut terminal = connector("");
        terminal
            .report_rejected(&game, MoveError::InvalidMove { row: 0, col: 0 })
            .unwrap();
        assert_eq!(
            output(terminal),
            "Invalid move: illegal move at row 0, column 0. Legal moves: [D3, C4, F5, E6]\n"
        );
    }

    #[test]
    fn announce_result_banners() {
        let mut terminal = connector("");
        terminal
            .announce_result(GameResult::Tie, Score { black: 32, white: 32 })
            .unwrap();
        terminal
            .announce_result(
                GameResult::Win(Player::White),
                Score { black: 10, white: 54 },
            )
            .unwrap();
        assert_eq!(
            output(terminal),
            "Tie! (Black 32 - 32 White)\nWhite Wins! (Black 10 - 54 White)\n"
        );
    }
}
