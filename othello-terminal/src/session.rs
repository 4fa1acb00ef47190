use crate::Connector;
use log::{debug, info};
use othello_engine::{Game, GameResult};
use std::io;

/// One game driven through a [`Connector`], from the first move to the result.
pub struct Session<C> {
    game: Game,
    connector: C,
}

impl<C: Connector> Session<C> {
    pub fn new(game: Game, connector: C) -> Self {
        Self { game, connector }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_connector(self) -> C {
        self.connector
    }

    /// Play until neither side can move, or until the connector gives up.
    ///
    /// Returns the result of a finished game, or None if the players quit.
    /// The board is redrawn in full before every move.
    pub fn run(&mut self) -> io::Result<Option<GameResult>> {
        info!("starting a {} game", self.game.board().config());

        while !self.game.is_game_over() {
            self.connector.render(&self.game)?;

            let loc = match self.connector.request_move(&self.game)? {
                Some(loc) => loc,
                None => {
                    info!("players quit with {} on the board", self.game.score());
                    return Ok(None);
                }
            };

            match self.game.apply_move(loc.row, loc.col) {
                Ok(outcome) => self.connector.report_outcome(&self.game, outcome)?,
                Err(error) => {
                    debug!("rejected {:?}: {}", loc.to_coords(), error);
                    self.connector.report_rejected(&self.game, error)?
                }
            }
        }

        self.connector.render(&self.game)?;
        let result = self.game.winner();
        let score = self.game.score();
        info!("game over: {} ({})", result, score);
        self.connector.announce_result(result, score)?;

        Ok(Some(result))
    }
}
