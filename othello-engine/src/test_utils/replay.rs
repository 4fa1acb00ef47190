//! Scripted play: replay a fixed move list, or drive a game with a list of
//! choices (handy as a property-test input).

use crate::{Game, Location, MoveError, MoveOutcome};

/// Apply `moves` to `game` in order, stopping at the first rejected move.
/// A move made while the active player must pass is consumed by the pass.
pub fn play_sequence(game: &mut Game, moves: &[Location]) -> Result<Vec<MoveOutcome>, MoveError> {
    moves
        .iter()
        .map(|loc| game.apply_move(loc.row, loc.col))
        .collect()
}

/// Play legal moves until the game ends or `choices` runs out.
///
/// Each turn with at least one legal move consumes one choice and plays the
/// `choice % n`-th legal move in row-major order. Forced passes consume nothing.
pub fn playout(game: &mut Game, choices: &[usize]) -> Vec<MoveOutcome> {
    let mut outcomes = Vec::new();
    let mut choices = choices.iter();

    while !game.is_game_over() {
        let moves = game.legal_moves(game.active_player());
        let loc = if moves.is_empty() {
            Location::new(0, 0)
        } else {
            match choices.next() {
                Some(&choice) => moves[choice % moves.len()],
                None => break,
            }
        };

        outcomes.push(
            game.apply_move(loc.row, loc.col)
                .expect("playout only makes legal moves"),
        );
    }

    outcomes
}

/// Turn a list of outcomes back into coordinates that reproduce them with
/// [`play_sequence`]. Passes map to the origin, which a pass ignores.
pub fn replay_locations(outcomes: &[MoveOutcome]) -> Vec<Location> {
    outcomes
        .iter()
        .map(|outcome| match *outcome {
            MoveOutcome::Placed { at, .. } => at,
            MoveOutcome::Passed { .. } => Location::new(0, 0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn play_sequence_stops_at_illegal_move() {
        let mut game = Game::new();
        let moves = [Location::new(2, 3), Location::new(0, 0), Location::new(2, 2)];
        assert_eq!(
            play_sequence(&mut game, &moves),
            Err(MoveError::InvalidMove { row: 0, col: 0 })
        );
        // The first move stuck, the rest never ran.
        assert_eq!(game.active_player(), Player::White);
        assert_eq!(game.score().occupied(), 5);
    }

    #[test]
    fn playout_consumes_choices() {
        let mut game = Game::new();
        let outcomes = playout(&mut game, &[0, 0, 0]);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(game.score().occupied(), 7);
    }

    #[test]
    fn playout_to_the_end() {
        let mut game = Game::new();
        playout(&mut game, &[0; 200]);
        assert!(game.is_game_over());
    }

    #[test]
    fn replay_reproduces_playout() {
        let mut played = Game::new();
        let outcomes = playout(&mut played, &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);

        let mut replayed = Game::new();
        let replay = play_sequence(&mut replayed, &replay_locations(&outcomes)).unwrap();
        assert_eq!(replay, outcomes);
        assert_eq!(replayed, played);
    }
}
