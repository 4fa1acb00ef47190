//! End-to-end rule scenarios on the public API.

use othello_engine::test_utils::positions;
use othello_engine::{
    BoardConfig, Cell, Game, GameResult, Location, MoveError, MoveOutcome, Player, Score,
};

fn position(notation: &str) -> Game {
    notation.parse().unwrap()
}

fn assert_counts_consistent(game: &Game) {
    let board = game.board();
    assert_eq!(
        game.cell_count(Player::Black) + game.cell_count(Player::White) + game.empty_count(),
        board.rows() * board.cols()
    );
}

#[test]
fn initial_board() {
    let game = Game::new();
    for (loc, cell) in game.board().iter() {
        let expected = match loc.to_coords() {
            (3, 3) | (4, 4) => Cell::White,
            (3, 4) | (4, 3) => Cell::Black,
            _ => Cell::Empty,
        };
        assert_eq!(cell, expected, "at {}", loc);
    }
    assert_eq!(game.active_player(), Player::Black);
    assert_counts_consistent(&game);
}

#[test]
fn black_opens_d3() {
    let mut game = Game::new();
    let outcome = game.apply_move(2, 3).unwrap();

    assert_eq!(game.cell(3, 3), Some(Cell::Black));
    assert_eq!(game.cell(2, 3), Some(Cell::Black));
    assert_eq!(game.active_player(), Player::White);
    assert_eq!(outcome.score(), Score { black: 4, white: 1 });
    assert_counts_consistent(&game);
}

#[test]
fn occupied_cell_rejected_without_change() {
    let mut game = Game::new();
    let before = game.clone();

    assert_eq!(
        game.apply_move(3, 3),
        Err(MoveError::InvalidMove { row: 3, col: 3 })
    );
    assert_eq!(game, before);
}

#[test]
fn white_reply_options_after_d3() {
    let mut game = Game::new();
    game.apply_move(2, 3).unwrap();
    assert_eq!(
        game.legal_moves(Player::White),
        vec![Location::new(2, 2), Location::new(2, 4), Location::new(4, 2)]
    );
}

#[test]
fn multi_direction_capture() {
    // White at C3 flanks along the row, the column and the diagonal at once.
    let mut game = position(
        "......../......../..-##O../..##..../..#.#.../..O..O../......../........ w",
    );
    let outcome = game.apply_move(2, 2).unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Placed {
            at: Location::new(2, 2),
            flipped: 6,
            score: Score { black: 0, white: 10 },
        }
    );
    assert_eq!(game.cell_count(Player::Black), 0);
}

#[test]
fn forced_pass_then_play() {
    let mut game = position(
        "O#....../......../......../......../......../......../......../........ b",
    );
    let board = game.board().clone();

    let outcome = game.apply_move(5, 5).unwrap();
    assert!(outcome.is_pass());
    assert_eq!(game.board(), &board);
    assert_eq!(game.active_player(), Player::White);

    // White clears the board of Black and the game is over.
    game.apply_move(0, 2).unwrap();
    assert!(game.is_game_over());
    assert_eq!(game.winner(), GameResult::Win(Player::White));
}

#[test]
fn game_over_keeps_passing() {
    let mut game = position(
        "########/########/########/########/OOOOOOOO/OOOOOOOO/OOOOOOOO/OOOOOOOO b",
    );
    assert!(game.is_game_over());
    assert_eq!(game.winner(), GameResult::Tie);

    for expected in [Player::White, Player::Black].iter() {
        assert!(game.apply_move(0, 0).unwrap().is_pass());
        assert_eq!(game.active_player(), *expected);
    }
}

#[test]
fn majority_wins_with_empties_left() {
    // The empty row touches only runs that end at the edge.
    let game = position(
        "########/########/########/########/......../OOOOOOOO/OOOOOOOO/OOOOOOOO b",
    );
    assert!(game.is_game_over());
    assert_eq!(game.score(), Score { black: 32, white: 24 });
    assert_eq!(game.winner(), GameResult::Win(Player::Black));
}

#[test]
fn other_board_sizes_play_legally() {
    for &(rows, cols) in [(4, 4), (6, 6), (6, 10), (10, 10)].iter() {
        let config = BoardConfig::square(rows).with_cols(cols);
        let mut game = Game::with_config(&config).unwrap();
        assert_eq!(game.legal_moves(Player::Black).len(), 4);

        let mut turns = 0;
        while !game.is_game_over() {
            let player = game.active_player();
            let before = game.score();
            let outcome = match game.legal_moves(player).first() {
                Some(loc) => game.apply_move(loc.row, loc.col).unwrap(),
                None => game.apply_move(0, 0).unwrap(),
            };
            if let MoveOutcome::Placed { flipped, score, .. } = outcome {
                assert_eq!(score.occupied(), before.occupied() + 1);
                assert_eq!(score.of(player), before.of(player) + 1 + flipped);
            }
            assert_counts_consistent(&game);
            turns += 1;
            assert!(turns <= 2 * rows * cols, "game did not terminate");
        }
    }
}

#[test]
fn fixture_positions() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/positions.txt");
    let fixtures = positions::load_positions(path).unwrap();
    assert_eq!(fixtures.len(), 7);

    for fixture in fixtures {
        let game = &fixture.game;
        let player = game.active_player();
        assert_eq!(
            game.legal_moves(player).len(),
            fixture.legal_moves,
            "{}",
            game.to_notation()
        );
        assert_eq!(game.has_any_legal_move(player), fixture.legal_moves > 0);
    }
}
