//! "Perft" performance test: count the number of leaves at a given depth.
//! A forced pass counts as a ply, and a finished game is a leaf.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::Game;

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(&Game::new(), depth)
}

fn leaves_below(game: &Game, depth: u64) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = game.legal_moves(game.active_player());
    if all_moves.is_empty() {
        // Both players are stuck: game is over
        if game.is_game_over() {
            return 1;
        }

        let mut passed = game.clone();
        let outcome = passed.apply_move(0, 0);
        debug_assert!(matches!(outcome, Ok(o) if o.is_pass()));
        return leaves_below(&passed, depth - 1);
    }

    all_moves
        .into_iter()
        .map(|mv| {
            let mut next = game.clone();
            next.apply_move(mv.row, mv.col)
                .expect("listed moves are legal");
            leaves_below(&next, depth - 1)
        })
        .sum()
}
