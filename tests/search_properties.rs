//! Properties of the minimax search over the whole reachable game tree

mod common;

use common::{board, reachable_states};
use oxo::{
    search::{NEG_INFINITY, POS_INFINITY, Perspective, Searcher, search},
    tictactoe::{BoardState, Cell, Player},
};

fn is_maximizing(state: &BoardState) -> bool {
    Perspective::default().is_maximizing(state.to_move)
}

mod terminal_boards {
    use super::*;

    #[test]
    fn maximizer_wins_score_positive_without_move() {
        let perspective = Perspective::default();
        for state in reachable_states(Player::X)
            .into_iter()
            .filter(|s| s.winner() == Some(perspective.maximizer()))
        {
            let result = search(&state.cells, is_maximizing(&state), 0, NEG_INFINITY, POS_INFINITY);
            assert!(result.score > 0, "{}", state.encode());
            assert_eq!(result.best_move, None);
        }
    }

    #[test]
    fn minimizer_wins_score_negative_without_move() {
        for state in reachable_states(Player::X)
            .into_iter()
            .filter(|s| s.winner() == Some(Player::X))
        {
            let result = search(&state.cells, is_maximizing(&state), 0, NEG_INFINITY, POS_INFINITY);
            assert!(result.score < 0, "{}", state.encode());
            assert_eq!(result.best_move, None);
        }
    }

    #[test]
    fn full_board_draws_score_zero() {
        let draws: Vec<BoardState> = reachable_states(Player::X)
            .into_iter()
            .filter(|s| s.is_draw())
            .collect();
        assert!(!draws.is_empty());

        for state in draws {
            for maximizing in [true, false] {
                let result = search(&state.cells, maximizing, 0, NEG_INFINITY, POS_INFINITY);
                assert_eq!(result.score, 0);
                assert_eq!(result.best_move, None);
            }
        }
    }
}

mod whole_tree {
    use super::*;

    #[test]
    fn empty_board_is_a_draw() {
        let result = search(&[Cell::Empty; 9], true, 0, NEG_INFINITY, POS_INFINITY);
        assert_eq!(result.score, 0);
        assert!(result.best_move.is_some());

        let result = search(&[Cell::Empty; 9], false, 0, NEG_INFINITY, POS_INFINITY);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn unpruned_tree_has_known_size() {
        let mut searcher = Searcher::default().without_pruning();
        searcher.best_move(&BoardState::new());
        assert_eq!(searcher.stats().nodes, 549_946);

        let mut pruned = Searcher::default();
        pruned.best_move(&BoardState::new());
        assert!(pruned.stats().nodes < 549_946);
    }

    #[test]
    fn pruning_never_changes_score_or_move() {
        for state in reachable_states(Player::X) {
            let mut pruned = Searcher::default();
            let mut full = Searcher::default().without_pruning();
            let a = pruned.best_move(&state);
            let b = full.best_move(&state);
            assert_eq!(a, b, "{}", state.encode());
            assert!(pruned.stats().nodes <= full.stats().nodes);
        }
    }

    #[test]
    fn narrow_window_around_true_value_returns_it() {
        for state in reachable_states(Player::X)
            .into_iter()
            .filter(|s| !s.is_terminal())
        {
            let exact = Searcher::default().best_move(&state).score;
            let narrow = search(
                &state.cells,
                is_maximizing(&state),
                0,
                exact - 1,
                exact + 1,
            );
            assert_eq!(narrow.score, exact, "{}", state.encode());
        }
    }

    #[test]
    fn search_is_idempotent_and_leaves_board_alone() {
        for state in reachable_states(Player::X).into_iter().step_by(37) {
            let cells = state.cells;
            let first = search(&cells, is_maximizing(&state), 0, NEG_INFINITY, POS_INFINITY);
            let second = search(&cells, is_maximizing(&state), 0, NEG_INFINITY, POS_INFINITY);
            assert_eq!(first, second);
            assert_eq!(cells, state.cells);
        }
    }

    #[test]
    fn perspective_swap_negates_scores_only() {
        for state in reachable_states(Player::O).into_iter().step_by(11) {
            let a = Searcher::new(Perspective::new(Player::O)).best_move(&state);
            let b = Searcher::new(Perspective::new(Player::X)).best_move(&state);
            assert_eq!(a.best_move, b.best_move, "{}", state.encode());
            assert_eq!(a.score, -b.score, "{}", state.encode());
        }
    }
}

mod depth_preference {
    use super::*;

    #[test]
    fn prefers_the_fastest_win() {
        // O completes the top row at once instead of blocking X.
        let state = board("OO.XX.X../O");
        let result = Searcher::default().best_move(&state);
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.score, 9);
    }

    #[test]
    fn prefers_the_slowest_loss() {
        // X loses whatever it does, but blocking the right column on 8
        // holds out two plies longer than any other move.
        let state = board("XXO..O.../X");
        let result = Searcher::default().best_move(&state);
        assert_eq!(result.best_move, Some(8));
        assert_eq!(result.score, 6);
    }

    #[test]
    fn depth_offsets_shift_scores() {
        let state = board("XX.OO.X../O");
        let at_root = search(&state.cells, true, 0, NEG_INFINITY, POS_INFINITY);
        let deeper = search(&state.cells, true, 2, NEG_INFINITY, POS_INFINITY);
        assert_eq!(at_root.best_move, deeper.best_move);
        assert_eq!(at_root.score - 2, deeper.score);
    }
}
