//! Board model invariants: parsing, reachability and game rules

mod common;

use common::{board, reachable_states};
use oxo::{
    Error,
    tictactoe::{BoardState, Cell, Game, GameOutcome, LineAnalyzer, Player, WINNING_LINES},
};

mod double_line_validation {
    use super::*;

    #[test]
    fn double_line_sharing_a_cell_is_valid() {
        // X X X
        // X O O
        // X O O
        let mut game = Game::new();
        for pos in [1, 4, 2, 5, 3, 7, 6, 8, 0] {
            game.play(pos).unwrap();
        }
        let state = game.current_state();
        assert_eq!(state.winner(), Some(Player::X));
        assert!(
            state.is_valid(),
            "two winning lines completed by one move should be valid"
        );
    }

    #[test]
    fn double_win_without_shared_cell_is_invalid() {
        // X X X
        // O O .
        // X X X
        let mut cells = [Cell::Empty; 9];
        for pos in [0, 1, 2, 6, 7, 8] {
            cells[pos] = Cell::X;
        }
        cells[3] = Cell::O;
        cells[4] = Cell::O;

        let state = BoardState::from_cells(cells, Player::O);
        assert!(!state.is_valid());
    }

    #[test]
    fn both_players_winning_is_invalid() {
        let state = board("XXXOOO.../X");
        assert!(matches!(
            state.validate(),
            Err(Error::UnreachableBoard { .. })
        ));
    }
}

mod o_first_support {
    use super::*;

    #[test]
    fn o_first_opening_is_valid() {
        let mut state = BoardState::new_with_player(Player::O);
        assert!(state.is_valid(), "empty O-first board should be valid");

        state = state.make_move(4).unwrap();
        assert!(state.is_valid());
        assert_eq!(state.piece_counts(), (0, 1));
        assert_eq!(state.to_move, Player::X);
    }

    #[test]
    fn o_first_tree_matches_x_first_tree_in_size() {
        assert_eq!(reachable_states(Player::O).len(), 5478);
        assert!(reachable_states(Player::O).iter().all(BoardState::is_valid));
    }
}

mod state_counts {
    use super::*;

    #[test]
    fn reachable_positions() {
        let states = reachable_states(Player::X);
        assert_eq!(states.len(), 5478);
        assert_eq!(BoardState::count_valid_states(), 5478);
    }

    #[test]
    fn terminal_position_breakdown() {
        let states = reachable_states(Player::X);
        let x_wins = states.iter().filter(|s| s.winner() == Some(Player::X)).count();
        let o_wins = states.iter().filter(|s| s.winner() == Some(Player::O)).count();
        let draws = states.iter().filter(|s| s.is_draw()).count();
        assert_eq!((x_wins, o_wins, draws), (626, 316, 16));
    }

    #[test]
    fn total_state_space() {
        assert_eq!(3_usize.pow(9), 19683);
    }
}

mod lines {
    use super::*;

    #[test]
    fn eight_distinct_lines() {
        let unique: std::collections::HashSet<_> = WINNING_LINES.iter().collect();
        assert_eq!(unique.len(), 8);
        for line in WINNING_LINES {
            assert!(line.iter().all(|&p| p < 9));
        }
    }

    #[test]
    fn immediate_wins_are_found() {
        let state = board("XX.OO....");
        assert!(LineAnalyzer::has_immediate_win(&state.cells, Player::X));
        assert_eq!(
            LineAnalyzer::winning_moves(&state.cells, Player::O)
                .into_iter()
                .collect::<Vec<_>>(),
            vec![5]
        );
    }
}

mod game_rules {
    use super::*;

    #[test]
    fn moves_after_the_end_are_rejected() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4, 2] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
        assert!(matches!(game.play(8), Err(Error::GameOver)));
    }

    #[test]
    fn out_of_range_moves_are_rejected() {
        assert!(matches!(
            BoardState::new().make_move(9),
            Err(Error::InvalidPosition { position: 9 })
        ));
    }

    #[test]
    fn parse_errors_are_specific() {
        assert!(matches!(
            BoardState::from_string("XO"),
            Err(Error::InvalidBoardLength { got: 2, .. })
        ));
        let too_long = BoardState::from_string("X.........").unwrap_err();
        assert!(matches!(too_long, Error::InvalidBoardLength { got: 10, .. }));
        assert!(too_long.to_string().contains("wrong length"));
        assert!(matches!(
            BoardState::from_string("XOQ......"),
            Err(Error::InvalidCellCharacter { character: 'Q', .. })
        ));
        assert!(matches!(
            BoardState::from_string("XXX......"),
            Err(Error::InvalidPieceCounts { x_count: 3, o_count: 0 })
        ));
        assert!(matches!(
            BoardState::from_string("........./Z"),
            Err(Error::InvalidPlayerString { .. })
        ));
    }
}
