//! Common test utilities for the oxo test suite.
//!
//! Helpers that enumerate the reachable game tree, shared by the search,
//! strategy and validation tests.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use oxo::{
    ports::Strategy,
    tictactoe::{BoardState, Player},
};

/// Every position reachable from the empty board with `first` to move,
/// terminal positions included.
pub fn reachable_states(first: Player) -> Vec<BoardState> {
    let start = BoardState::new_with_player(first);
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut states = Vec::new();

    while let Some(state) = queue.pop_front() {
        states.push(state);
        for pos in state.legal_moves() {
            let next = state.make_move(pos).unwrap();
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    states
}

/// Parse a board, panicking with the offending text on failure.
pub fn board(s: &str) -> BoardState {
    BoardState::from_string(s).unwrap_or_else(|e| panic!("bad board '{s}': {e}"))
}

/// Play `strategy` as `side` against every possible reply of the other side
/// and collect the final boards.
pub fn exhaust_opponent(
    strategy: &mut dyn Strategy,
    side: Player,
    start: BoardState,
) -> Vec<BoardState> {
    let mut finals = Vec::new();
    let mut stack = vec![start];

    while let Some(state) = stack.pop() {
        if state.is_terminal() {
            finals.push(state);
            continue;
        }
        if state.to_move == side {
            let pos = strategy.select_move(&state).unwrap();
            stack.push(state.make_move(pos).unwrap());
        } else {
            for pos in state.legal_moves() {
                stack.push(state.make_move(pos).unwrap());
            }
        }
    }

    finals
}
