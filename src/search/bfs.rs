use std::collections::VecDeque;
use log::trace;
use rustc_hash::FxHashSet;
use crate::board::Board;
use crate::node::NodeArena;
use crate::search::{SearchLimits, SearchOutput, SearchStatus, Stats};
use crate::traits::board::Heuristic;

/// Breadth-first search. Children are goal-tested as they are generated, so
/// the first goal seen lies at the smallest depth.
pub fn bfs(board: &Board, limits: SearchLimits) -> SearchOutput {
    let mut stats = Stats::new(board, limits);
    let mut arena = NodeArena::new();
    let mut visited: FxHashSet<Board> = FxHashSet::default();

    visited.insert(board.clone());
    stats.record(stats.initial_heuristic());

    if board.is_solved() {
        return stats.solved(vec![]);
    }

    let root = arena.root(board.clone());
    let mut open = VecDeque::from([root]);

    while let Some(current) = open.pop_front() {
        if stats.limit_reached() {
            return stats.unsolved(SearchStatus::LimitReached);
        }

        for child in arena.expand(current, true) {
            let successor = &arena[child].board;

            if successor.is_solved() {
                stats.record(successor.get_heuristic());
                stats.expanded();
                return stats.solved(arena.path(child));
            }

            if visited.insert(successor.clone()) {
                stats.record(successor.get_heuristic());
                open.push_back(child);
            }
        }

        stats.expanded();
        trace!("bfs: {} expanded, {} queued", stats.nodes_expanded(), open.len());
    }

    stats.unsolved(SearchStatus::Exhausted)
}
