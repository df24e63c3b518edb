use std::cmp::Reverse;
use std::collections::BinaryHeap;
use log::trace;
use rustc_hash::FxHashSet;
use crate::board::Board;
use crate::node::{NodeArena, NodeId};
use crate::search::{SearchLimits, SearchOutput, SearchStatus, Stats};
use crate::traits::board::Heuristic;

/// A* ordered by `cost + heuristic`. Optimal because the heuristic is consistent.
pub fn astar(board: &Board, limits: SearchLimits) -> SearchOutput {
    best_first(board, limits, |cost, heuristic| cost + heuristic)
}

/// Greedy best-first ordered by the heuristic alone.
pub fn gbfs(board: &Board, limits: SearchLimits) -> SearchOutput {
    best_first(board, limits, |_, heuristic| heuristic)
}

/// Heap-ordered search with lazy deletion: a board may sit in the heap more
/// than once and the stale copies are dropped when popped. Equal priorities
/// pop in insertion order.
fn best_first<F>(board: &Board, limits: SearchLimits, priority: F) -> SearchOutput
where
    F: Fn(u32, u32) -> u32,
{
    let mut stats = Stats::new(board, limits);
    let mut arena = NodeArena::new();
    let mut closed_list: FxHashSet<Board> = FxHashSet::default();
    let mut open_list = BinaryHeap::<(Reverse<u32>, Reverse<u64>, u32, NodeId)>::new();
    let mut pushed: u64 = 0;

    let root = arena.root(board.clone());
    let heuristic = stats.initial_heuristic();
    open_list.push((Reverse(priority(0, heuristic)), Reverse(pushed), heuristic, root));

    while let Some((Reverse(_priority), _, heuristic, current)) = open_list.pop() {
        if !closed_list.insert(arena[current].board.clone()) {
            continue;
        }

        stats.record(heuristic);
        stats.expanded();

        if arena[current].board.is_solved() {
            return stats.solved(arena.path(current));
        }

        if stats.limit_reached() {
            return stats.unsolved(SearchStatus::LimitReached);
        }

        for child in arena.expand(current, true) {
            let node = &arena[child];
            if closed_list.contains(&node.board) {
                continue;
            }

            let heuristic = node.board.get_heuristic();
            pushed += 1;
            open_list.push((Reverse(priority(node.cost, heuristic)), Reverse(pushed), heuristic, child));
        }

        trace!("best-first: {} closed, {} open", closed_list.len(), open_list.len());
    }

    stats.unsolved(SearchStatus::Exhausted)
}
