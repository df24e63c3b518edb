use log::{debug, trace};
use rustc_hash::FxHashMap;
use crate::board::{Board, Direction};
use crate::node::{NodeArena, NodeId};
use crate::search::{SearchLimits, SearchOutput, SearchStatus, Stats};
use crate::traits::board::Heuristic;

/// What a round's limit is compared against.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bound {
    /// Path length, for IDFS.
    Depth,
    /// `cost + heuristic`, for IDA*.
    Estimate,
}

enum Probe {
    Found(Vec<Direction>),
    NotFound,
    LimitReached,
}

/// One depth-first pass under a fixed limit. Owns its arena and visited map,
/// so nothing carries over to the next round or the next solve.
struct Round<'s> {
    bound: Bound,
    limit: u32,
    /// Smallest pruned estimate, the next IDA* threshold.
    next_limit: Option<u32>,
    /// Set when IDFS stops at the depth limit, i.e. deeper states may exist.
    cut_off: bool,
    arena: NodeArena,
    /// Board -> cheapest cost it was entered with during this round.
    entered: FxHashMap<Board, u32>,
    stats: &'s mut Stats,
}

impl<'s> Round<'s> {
    fn new(bound: Bound, limit: u32, stats: &'s mut Stats) -> Self {
        Self {
            bound,
            limit,
            next_limit: None,
            cut_off: false,
            arena: NodeArena::new(),
            entered: FxHashMap::default(),
            stats,
        }
    }

    fn run(&mut self, board: &Board) -> Probe {
        let root = self.arena.root(board.clone());
        self.probe(root)
    }

    fn probe(&mut self, id: NodeId) -> Probe {
        let cost = self.arena[id].cost;
        let heuristic = self.arena[id].board.get_heuristic();

        if self.bound == Bound::Estimate && cost + heuristic > self.limit {
            let estimate = cost + heuristic;
            self.next_limit = Some(self.next_limit.map_or(estimate, |next| next.min(estimate)));
            return Probe::NotFound;
        }

        self.stats.record(heuristic);

        if self.arena[id].board.is_solved() {
            return Probe::Found(self.arena.path(id));
        }

        self.entered.insert(self.arena[id].board.clone(), cost);

        if self.bound == Bound::Depth && cost >= self.limit {
            self.cut_off = true;
            return Probe::NotFound;
        }

        let mark = self.arena.len();
        let children = self.arena.expand(id, true);
        self.stats.expanded();

        if self.stats.limit_reached() {
            return Probe::LimitReached;
        }

        for child in children {
            let node = &self.arena[child];
            if matches!(self.entered.get(&node.board), Some(&seen) if seen <= node.cost) {
                continue;
            }

            match self.probe(child) {
                Probe::NotFound => {}
                found_or_limited => return found_or_limited,
            }
        }

        self.arena.truncate(mark);
        Probe::NotFound
    }
}

/// Iterative-deepening depth-first search with depth limits 1, 2, 3, ...
pub fn idfs(board: &Board, limits: SearchLimits) -> SearchOutput {
    let mut stats = Stats::new(board, limits);

    if board.is_solved() {
        stats.record(stats.initial_heuristic());
        return stats.solved(vec![]);
    }

    let mut depth = 1;
    loop {
        debug!("idfs: depth limit {}", depth);
        let (probe, cut_off) = {
            let mut round = Round::new(Bound::Depth, depth, &mut stats);
            let probe = round.run(board);
            (probe, round.cut_off)
        };

        match probe {
            Probe::Found(path) => return stats.solved(path),
            Probe::LimitReached => return stats.unsolved(SearchStatus::LimitReached),
            Probe::NotFound if !cut_off => return stats.unsolved(SearchStatus::Exhausted),
            Probe::NotFound => {}
        }

        trace!("idfs: {} expansions after depth {}", stats.nodes_expanded(), depth);
        depth += 1;
    }
}

/// Iterative-deepening A*. Each round's threshold is the smallest estimate
/// pruned in the round before, starting from the initial heuristic.
pub fn idastar(board: &Board, limits: SearchLimits) -> SearchOutput {
    let mut stats = Stats::new(board, limits);
    let mut threshold = stats.initial_heuristic();

    loop {
        debug!("idastar: threshold {}", threshold);
        let (probe, next_limit) = {
            let mut round = Round::new(Bound::Estimate, threshold, &mut stats);
            let probe = round.run(board);
            (probe, round.next_limit)
        };

        match probe {
            Probe::Found(path) => return stats.solved(path),
            Probe::LimitReached => return stats.unsolved(SearchStatus::LimitReached),
            Probe::NotFound => match next_limit {
                Some(next) => threshold = next,
                None => return stats.unsolved(SearchStatus::Exhausted),
            },
        }
    }
}
