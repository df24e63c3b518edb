//! Search strategies over `Board` states.
//!
//! Every strategy takes a validated board plus a `SearchLimits` and returns a
//! `SearchOutput`. Not finding a solution is a status on the output, never an
//! error. BFS, A* and GBFS keep every visited node alive until the search
//! returns, so their memory grows with the number of states visited; IDFS and
//! IDA* hold the current recursion path plus one round's visited map.

mod best_first;
mod bfs;
mod iterative;

use std::fmt;
use log::debug;
use serde::Serialize;
use crate::board::{Board, Direction};
use crate::traits::board::Heuristic;

pub use best_first::{astar, gbfs};
pub use bfs::bfs;
pub use iterative::{idastar, idfs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[value(name = "bfs")]
    Bfs,
    #[value(name = "idfs")]
    Idfs,
    #[value(name = "astar")]
    AStar,
    #[value(name = "idastar")]
    IdaStar,
    #[value(name = "gbfs")]
    Gbfs,
}

pub const ALGORITHMS: [Algorithm; 5] = [
    Algorithm::Bfs,
    Algorithm::Idfs,
    Algorithm::AStar,
    Algorithm::IdaStar,
    Algorithm::Gbfs,
];

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Idfs => "idfs",
            Algorithm::AStar => "astar",
            Algorithm::IdaStar => "idastar",
            Algorithm::Gbfs => "gbfs",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Caller-imposed ceiling on the work a single solve may do.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchLimits {
    pub max_expansions: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Solved,
    /// Every reachable state was examined without meeting the goal.
    Exhausted,
    /// `SearchLimits::max_expansions` tripped first.
    LimitReached,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchStatus::Solved => write!(f, "solved"),
            SearchStatus::Exhausted => write!(f, "frontier exhausted"),
            SearchStatus::LimitReached => write!(f, "expansion limit reached"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutput {
    pub status: SearchStatus,
    /// Moves from the initial board to the goal; `Some` only when solved.
    pub path: Option<Vec<Direction>>,
    pub nodes_expanded: u64,
    pub average_heuristic_value: f64,
    pub initial_heuristic_value: u32,
}

impl SearchOutput {
    pub fn path_length(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len())
    }
}

/// Running counters shared by the strategies.
#[derive(Debug)]
pub(crate) struct Stats {
    limits: SearchLimits,
    initial_heuristic: u32,
    nodes_expanded: u64,
    heuristic_sum: u64,
    recorded: u64,
}

impl Stats {
    pub(crate) fn new(board: &Board, limits: SearchLimits) -> Self {
        Self {
            limits,
            initial_heuristic: board.get_heuristic(),
            nodes_expanded: 0,
            heuristic_sum: 0,
            recorded: 0,
        }
    }

    pub(crate) fn initial_heuristic(&self) -> u32 {
        self.initial_heuristic
    }

    /// Folds the heuristic of a newly visited state into the average.
    pub(crate) fn record(&mut self, heuristic: u32) {
        self.heuristic_sum += heuristic as u64;
        self.recorded += 1;
    }

    pub(crate) fn expanded(&mut self) {
        self.nodes_expanded += 1;
    }

    pub(crate) fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    pub(crate) fn limit_reached(&self) -> bool {
        matches!(self.limits.max_expansions, Some(max) if self.nodes_expanded >= max)
    }

    fn average(&self) -> f64 {
        if self.recorded == 0 {
            0.
        } else {
            self.heuristic_sum as f64 / self.recorded as f64
        }
    }

    pub(crate) fn solved(self, path: Vec<Direction>) -> SearchOutput {
        self.finish(SearchStatus::Solved, Some(path))
    }

    pub(crate) fn unsolved(self, status: SearchStatus) -> SearchOutput {
        self.finish(status, None)
    }

    fn finish(self, status: SearchStatus, path: Option<Vec<Direction>>) -> SearchOutput {
        SearchOutput {
            status,
            path,
            nodes_expanded: self.nodes_expanded,
            average_heuristic_value: self.average(),
            initial_heuristic_value: self.initial_heuristic,
        }
    }
}

/// Runs `algorithm` on `board`.
pub fn solve(algorithm: Algorithm, board: &Board, limits: SearchLimits) -> SearchOutput {
    debug!("{}: solving {} with {:?}", algorithm, board, limits);

    let output = match algorithm {
        Algorithm::Bfs => bfs(board, limits),
        Algorithm::Idfs => idfs(board, limits),
        Algorithm::AStar => astar(board, limits),
        Algorithm::IdaStar => idastar(board, limits),
        Algorithm::Gbfs => gbfs(board, limits),
    };

    debug!(
        "{}: {} after {} expansions",
        algorithm, output.status, output.nodes_expanded
    );

    output
}
