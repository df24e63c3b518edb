mod board;
mod node;
mod search;
mod traits;
mod util;

use anyhow::{bail, ensure, Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use serde::Serialize;
use crate::board::{Board, Direction};
use crate::search::{solve, Algorithm, SearchLimits, SearchOutput};
use crate::traits::board::DebugPrintable;
use crate::util::{normalize_args, split_instances};

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Solves 8- and 15-puzzles by state-space search", long_about = None)]
struct Args {
    /// Search strategy
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Tiles of one or more boards, blank as 0. A trailing comma ends a board.
    #[arg(required = true, num_args = 1..)]
    tiles: Vec<String>,

    /// Give up on a board after this many node expansions
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Draw each board and list the moves found on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Reject boards that cannot reach the goal before searching
    #[arg(long)]
    check_solvable: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    algorithm: Algorithm,
    board: String,
    path_length: Option<usize>,
    elapsed_seconds: f64,
    #[serde(flatten)]
    output: &'a SearchOutput,
}

impl Report<'_> {
    fn csv(&self) -> String {
        let path_length = self
            .path_length
            .map_or_else(|| "none".to_string(), |len| len.to_string());

        format!(
            "{},{},{},{},{}",
            self.output.nodes_expanded,
            path_length,
            self.elapsed_seconds,
            self.output.average_heuristic_value,
            self.output.initial_heuristic_value
        )
    }
}

fn read_boards(args: &Args) -> Result<Vec<Board>> {
    let instances = split_instances(&args.tiles)?;
    if instances.is_empty() {
        bail!("no puzzle instance given");
    }

    let mut boards: Vec<Board> = Vec::with_capacity(instances.len());
    for (idx, values) in instances.into_iter().enumerate() {
        let board = Board::new(values).with_context(|| format!("instance {} is not a valid board", idx + 1))?;

        if args.check_solvable && !board.is_solvable() {
            bail!("instance {} {} cannot reach the goal", idx + 1, board);
        }

        boards.push(board);
    }

    Ok(boards)
}

/// Replays a returned path; it must stay on the grid and end on the goal.
fn check_path(algorithm: Algorithm, board: &Board, path: &[Direction]) -> Result<()> {
    let reached = board.apply_path(path).ok();
    ensure!(
        reached.is_some_and(|b| b.is_solved()),
        "{} returned a path that misses the goal for {}",
        algorithm,
        board
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse_from(normalize_args(std::env::args()));
    let boards = read_boards(&args)?;
    let limits = SearchLimits { max_expansions: args.max_expansions };
    info!("{} board(s) with {}, {:?}", boards.len(), args.algorithm, limits);

    let progress = if boards.len() > 1 {
        ProgressBar::new(boards.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")?);

    let mut unsolved = 0;

    for (idx, board) in boards.iter().enumerate() {
        progress.set_message(board.serialized());
        if args.verbose {
            progress.suspend(|| board.debug_print());
        }

        let started = Utc::now();
        let output = solve(args.algorithm, board, limits);
        let elapsed_seconds = (Utc::now() - started)
            .to_std()
            .map(|elapsed| elapsed.as_secs_f64())
            .unwrap_or_default();

        match &output.path {
            Some(path) => {
                check_path(args.algorithm, board, path)?;

                if args.verbose {
                    let moves: String = path.iter().map(|d| d.to_char()).collect();
                    progress.suspend(|| eprintln!("{} moves: {}", path.len(), moves));
                }
            }
            None => {
                warn!("instance {} {}: {}", idx + 1, board, output.status);
                unsolved += 1;
            }
        }

        let report = Report {
            algorithm: args.algorithm,
            board: board.serialized(),
            path_length: output.path_length(),
            elapsed_seconds,
            output: &output,
        };

        let line = match args.format {
            Format::Csv => report.csv(),
            Format::Json => serde_json::to_string(&report)?,
        };
        progress.suspend(|| println!("{}", line));
        progress.inc(1);
    }

    progress.finish_and_clear();

    if unsolved > 0 {
        bail!("{} of {} board(s) were not solved", unsolved, boards.len());
    }

    Ok(())
}
