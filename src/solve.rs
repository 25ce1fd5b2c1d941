//! Entry point which ties configurations, strategies and searchers together.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    puzzle::{
        error::ParseError,
        state::Configuration,
        symbol::Symbol::{self, East, Empty, West},
    },
    search::{
        bfs::BfsSearcher,
        config::SearchConfig,
        dfs::DfsSearcher,
        searcher::{SearchResult, Searcher},
    },
};

////////////////////////////////////////////////////////////////////////////////

/// Which side of the puzzle is malformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Start,
    Goal,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Start => write!(f, "start"),
            Side::Goal => write!(f, "goal"),
        }
    }
}

/// Represents malformed puzzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Configuration could not be parsed.
    #[error("bad configuration: {0}")]
    Parse(#[from] ParseError),

    /// Start and goal have different number of stones.
    #[error("start has {start} stones, but goal has {goal}")]
    LengthMismatch { start: usize, goal: usize },

    /// Configuration must contain exactly one free stone.
    #[error("{side} has {count} free stones, expected exactly one")]
    EmptySlots { side: Side, count: usize },
}

pub type PuzzleResult<T> = Result<T, PuzzleError>;

////////////////////////////////////////////////////////////////////////////////

/// Search strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Bfs,
    Dfs,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Bfs, Strategy::Dfs];

    pub fn searcher(&self, cfg: SearchConfig) -> Box<dyn Searcher> {
        match self {
            Strategy::Bfs => Box::new(BfsSearcher::new(cfg)),
            Strategy::Dfs => Box::new(DfsSearcher::new(cfg)),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Bfs => write!(f, "BFS"),
            Strategy::Dfs => write!(f, "DFS"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Runs search without any restrictions.
///
/// Configurations are not validated here: a start without the free stone
/// has no moves and the search reports that the goal is not found.
pub fn solve(start: &Configuration, goal: &Configuration, strategy: Strategy) -> SearchResult {
    strategy
        .searcher(SearchConfig::unlimited())
        .search(start, goal)
}

////////////////////////////////////////////////////////////////////////////////

/// Validated pair of start and goal configurations.
///
/// Both sides have the same length and exactly one free stone.
/// The numbers of rabbits may differ; such puzzle simply has no solution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    start: Configuration,
    goal: Configuration,
}

impl Puzzle {
    pub fn new(start: Configuration, goal: Configuration) -> PuzzleResult<Self> {
        if start.len() != goal.len() {
            return Err(PuzzleError::LengthMismatch {
                start: start.len(),
                goal: goal.len(),
            });
        }
        for (side, state) in [(Side::Start, &start), (Side::Goal, &goal)] {
            let count = state.count(Empty);
            if count != 1 {
                return Err(PuzzleError::EmptySlots { side, count });
            }
        }
        Ok(Self { start, goal })
    }

    pub fn parse(start: &str, goal: &str) -> PuzzleResult<Self> {
        Self::new(start.parse()?, goal.parse()?)
    }

    /// Three rabbits on each side: `EEE_WWW` -> `WWW_EEE`.
    pub fn canonical() -> Self {
        let line = |left: Symbol, right: Symbol| {
            Configuration::from_symbols([left, left, left, Empty, right, right, right])
        };
        Self {
            start: line(East, West),
            goal: line(West, East),
        }
    }

    pub fn start(&self) -> &Configuration {
        &self.start
    }

    pub fn goal(&self) -> &Configuration {
        &self.goal
    }

    pub fn solve(&self, strategy: Strategy, cfg: &SearchConfig) -> SearchResult {
        strategy.searcher(cfg.clone()).search(&self.start, &self.goal)
    }
}

////////////////////////////////////////////////////////////////////////////////
