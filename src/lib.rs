//! Solver of the rabbit leap puzzle.
//!
//! East-bound rabbits (`E`) and west-bound rabbits (`W`) stand on a line of
//! stones with one free stone (`_`) and have to swap sides. A rabbit slides
//! onto the adjacent free stone or jumps over one rabbit of the other kind,
//! and never moves backwards.
//!
//! The crate explores the graph of configurations with
//! breadth-first ([`BfsSearcher`]) or depth-first ([`DfsSearcher`]) search.

#![cfg_attr(feature = "strict", deny(warnings))]

pub mod puzzle;
pub mod report;
pub mod search;
pub mod solve;

////////////////////////////////////////////////////////////////////////////////

pub use puzzle::{
    error::{ParseError, ParseResult},
    moves::{successors, Move},
    state::Configuration,
    symbol::Symbol,
};

pub use search::{
    bfs::BfsSearcher,
    config::{SearchConfig, SearchConfigBuilder},
    dfs::DfsSearcher,
    log::SearchLog,
    searcher::{SearchResult, Searcher},
    trail::Path,
};

pub use solve::{solve, Puzzle, PuzzleError, PuzzleResult, Side, Strategy};

pub use report::{Comparison, Report};
