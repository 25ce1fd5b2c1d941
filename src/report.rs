//! Human readable rendering of the search results.

use std::fmt::Display;

use colored::Colorize;

use crate::{search::searcher::SearchResult, solve::Strategy};

////////////////////////////////////////////////////////////////////////////////

/// Result of one strategy, ready to be printed.
pub struct Report<'a> {
    pub strategy: Strategy,
    pub result: &'a SearchResult,
}

impl<'a> Report<'a> {
    pub fn new(strategy: Strategy, result: &'a SearchResult) -> Self {
        Self { strategy, result }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{}",
            format!("--- {} Solution ---", self.strategy).bold()
        )?;
        match self.result.path.as_ref() {
            Some(path) => {
                writeln!(f, "{}", "Solution found!".green())?;
                for (i, (state, m)) in path.labeled().enumerate() {
                    match m {
                        Some(m) => {
                            writeln!(f, "Step {}: {}  {}", i, state, m.to_string().dimmed())?
                        }
                        None => writeln!(f, "Step {}: {}", i, state)?,
                    }
                }
                writeln!(f)?;
                writeln!(f, "{}", "--- Performance Metrics ---".bold())?;
                writeln!(f, "Total Nodes Visited: {}", self.result.log.nodes_visited)?;
                writeln!(
                    f,
                    "Max Size of Queue/Stack: {}",
                    self.result.log.max_frontier_size
                )?;
                writeln!(f, "Number of Nodes in Solution Path: {}", path.len())?;
            }
            None => writeln!(f, "{}", "No solution found.".red())?,
        }
        writeln!(f, "{}", "-".repeat(25))
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Side by side summary of both strategies.
pub struct Comparison<'a> {
    pub bfs: &'a SearchResult,
    pub dfs: &'a SearchResult,
}

impl Display for Comparison<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", "--- Overall Comparison ---".bold())?;
        let (Some(bfs), Some(dfs)) = (self.bfs.path.as_ref(), self.dfs.path.as_ref()) else {
            return writeln!(f, "{}", "Could not find solutions to compare.".red());
        };
        for (strategy, path) in [(Strategy::Bfs, bfs), (Strategy::Dfs, dfs)] {
            writeln!(
                f,
                "{} Solution Length: {} nodes ({} steps)",
                strategy,
                path.len(),
                path.moves()
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "BFS guarantees an optimal solution in terms of path length."
        )?;
        if dfs.len() == bfs.len() {
            writeln!(
                f,
                "DFS is more memory-efficient but does not guarantee optimality, \
                 though in this case it found an optimal path."
            )
        } else {
            writeln!(
                f,
                "DFS is more memory-efficient but does not guarantee optimality, \
                 and in this case the paths differ by {} steps.",
                dfs.moves().abs_diff(bfs.moves())
            )
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
