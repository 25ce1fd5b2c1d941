use serde::Serialize;

use crate::puzzle::state::Configuration;

use super::{log::SearchLog, trail::Path};

////////////////////////////////////////////////////////////////////////////////

/// Outcome of one search run.
///
/// The goal being unreachable is a regular outcome:
/// `path` is `None` and the log describes the full exploration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Path from the start to the goal, if the goal was reached.
    pub path: Option<Path>,

    /// Search metrics.
    pub log: SearchLog,
}

impl SearchResult {
    pub(crate) fn found(path: Path, log: SearchLog) -> Self {
        Self {
            path: Some(path),
            log,
        }
    }

    pub(crate) fn not_found(log: SearchLog) -> Self {
        Self { path: None, log }
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Returns path, number of visited nodes and max frontier size.
    pub fn into_parts(self) -> (Option<Path>, usize, usize) {
        (
            self.path,
            self.log.nodes_visited,
            self.log.max_frontier_size,
        )
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Strategy of exploring the state graph induced by
/// [`crate::puzzle::moves::successors`].
pub trait Searcher {
    /// Looks for a path from `start` to `goal`.
    fn search(&mut self, start: &Configuration, goal: &Configuration) -> SearchResult;
}
