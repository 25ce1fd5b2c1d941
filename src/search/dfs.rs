use std::collections::HashSet;

use crate::puzzle::{moves::successors, state::Configuration};

use super::{
    config::SearchConfig,
    log::SearchLog,
    searcher::{SearchResult, Searcher},
    trail::Trail,
};

////////////////////////////////////////////////////////////////////////////////

/// Depth-first search with an explicit stack.
///
/// Unlike [`super::bfs::BfsSearcher`], states are marked visited when they are
/// popped, so the stack can hold several entries for the same state.
/// Every such entry is counted both in the visited nodes and in the frontier size.
///
/// Successors are pushed in reverse, so they are popped in the order of
/// [`crate::puzzle::moves::Move::ALL`] and the traversal is reproducible.
/// The found path is not necessarily the shortest one.
pub struct DfsSearcher {
    cfg: SearchConfig,
}

impl DfsSearcher {
    pub fn new(cfg: SearchConfig) -> Self {
        Self { cfg }
    }
}

impl Searcher for DfsSearcher {
    fn search(&mut self, start: &Configuration, goal: &Configuration) -> SearchResult {
        let mut log = SearchLog::new();
        let mut trail = Trail::new();

        let mut visited = HashSet::new();
        let mut stack = vec![trail.root(start.clone())];
        log.frontier_size(stack.len());

        while let Some(v) = stack.pop() {
            log.nodes_visited += 1;

            // goal is checked before the visited mark,
            // so the goal is reported even if it was already expanded
            if trail.state(v) == goal {
                return SearchResult::found(trail.path(v), log);
            }

            if !visited.insert(trail.state(v).clone()) {
                continue;
            }

            // check depth restriction
            if self.cfg.depth_exhausted(trail.depth(v)) {
                continue;
            }

            // branch
            let next = successors(trail.state(v));
            for u in next.into_iter().rev() {
                if visited.contains(&u) {
                    continue;
                }
                stack.push(trail.extend(v, u));
                log.frontier_size(stack.len());
            }
        }

        SearchResult::not_found(log)
    }
}
