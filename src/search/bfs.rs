use std::collections::{HashSet, VecDeque};

use crate::puzzle::{moves::successors, state::Configuration};

use super::{
    config::SearchConfig,
    log::SearchLog,
    searcher::{SearchResult, Searcher},
    trail::Trail,
};

////////////////////////////////////////////////////////////////////////////////

/// Breadth-first search.
///
/// States are marked visited when they are enqueued,
/// so every state enters the queue at most once and
/// the found path has the minimal number of moves.
pub struct BfsSearcher {
    cfg: SearchConfig,
}

impl BfsSearcher {
    pub fn new(cfg: SearchConfig) -> Self {
        Self { cfg }
    }
}

impl Searcher for BfsSearcher {
    fn search(&mut self, start: &Configuration, goal: &Configuration) -> SearchResult {
        let mut log = SearchLog::new();
        let mut trail = Trail::new();

        let mut visited = HashSet::from([start.clone()]);
        let mut queue = VecDeque::from([trail.root(start.clone())]);
        log.frontier_size(queue.len());

        while let Some(v) = queue.pop_front() {
            log.nodes_visited += 1;

            // check goal achieved
            if trail.state(v) == goal {
                return SearchResult::found(trail.path(v), log);
            }

            // check depth restriction
            if self.cfg.depth_exhausted(trail.depth(v)) {
                continue;
            }

            // branch
            let next = successors(trail.state(v));
            for u in next {
                if visited.insert(u.clone()) {
                    queue.push_back(trail.extend(v, u));
                    log.frontier_size(queue.len());
                }
            }
        }

        SearchResult::not_found(log)
    }
}
