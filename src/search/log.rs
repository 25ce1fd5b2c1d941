use std::fmt::{Debug, Display};

use serde::Serialize;

////////////////////////////////////////////////////////////////////////////////

/// Represents log of the search,
/// which is returned after search is complete.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchLog {
    /// Number of entries taken from the frontier.
    pub nodes_visited: usize,

    /// Max number of entries the frontier held at once.
    pub max_frontier_size: usize,
}

impl SearchLog {
    pub(crate) fn new() -> Self {
        Default::default()
    }

    pub(crate) fn frontier_size(&mut self, size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(size);
    }
}

impl Display for SearchLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Nodes visited: {}, max frontier size: {}",
            self.nodes_visited, self.max_frontier_size
        )
    }
}

impl Debug for SearchLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
