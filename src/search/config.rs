/// Config of the search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Max number of moves on an expanded path.
    /// States at this depth are still checked against the goal,
    /// but their successors are not explored.
    pub max_depth: Option<usize>,
}

impl SearchConfig {
    /// Explore the whole reachable part of the state graph.
    pub fn unlimited() -> Self {
        Self { max_depth: None }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        SearchConfigBuilder::new().max_depth(max_depth).build()
    }

    pub(crate) fn depth_exhausted(&self, depth: usize) -> bool {
        depth >= self.max_depth.unwrap_or(usize::MAX)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Represents builder for the search config [`SearchConfig`].
#[derive(Default)]
pub struct SearchConfigBuilder {
    max_depth: Option<usize>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn build(self) -> SearchConfig {
        SearchConfig {
            max_depth: self.max_depth,
        }
    }
}
