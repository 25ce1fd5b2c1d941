//! Search of the path between two configurations.

pub mod bfs;
pub mod config;
pub mod dfs;
pub mod log;
pub mod searcher;
pub mod trail;

////////////////////////////////////////////////////////////////////////////////
