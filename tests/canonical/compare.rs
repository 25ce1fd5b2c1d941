use leap::{BfsSearcher, DfsSearcher, Puzzle, SearchConfig, Searcher};

////////////////////////////////////////////////////////////////////////////////

#[test]
fn dfs_against_bfs() {
    let puzzle = Puzzle::canonical();
    let bfs = BfsSearcher::new(SearchConfig::unlimited()).search(puzzle.start(), puzzle.goal());
    let dfs = DfsSearcher::new(SearchConfig::unlimited()).search(puzzle.start(), puzzle.goal());

    let bfs_path = bfs.path.unwrap();
    let dfs_path = dfs.path.unwrap();
    assert_eq!(dfs_path.end(), Some(puzzle.goal()));
    assert!(dfs_path.len() >= bfs_path.len());
    assert!(dfs.log.max_frontier_size <= bfs.log.max_frontier_size);
}

#[test]
fn repeated_runs_are_identical() {
    let puzzle = Puzzle::canonical();
    let mut bfs = BfsSearcher::new(SearchConfig::unlimited());
    let mut dfs = DfsSearcher::new(SearchConfig::unlimited());
    let searchers: [&mut dyn Searcher; 2] = [&mut bfs, &mut dfs];
    for searcher in searchers {
        let first = searcher.search(puzzle.start(), puzzle.goal());
        let second = searcher.search(puzzle.start(), puzzle.goal());
        assert_eq!(first, second);
    }
}
