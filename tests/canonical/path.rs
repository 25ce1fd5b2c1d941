use leap::{Move, Puzzle, SearchConfig, Strategy};

////////////////////////////////////////////////////////////////////////////////

#[test]
fn bfs_is_optimal() {
    let result = Puzzle::canonical().solve(Strategy::Bfs, &SearchConfig::unlimited());
    let path = result.path.unwrap();
    assert_eq!(path.len(), 16);
    assert_eq!(path.moves(), 15);
    assert!(result.log.nodes_visited >= path.len());
    assert!(result.log.nodes_visited <= 140);
}

#[test]
fn every_step_is_one_move() {
    let puzzle = Puzzle::canonical();
    for strategy in Strategy::ALL {
        let path = puzzle
            .solve(strategy, &SearchConfig::unlimited())
            .path
            .unwrap();
        assert_eq!(path.start(), Some(puzzle.start()));
        assert_eq!(path.end(), Some(puzzle.goal()));

        let states = path.states();
        for w in states.windows(2) {
            assert!(leap::successors(&w[0]).contains(&w[1]));
            assert!(Move::between(&w[0], &w[1]).is_some());
        }

        // no configuration repeats
        let mut sorted = states.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), states.len());
    }
}

#[test]
fn moves_of_solution() {
    let path = Puzzle::canonical()
        .solve(Strategy::Bfs, &SearchConfig::unlimited())
        .path
        .unwrap();
    let slides = path
        .labeled()
        .filter(|(_, m)| matches!(m, Some(Move::SlideRight | Move::SlideLeft)))
        .count();
    let jumps = path
        .labeled()
        .filter(|(_, m)| matches!(m, Some(Move::JumpRight | Move::JumpLeft)))
        .count();

    // n(n+2) moves for n rabbits a side: 2n slides and n^2 jumps
    assert_eq!(slides, 6);
    assert_eq!(jumps, 9);
}
