mod canonical;

use rstest::rstest;

////////////////////////////////////////////////////////////////////////////////

fn state(s: &str) -> leap::Configuration {
    s.parse().unwrap()
}

////////////////////////////////////////////////////////////////////////////////

#[rstest]
fn start_is_goal(
    #[values(leap::Strategy::Bfs, leap::Strategy::Dfs)] strategy: leap::Strategy,
    #[values("EEE_WWW", "WWW_EEE", "E_W", "_", "EWEW_")] s: &str,
) {
    let result = leap::solve(&state(s), &state(s), strategy);
    let (path, nodes_visited, max_frontier_size) = result.into_parts();
    assert_eq!(path.unwrap().states(), &[state(s)]);
    assert_eq!(nodes_visited, 1);
    assert_eq!(max_frontier_size, 1);
}

#[rstest]
#[case("EEE_WWW", "WWWW_EE")]
#[case("EEE_WWW", "WWW_EEE_")]
#[case("EEEWWW", "WWWEEE")]
#[case("WWW_EEE", "EEE_WWW")]
fn unreachable(#[case] start: &str, #[case] goal: &str) {
    for strategy in leap::Strategy::ALL {
        let result = leap::solve(&state(start), &state(goal), strategy);
        assert!(result.path.is_none());
        assert!(result.log.nodes_visited > 0);
        assert!(result.log.max_frontier_size >= 1);
        assert!(result.log.max_frontier_size <= 140);
    }
}

#[test]
fn backwards_puzzle_is_stuck() {
    // rabbits never move backwards
    let result = leap::solve(&state("WWW_EEE"), &state("EEE_WWW"), leap::Strategy::Bfs);
    assert!(!result.is_found());
    assert_eq!(result.log.nodes_visited, 1);
}

#[test]
fn result_as_json() {
    let puzzle = leap::Puzzle::parse("E_W", "W_E").unwrap();
    let result = puzzle.solve(leap::Strategy::Bfs, &leap::SearchConfig::unlimited());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "path": ["E_W", "_EW", "WE_", "W_E"],
            "log": { "nodes_visited": 6, "max_frontier_size": 2 },
        })
    );

    let missing = leap::solve(&state("EEWW"), &state("WWEE"), leap::Strategy::Dfs);
    let json = serde_json::to_value(&missing).unwrap();
    assert_eq!(json["path"], serde_json::Value::Null);
}
