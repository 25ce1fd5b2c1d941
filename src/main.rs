use leap::{Comparison, Puzzle, Report, SearchConfig, Strategy};

fn main() {
    let puzzle = Puzzle::canonical();
    let cfg = SearchConfig::unlimited();

    println!(
        "Starting Rabbit Leap puzzle from '{}' to '{}'.\n",
        puzzle.start(),
        puzzle.goal()
    );

    let bfs = puzzle.solve(Strategy::Bfs, &cfg);
    println!("{}", Report::new(Strategy::Bfs, &bfs));

    let dfs = puzzle.solve(Strategy::Dfs, &cfg);
    println!("{}", Report::new(Strategy::Dfs, &dfs));

    print!("{}", Comparison { bfs: &bfs, dfs: &dfs });
}
