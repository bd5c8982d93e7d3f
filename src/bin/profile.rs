//! Solves a fixed range of board sizes so that `--features hotpath` can report
//! where the search spends its time.

use queens_no_three::solver::Solver;

const MAX_SIZE: u16 = 14;

#[cfg_attr(feature = "hotpath", hotpath::main)]
fn main() {
    for size in 1..=MAX_SIZE {
        let mut solver = Solver::new(size);
        let solution = solver.find_solution();
        let stats = solver.stats();
        match solution {
            Some(solution) => println!(
                "{:>2}: {:?} (commits {}, backtracks {})",
                size,
                solution.rows(),
                stats.commits,
                stats.backtracks
            ),
            None => println!(
                "{:>2}: no solution (commits {}, backtracks {})",
                size, stats.commits, stats.backtracks
            ),
        }
    }
}
