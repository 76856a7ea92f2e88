use itertools::Itertools;
use puzzle_solver::{AocParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 9, tags = ["sequences"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| {
                line.split_whitespace()
                    .map(|n| {
                        n.parse()
                            .map_err(|_| ParseError::InvalidFormat(format!("bad number {n:?}")))
                    })
                    .collect()
            })
            .collect()
    }
}

/// Difference pyramid of a history, from the history itself down to the
/// first all-zero row.
fn difference_rows(history: &[i64]) -> Vec<Vec<i64>> {
    let mut rows = vec![history.to_vec()];
    while let Some(last) = rows.last() {
        if last.iter().all(|&v| v == 0) {
            break;
        }
        let next = last.iter().tuple_windows().map(|(a, b)| b - a).collect();
        rows.push(next);
    }
    rows
}

fn extrapolate_next(history: &[i64]) -> i64 {
    difference_rows(history)
        .iter()
        .rev()
        .fold(0, |below, row| row.last().copied().unwrap_or(0) + below)
}

fn extrapolate_previous(history: &[i64]) -> i64 {
    difference_rows(history)
        .iter()
        .rev()
        .fold(0, |below, row| row.first().copied().unwrap_or(0) - below)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Vec<Vec<i64>>) -> Result<String, SolveError> {
        let sum: i64 = shared.iter().map(|history| extrapolate_next(history)).sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Vec<Vec<i64>>) -> Result<String, SolveError> {
        let sum: i64 = shared
            .iter()
            .map(|history| extrapolate_previous(history))
            .sum();
        Ok(sum.to_string())
    }
}
