use puzzle_solver::{AocParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["calibration"])]
pub struct Solver;

const DIGIT_WORDS: [(&str, u32); 10] = [
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim().lines().collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Vec<&str>) -> Result<String, SolveError> {
        shared
            .iter()
            .map(|line| {
                let mut digits = line.chars().filter_map(|c| c.to_digit(10));
                let first = digits
                    .next()
                    .ok_or_else(|| SolveError::failed(format!("no digit in line {line:?}")))?;
                let last = digits.last().unwrap_or(first);
                Ok(first * 10 + last)
            })
            .sum::<Result<u32, SolveError>>()
            .map(|sum| sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Vec<&str>) -> Result<String, SolveError> {
        shared
            .iter()
            .map(|line| {
                let digits: Vec<u32> = detect_digits(line);
                match (digits.first(), digits.last()) {
                    (Some(first), Some(last)) => Ok(first * 10 + last),
                    _ => Err(SolveError::failed(format!("no digit in line {line:?}"))),
                }
            })
            .sum::<Result<u32, SolveError>>()
            .map(|sum| sum.to_string())
    }
}

/// Detect literal and spelled-out digits at every position, so overlapping
/// words like "twone" yield both 2 and 1.
fn detect_digits(line: &str) -> Vec<u32> {
    (0..line.len())
        .filter_map(|i| {
            let rest = &line[i..];
            if let Some(digit) = rest.chars().next().and_then(|c| c.to_digit(10)) {
                return Some(digit);
            }
            DIGIT_WORDS
                .iter()
                .find(|(word, _)| rest.starts_with(word))
                .map(|&(_, value)| value)
        })
        .collect()
}
