use std::collections::HashSet;
use std::sync::LazyLock;

use anyhow::anyhow;
use puzzle_solver::{AocParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["scratch-cards"])]
pub struct Solver;

static NUMBERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

#[derive(Debug)]
pub struct ScratchCard {
    /// Count of own numbers that appear among the winning numbers
    matches: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<ScratchCard>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| parse_card(line).map_err(|e| ParseError::InvalidFormat(e.to_string())))
            .collect()
    }
}

fn parse_card(line: &str) -> anyhow::Result<ScratchCard> {
    let (_, numbers) = line
        .split_once(": ")
        .ok_or_else(|| anyhow!("missing ': ' in {line:?}"))?;
    let (winning, own) = numbers
        .split_once(" | ")
        .ok_or_else(|| anyhow!("missing ' | ' in {line:?}"))?;

    let winning: HashSet<u32> = parse_numbers(winning)?.into_iter().collect();
    let matches = parse_numbers(own)?
        .into_iter()
        .filter(|n| winning.contains(n))
        .count();

    Ok(ScratchCard { matches })
}

fn parse_numbers(text: &str) -> anyhow::Result<Vec<u32>> {
    NUMBERS
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .parse()
                .map_err(|_| anyhow!("number out of range: {}", m.as_str()))
        })
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Vec<ScratchCard>) -> Result<String, SolveError> {
        // One point for the first match, doubled for each further match.
        let score: u32 = shared
            .iter()
            .map(|card| match card.matches {
                0 => 0,
                m => 1 << (m - 1),
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Vec<ScratchCard>) -> Result<String, SolveError> {
        // Each card with m matches wins one copy of each of the next m cards.
        let mut counts = vec![1u64; shared.len()];
        for (i, card) in shared.iter().enumerate() {
            for j in i + 1..(i + 1 + card.matches).min(shared.len()) {
                counts[j] += counts[i];
            }
        }
        Ok(counts.iter().sum::<u64>().to_string())
    }
}
