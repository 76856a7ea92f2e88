use anyhow::{Context, anyhow};
use puzzle_solver::{AocParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["cube-game"])]
pub struct Solver;

#[derive(Debug)]
pub struct Game {
    id: u32,
    /// Maximum count of each color seen in any reveal: (red, green, blue)
    max_seen: (u32, u32, u32),
}

impl Game {
    fn power(&self) -> u32 {
        let (red, green, blue) = self.max_seen;
        red * green * blue
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| parse_game(line).map_err(|e| ParseError::InvalidFormat(e.to_string())))
            .collect()
    }
}

fn parse_game(line: &str) -> anyhow::Result<Game> {
    let (header, reveals) = line
        .split_once(": ")
        .ok_or_else(|| anyhow!("missing ': ' in {line:?}"))?;
    let id = header
        .strip_prefix("Game ")
        .ok_or_else(|| anyhow!("missing 'Game ' prefix in {header:?}"))?
        .parse()
        .with_context(|| format!("bad game id in {header:?}"))?;

    let mut max_seen = (0u32, 0u32, 0u32);
    for cube in reveals.split("; ").flat_map(|reveal| reveal.split(", ")) {
        let (amount, color) = cube
            .split_once(' ')
            .ok_or_else(|| anyhow!("malformed cube count {cube:?}"))?;
        let amount: u32 = amount
            .parse()
            .with_context(|| format!("bad amount in {cube:?}"))?;
        match color {
            "red" => max_seen.0 = max_seen.0.max(amount),
            "green" => max_seen.1 = max_seen.1.max(amount),
            "blue" => max_seen.2 = max_seen.2.max(amount),
            other => return Err(anyhow!("unknown cube color {other:?}")),
        }
    }

    Ok(Game { id, max_seen })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Vec<Game>) -> Result<String, SolveError> {
        // A game is possible with at most 12 red, 13 green and 14 blue cubes.
        let sum: u32 = shared
            .iter()
            .filter(|game| {
                let (red, green, blue) = game.max_seen;
                red <= 12 && green <= 13 && blue <= 14
            })
            .map(|game| game.id)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Vec<Game>) -> Result<String, SolveError> {
        Ok(shared.iter().map(Game::power).sum::<u32>().to_string())
    }
}
