use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::anyhow;
use puzzle_solver::{AocParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::math::lcm_of;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 8, tags = ["network", "cycles"])]
pub struct Solver;

static NODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9A-Z]{3}) = \(([0-9A-Z]{3}), ([0-9A-Z]{3})\)").unwrap());

#[derive(Debug, Clone, Copy)]
enum Step {
    Left,
    Right,
}

#[derive(Debug)]
pub struct Network<'a> {
    steps: Vec<Step>,
    junctions: HashMap<&'a str, (&'a str, &'a str)>,
}

impl Network<'_> {
    /// Walk from `start`, repeating the step sequence, until `is_end` holds.
    fn count_steps(
        &self,
        start: &str,
        is_end: impl Fn(&str) -> bool,
    ) -> Result<u64, SolveError> {
        let mut current = start;
        for (count, step) in self.steps.iter().cycle().enumerate() {
            if is_end(current) {
                return Ok(count as u64);
            }
            let &(left, right) = self
                .junctions
                .get(current)
                .ok_or_else(|| SolveError::failed(format!("node {current:?} is not mapped")))?;
            current = match step {
                Step::Left => left,
                Step::Right => right,
            };
        }
        unreachable!("cycled step iterator never ends")
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_network(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_network(input: &str) -> anyhow::Result<Network<'_>> {
    let (step_line, map_block) = input
        .trim()
        .split_once("\n\n")
        .ok_or_else(|| anyhow!("missing blank line between steps and map"))?;
    let steps = step_line
        .trim()
        .chars()
        .map(|c| match c {
            'L' => Ok(Step::Left),
            'R' => Ok(Step::Right),
            other => Err(anyhow!("invalid step {other:?}")),
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if steps.is_empty() {
        return Err(anyhow!("empty step sequence"));
    }

    let junctions = NODE
        .captures_iter(map_block)
        .map(|captures| {
            let (_, [source, left, right]) = captures.extract();
            (source, (left, right))
        })
        .collect();

    Ok(Network { steps, junctions })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Network) -> Result<String, SolveError> {
        shared
            .count_steps("AAA", |node| node == "ZZZ")
            .map(|steps| steps.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Network) -> Result<String, SolveError> {
        // Each ghost path is periodic, so the paths all line up at the least
        // common multiple of their individual step counts.
        let step_counts = shared
            .junctions
            .keys()
            .filter(|node| node.ends_with('A'))
            .map(|start| shared.count_steps(start, |node| node.ends_with('Z')))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lcm_of(step_counts).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_1_direct_sample() {
        let input = "RL\n\nAAA = (BBB, CCC)\nBBB = (DDD, EEE)\nCCC = (ZZZ, GGG)\nDDD = (DDD, DDD)\nEEE = (EEE, EEE)\nGGG = (GGG, GGG)\nZZZ = (ZZZ, ZZZ)";
        let mut shared = <Solver as AocParser>::parse(input).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "2");
    }

    #[test]
    fn part_1_repeating_sample() {
        let input = "LLR\n\nAAA = (BBB, BBB)\nBBB = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)";
        let mut shared = <Solver as AocParser>::parse(input).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "6");
    }

    #[test]
    fn part_2_sample() {
        let input = "LR\n\n11A = (11B, XXX)\n11B = (XXX, 11Z)\n11Z = (11B, XXX)\n22A = (22B, XXX)\n22B = (22C, 22C)\n22C = (22Z, 22Z)\n22Z = (22B, 22B)\nXXX = (XXX, XXX)";
        let mut shared = <Solver as AocParser>::parse(input).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "6");
    }

    #[test]
    fn unmapped_node_is_an_error() {
        let input = "L\n\nAAA = (BBB, BBB)";
        let mut shared = <Solver as AocParser>::parse(input).unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut shared).is_err());
    }
}
