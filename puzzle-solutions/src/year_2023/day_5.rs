use std::ops::Range;
use std::sync::LazyLock;

use anyhow::{Context, anyhow};
use itertools::Itertools;
use puzzle_solver::{AocParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["almanac", "intervals"])]
pub struct Solver;

static MAP_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w+)-to-(\w+) map:").unwrap());

#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<i64>,
    layers: Vec<Layer>,
}

#[derive(Debug)]
struct MapRange {
    source: Range<i64>,
    offset: i64,
}

#[derive(Debug)]
struct Layer {
    ranges: Vec<MapRange>,
}

impl Layer {
    fn map_value(&self, value: i64) -> i64 {
        match self.ranges.iter().find(|m| m.source.contains(&value)) {
            Some(m) => value + m.offset,
            None => value,
        }
    }

    /// Map a set of ranges through this layer, splitting each range at the
    /// mapping boundaries it straddles. Unmapped stretches pass through
    /// unchanged.
    fn map_ranges(&self, input: Vec<Range<i64>>) -> Vec<Range<i64>> {
        let mut output = Vec::new();
        let mut pending = input;
        while let Some(range) = pending.pop() {
            if range.is_empty() {
                continue;
            }
            let overlapping = self
                .ranges
                .iter()
                .find(|m| m.source.start < range.end && range.start < m.source.end);
            match overlapping {
                None => output.push(range),
                Some(m) => {
                    let overlap =
                        range.start.max(m.source.start)..range.end.min(m.source.end);
                    output.push(overlap.start + m.offset..overlap.end + m.offset);
                    pending.push(range.start..overlap.start);
                    pending.push(overlap.end..range.end);
                }
            }
        }
        output
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_almanac(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_almanac(input: &str) -> anyhow::Result<Almanac> {
    let mut blocks = input.trim().split("\n\n");
    let seeds = blocks
        .next()
        .and_then(|block| block.strip_prefix("seeds: "))
        .ok_or_else(|| anyhow!("missing 'seeds: ' block"))?
        .split_whitespace()
        .map(|n| n.parse().with_context(|| format!("bad seed {n:?}")))
        .collect::<anyhow::Result<_>>()?;

    let layers = blocks
        .map(|block| {
            let mut lines = block.lines();
            let header = lines.next().ok_or_else(|| anyhow!("empty map block"))?;
            if !MAP_HEADER.is_match(header) {
                return Err(anyhow!("malformed map header {header:?}"));
            }
            let ranges = lines
                .map(|line| {
                    let (destination, source, length) = line
                        .split_whitespace()
                        .map(|n| n.parse::<i64>().with_context(|| format!("bad number {n:?}")))
                        .collect::<anyhow::Result<Vec<_>>>()?
                        .into_iter()
                        .collect_tuple()
                        .ok_or_else(|| anyhow!("expected three numbers in {line:?}"))?;
                    Ok(MapRange {
                        source: source..source + length,
                        offset: destination - source,
                    })
                })
                .collect::<anyhow::Result<_>>()?;
            Ok(Layer { ranges })
        })
        .collect::<anyhow::Result<_>>()?;

    Ok(Almanac { seeds, layers })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Almanac) -> Result<String, SolveError> {
        shared
            .seeds
            .iter()
            .map(|&seed| {
                shared
                    .layers
                    .iter()
                    .fold(seed, |value, layer| layer.map_value(value))
            })
            .min()
            .map(|min| min.to_string())
            .ok_or_else(|| SolveError::failed("no seeds in input"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Almanac) -> Result<String, SolveError> {
        // Seed numbers are range pairs here; mapping whole ranges keeps the
        // search tractable without walking every seed.
        let seed_ranges: Vec<Range<i64>> = shared
            .seeds
            .iter()
            .tuples()
            .map(|(&start, &length)| start..start + length)
            .collect();

        let located = shared
            .layers
            .iter()
            .fold(seed_ranges, |ranges, layer| layer.map_ranges(ranges));

        located
            .iter()
            .map(|range| range.start)
            .min()
            .map(|min| min.to_string())
            .ok_or_else(|| SolveError::failed("no seed ranges in input"))
    }
}
