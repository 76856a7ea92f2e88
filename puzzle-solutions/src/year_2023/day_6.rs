use anyhow::anyhow;
use itertools::Itertools;
use puzzle_solver::{AocParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 6, tags = ["races"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct RaceRecord {
    time: u64,
    distance: u64,
}

impl RaceRecord {
    /// Count the hold times that make the boat beat the record distance.
    ///
    /// The travelled distance `h * (time - h)` is symmetric around
    /// `time / 2`, so a binary search for the first winning hold time on the
    /// left half determines the whole winning window.
    fn ways_to_win(self) -> u64 {
        let beats = |hold: u64| hold * (self.time - hold) > self.distance;

        let mut lo = 0;
        let mut hi = self.time / 2 + 1;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if beats(mid) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        if hi > self.time || !beats(hi) {
            return 0;
        }
        self.time + 1 - 2 * hi
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<RaceRecord>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_records(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_records(input: &str) -> anyhow::Result<Vec<RaceRecord>> {
    let (time_line, distance_line) = input
        .trim()
        .lines()
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected exactly two lines"))?;
    let times = parse_line(time_line, "Time:")?;
    let distances = parse_line(distance_line, "Distance:")?;
    if times.len() != distances.len() {
        return Err(anyhow!("time and distance counts differ"));
    }
    Ok(times
        .into_iter()
        .zip(distances)
        .map(|(time, distance)| RaceRecord { time, distance })
        .collect())
}

fn parse_line(line: &str, prefix: &str) -> anyhow::Result<Vec<u64>> {
    line.strip_prefix(prefix)
        .ok_or_else(|| anyhow!("missing {prefix:?} prefix in {line:?}"))?
        .split_whitespace()
        .map(|n| n.parse().map_err(|_| anyhow!("bad number {n:?}")))
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Vec<RaceRecord>) -> Result<String, SolveError> {
        let product: u64 = shared.iter().map(|record| record.ways_to_win()).product();
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Vec<RaceRecord>) -> Result<String, SolveError> {
        // The separate numbers are really one big number with bad kerning.
        let merged = shared
            .iter()
            .fold(RaceRecord { time: 0, distance: 0 }, |merged, record| {
                RaceRecord {
                    time: shift_digits(merged.time, record.time),
                    distance: shift_digits(merged.distance, record.distance),
                }
            });
        Ok(merged.ways_to_win().to_string())
    }
}

fn shift_digits(left: u64, right: u64) -> u64 {
    let mut scale = 10;
    while scale <= right {
        scale *= 10;
    }
    left * scale + right
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Time:      7  15   30\nDistance:  9  40  200";

    #[test]
    fn part_1_sample() {
        let mut shared = <Solver as AocParser>::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "288");
    }

    #[test]
    fn part_2_sample() {
        let mut shared = <Solver as AocParser>::parse(SAMPLE).unwrap();
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "71503"
        );
    }

    #[test]
    fn unbeatable_record_has_no_wins() {
        let record = RaceRecord {
            time: 4,
            distance: 100,
        };
        assert_eq!(record.ways_to_win(), 0);
    }

    #[test]
    fn digit_concatenation() {
        assert_eq!(shift_digits(7, 15), 715);
        assert_eq!(shift_digits(715, 30), 71530);
        assert_eq!(shift_digits(0, 9), 9);
    }
}
