use indexmap::{IndexMap, IndexSet};
use puzzle_grid::{Adjacency, CellRef, Direction, Grid};
use puzzle_solver::{AocParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["schematic", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<char>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse_chars(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn is_symbol(c: char) -> bool {
    !c.is_ascii_digit() && c != '.'
}

/// Walk west from a digit cell to the first digit of its number.
fn number_start<'g>(cell: CellRef<'g, char>) -> CellRef<'g, char> {
    let mut current = cell;
    while let Some(west) = current.neighbor(Direction::West) {
        if !west.value().is_ascii_digit() {
            break;
        }
        current = west;
    }
    current
}

/// Read the full number by walking east from its first digit.
fn read_number(start: CellRef<'_, char>) -> u32 {
    let mut number = 0u32;
    let mut current = Some(start);
    while let Some(cell) = current {
        let Some(digit) = cell.value().to_digit(10) else {
            break;
        };
        number = number * 10 + digit;
        current = cell.neighbor(Direction::East);
    }
    number
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Grid<char>) -> Result<String, SolveError> {
        // Distinct part numbers, identified by the first digit cell of each.
        let starts: IndexSet<CellRef<char>> = shared
            .cells()
            .filter(|cell| cell.value().is_ascii_digit())
            .filter(|cell| {
                cell.adjacent(Adjacency::Diagonal)
                    .iter()
                    .any(|adjacent| is_symbol(*adjacent.value()))
            })
            .map(number_start)
            .collect();

        let sum: u32 = starts.iter().map(|start| read_number(*start)).sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Grid<char>) -> Result<String, SolveError> {
        // Group part numbers by the gear cell they touch.
        let mut numbers_by_gear: IndexMap<CellRef<char>, IndexSet<CellRef<char>>> =
            IndexMap::new();
        for cell in shared.cells().filter(|cell| cell.value().is_ascii_digit()) {
            for adjacent in cell.adjacent(Adjacency::Diagonal) {
                if *adjacent.value() == '*' {
                    numbers_by_gear
                        .entry(adjacent)
                        .or_default()
                        .insert(number_start(cell));
                }
            }
        }

        // A gear is a '*' adjacent to exactly two part numbers.
        let sum: u32 = numbers_by_gear
            .values()
            .filter(|starts| starts.len() == 2)
            .map(|starts| starts.iter().map(|start| read_number(*start)).product::<u32>())
            .sum();
        Ok(sum.to_string())
    }
}
