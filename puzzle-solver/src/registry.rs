//! Registry of solvers keyed by year and day.
//!
//! Solvers are registered into a [`SolverRegistryBuilder`], either manually
//! with a factory closure or in bulk from the plugins collected by
//! [`inventory`]. Building produces an immutable [`SolverRegistry`] that
//! creates [`DynSolver`] instances on demand.

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// First supported puzzle year
pub const BASE_YEAR: u16 = 2015;
/// Number of years the registry can hold
pub const MAX_YEARS: u16 = 20;
/// Days per puzzle year
pub const DAYS_PER_YEAR: u8 = 25;

const CAPACITY: usize = MAX_YEARS as usize * DAYS_PER_YEAR as usize;

/// Map a year-day pair to a flat slot index, if in range.
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if !(BASE_YEAR..BASE_YEAR + MAX_YEARS).contains(&year) {
        return None;
    }
    if !(1..=DAYS_PER_YEAR).contains(&day) {
        return None;
    }
    Some((year - BASE_YEAR) as usize * DAYS_PER_YEAR as usize + (day - 1) as usize)
}

/// Inverse of [`calc_index`].
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR as usize) as u16;
    let day = (index % DAYS_PER_YEAR as usize) as u8 + 1;
    (year, day)
}

/// Factory producing a type-erased solver instance from raw input.
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// Puzzle year
    pub year: u16,
    /// Day number
    pub day: u8,
    /// Number of parts the solver supports
    pub parts: u8,
}

struct FactoryEntry {
    info: FactoryInfo,
    factory: SolverFactory,
}

/// Builder for a [`SolverRegistry`].
///
/// # Example
///
/// ```
/// use puzzle_solver::SolverRegistryBuilder;
///
/// let registry = SolverRegistryBuilder::new()
///     .register_all_plugins()
///     .expect("no duplicate registrations")
///     .build();
/// ```
pub struct SolverRegistryBuilder {
    entries: Vec<Option<FactoryEntry>>,
}

impl SolverRegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a factory for a year-day slot.
    pub fn register_factory(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: SolverFactory,
    ) -> Result<Self, RegistrationError> {
        let index =
            calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        let slot = &mut self.entries[index];
        if slot.is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        *slot = Some(FactoryEntry {
            info: FactoryInfo { year, day, parts },
            factory,
        });
        Ok(self)
    }

    /// Register every solver submitted through [`SolverPlugin`].
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins_where(|_| true)
    }

    /// Register submitted solvers whose plugin record passes the filter.
    pub fn register_plugins_where(
        mut self,
        mut filter: impl FnMut(&SolverPlugin) -> bool,
    ) -> Result<Self, RegistrationError> {
        for plugin in inventory::iter::<SolverPlugin> {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finish building.
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable solver registry.
pub struct SolverRegistry {
    entries: Vec<Option<FactoryEntry>>,
}

impl SolverRegistry {
    /// Metadata for every registered solver, ordered by year then day.
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().filter_map(|e| e.as_ref().map(|e| e.info))
    }

    /// Metadata for one slot, if registered.
    pub fn info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        let index = calc_index(year, day)?;
        self.entries[index].as_ref().map(|e| e.info)
    }

    /// Whether a solver is registered for the slot.
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.info(year, day).is_some()
    }

    /// Number of registered solvers.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Whether the registry has no solvers at all.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }

    /// Parse the input with the registered solver and return an instance.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;
        let entry = self.entries[index]
            .as_ref()
            .ok_or(SolverError::NotFound(year, day))?;
        Ok((entry.factory)(input)?)
    }
}

/// A solver type that knows how to register itself into a builder.
///
/// Blanket-implemented for every [`Solver`]; exists so plugin records can
/// hold `&'static dyn RegisterableSolver` without naming concrete types.
pub trait RegisterableSolver: Sync {
    /// Register this solver for the given year and day.
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    /// Number of parts the solver supports
    fn parts(&self) -> u8;
}

impl<S: Solver + Sync + 'static> RegisterableSolver for S {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_factory(
            year,
            day,
            S::PARTS,
            Box::new(move |input| {
                let instance = SolverInstance::<S>::new(year, day, input)?;
                Ok(Box::new(instance) as Box<dyn DynSolver + '_>)
            }),
        )
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Registration record submitted through [`inventory`].
///
/// Usually emitted by the `AutoRegisterSolver` derive rather than written by
/// hand.
pub struct SolverPlugin {
    /// Puzzle year
    pub year: u16,
    /// Day number
    pub day: u8,
    /// The solver to register
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels used for filtered registration
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Submit a solver for automatic registration without the derive macro.
///
/// The solver expression must be const-constructible, since submissions are
/// evaluated at link time.
#[macro_export]
macro_rules! register_solver {
    ($solver:expr, year = $year:expr, day = $day:expr) => {
        $crate::register_solver!($solver, year = $year, day = $day, tags = []);
    };
    ($solver:expr, year = $year:expr, day = $day:expr, tags = [$($tag:expr),* $(,)?]) => {
        $crate::inventory::submit! {
            $crate::SolverPlugin {
                year: $year,
                day: $day,
                solver: &$solver,
                tags: &[$($tag),*],
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::solver::{AocParser, PartSolver, Solver};
    use crate::SolveError;

    struct Doubler;

    impl AocParser for Doubler {
        type SharedData<'a> = i64;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat("expected an integer".into()))
        }
    }

    impl PartSolver<1> for Doubler {
        fn solve(shared: &mut i64) -> Result<String, SolveError> {
            Ok((*shared * 2).to_string())
        }
    }

    impl Solver for Doubler {
        const PARTS: u8 = 1;

        fn solve_part(shared: &mut i64, part: u8) -> Result<String, SolveError> {
            match part {
                1 => <Self as PartSolver<1>>::solve(shared),
                other => Err(SolveError::PartNotImplemented(other)),
            }
        }
    }

    fn builder_with_doubler(
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        Doubler.register_with(SolverRegistryBuilder::new(), year, day)
    }

    #[test]
    fn index_round_trip() {
        for year in BASE_YEAR..BASE_YEAR + MAX_YEARS {
            for day in 1..=DAYS_PER_YEAR {
                let index = calc_index(year, day).unwrap();
                assert_eq!(from_index(index), (year, day));
            }
        }
    }

    #[test]
    fn out_of_range_slots_rejected() {
        assert!(calc_index(BASE_YEAR - 1, 1).is_none());
        assert!(calc_index(BASE_YEAR + MAX_YEARS, 1).is_none());
        assert!(calc_index(BASE_YEAR, 0).is_none());
        assert!(calc_index(BASE_YEAR, DAYS_PER_YEAR + 1).is_none());
    }

    #[test]
    fn register_and_solve() {
        let registry = builder_with_doubler(2023, 1).unwrap().build();
        assert!(registry.contains(2023, 1));
        assert_eq!(registry.len(), 1);

        let mut solver = registry.create_solver(2023, 1, "21").unwrap();
        assert_eq!(solver.year(), 2023);
        assert_eq!(solver.day(), 1);
        assert_eq!(solver.parts(), 1);
        assert_eq!(solver.solve(1).unwrap().answer, "42");
    }

    #[test]
    fn duplicate_registration_rejected() {
        let builder = builder_with_doubler(2023, 1).unwrap();
        let err = Doubler.register_with(builder, 2023, 1).err().unwrap();
        assert!(matches!(
            err,
            RegistrationError::DuplicateSolver(2023, 1)
        ));
    }

    #[test]
    fn invalid_year_day_rejected() {
        let err = builder_with_doubler(1999, 1).err().unwrap();
        assert!(matches!(
            err,
            RegistrationError::InvalidYearDay(1999, 1)
        ));
    }

    #[test]
    fn missing_solver_reported() {
        let registry = SolverRegistryBuilder::new().build();
        assert!(registry.is_empty());
        let err = registry.create_solver(2023, 1, "").err().unwrap();
        assert!(matches!(err, SolverError::NotFound(2023, 1)));
    }

    #[test]
    fn parse_failure_surfaces() {
        let registry = builder_with_doubler(2023, 1).unwrap().build();
        let err = registry.create_solver(2023, 1, "not a number").err().unwrap();
        assert!(matches!(err, SolverError::Parse(_)));
    }

    #[test]
    fn part_out_of_range_surfaces() {
        let registry = builder_with_doubler(2023, 1).unwrap().build();
        let mut solver = registry.create_solver(2023, 1, "1").unwrap();
        assert!(matches!(solver.solve(2), Err(SolveError::PartOutOfRange(2))));
        assert!(matches!(solver.solve(0), Err(SolveError::PartOutOfRange(0))));
    }
}
