//! Executor for running solvers, sequentially or in parallel

use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

use chrono::TimeDelta;
use puzzle_solver::{DynSolver, ParseError, SolverError, SolverRegistry};
use rayon::prelude::*;

use crate::cli::{Args, RunMode};
use crate::error::CliError;
use crate::input::InputStore;

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Result from running a single part
pub struct RunRecord {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Input parse time, shared by all parts of a day
    pub parse: Option<TimeDelta>,
    pub solve: Option<TimeDelta>,
}

pub struct Executor {
    registry: SolverRegistry,
    store: InputStore,
    thread_pool: rayon::ThreadPool,
    mode: RunMode,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, store: InputStore, args: &Args) -> Result<Self, CliError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads.unwrap_or(0))
            .build()
            .map_err(|e| CliError::ThreadPool(e.to_string()))?;

        Ok(Self {
            registry,
            store,
            thread_pool,
            mode: args.mode,
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
        })
    }

    /// Collect work items by filtering registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Restrict parts to the part filter and the solver's own maximum
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Which work items have no input file available
    pub fn missing_inputs(&self) -> Vec<(u16, u8)> {
        self.collect_work_items()
            .iter()
            .filter(|w| !self.store.contains(w.year, w.day))
            .map(|w| (w.year, w.day))
            .collect()
    }

    /// Execute all work items and send a record per part to the channel
    pub fn execute(&self, tx: Sender<RunRecord>) -> Result<(), CliError> {
        let work_items = self.collect_work_items();

        match self.mode {
            RunMode::Sequential => {
                for work in work_items {
                    self.run_work_item(&work, &tx)?;
                }
                Ok(())
            }
            RunMode::Parallel => self.thread_pool.install(|| {
                work_items
                    .into_par_iter()
                    .try_for_each_with(tx, |tx, work| self.run_work_item(&work, tx))
            }),
        }
    }

    /// Run all requested parts of one solver, sending a record per part
    fn run_work_item(&self, work: &WorkItem, tx: &Sender<RunRecord>) -> Result<(), CliError> {
        let input = match self.store.load(work.year, work.day) {
            Ok(input) => input,
            Err(e) => {
                // Missing input yields an error record per requested part.
                let message = format!("input unavailable: {e}");
                for part in work.parts.clone() {
                    let record = RunRecord {
                        year: work.year,
                        day: work.day,
                        part,
                        answer: Err(ParseError::MissingData(message.clone()).into()),
                        parse: None,
                        solve: None,
                    };
                    tx.send(record).map_err(|_| CliError::ChannelClosed)?;
                }
                return Ok(());
            }
        };

        match self.registry.create_solver(work.year, work.day, &input) {
            Ok(mut solver) => {
                for part in work.parts.clone() {
                    tx.send(solve_part(work.year, work.day, part, &mut *solver))
                        .map_err(|_| CliError::ChannelClosed)?;
                }
            }
            Err(e) => {
                let message = e.to_string();
                for part in work.parts.clone() {
                    let record = RunRecord {
                        year: work.year,
                        day: work.day,
                        part,
                        answer: Err(ParseError::Other(message.clone()).into()),
                        parse: None,
                        solve: None,
                    };
                    tx.send(record).map_err(|_| CliError::ChannelClosed)?;
                }
            }
        }
        Ok(())
    }
}

fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> RunRecord {
    match solver.solve(part) {
        Ok(result) => {
            let solve = Some(result.duration());
            RunRecord {
                year,
                day,
                part,
                answer: Ok(result.answer),
                parse: Some(solver.parse_duration()),
                solve,
            }
        }
        Err(e) => RunRecord {
            year,
            day,
            part,
            answer: Err(e.into()),
            parse: Some(solver.parse_duration()),
            solve: None,
        },
    }
}
