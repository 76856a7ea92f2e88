//! Command-line interface for running puzzle solvers

mod cli;
mod error;
mod executor;
mod input;
mod output;

// Import puzzle-solutions to link the solver plugins
use puzzle_solutions as _;

use clap::Parser;
use puzzle_solver::{SolverRegistry, SolverRegistryBuilder};

use cli::Args;
use error::CliError;
use executor::{Executor, RunRecord};
use input::InputStore;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let registry = build_registry(&args.tags)?;
    let store = InputStore::new(
        args.input_dir
            .clone()
            .unwrap_or_else(InputStore::default_root),
    );
    let quiet = args.quiet;

    let executor = Executor::new(registry, store, &args)?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing_inputs = executor.missing_inputs();
    if !missing_inputs.is_empty() && !quiet {
        println!("Missing {} input file(s):", missing_inputs.len());
        for (year, day) in &missing_inputs {
            println!("  - {}/day{:02}", year, day);
        }
    }

    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let formatter = OutputFormatter::new(quiet);

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let mut records: Vec<RunRecord> = rx.into_iter().collect();
    records.sort_by_key(|r| (r.year, r.day, r.part));

    executor_handle
        .join()
        .map_err(|_| CliError::ExecutorPanicked)??;

    for record in &records {
        formatter.print_record(record);
    }
    formatter.print_summary(&records);

    Ok(())
}

/// Build the registry, filtering solvers by tags when given
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins_where(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
