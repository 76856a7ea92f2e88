//! Output formatting for run records

use chrono::TimeDelta;
use itertools::Itertools;

use crate::executor::RunRecord;

/// Output formatter for run records
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single record
    pub fn print_record(&self, record: &RunRecord) {
        if self.quiet {
            self.print_quiet(record);
        } else {
            self.print_full(record);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, record: &RunRecord) {
        match &record.answer {
            Ok(answer) => println!("{}", answer),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    /// Print full output with timing info
    fn print_full(&self, record: &RunRecord) {
        let prefix = format!("{}/{:02} Part {}", record.year, record.day, record.part);

        match &record.answer {
            Ok(answer) => {
                let parse_timing = record
                    .parse
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                let solve_timing = record
                    .solve
                    .map(format_duration)
                    .unwrap_or_else(|| "N/A".to_string());

                println!("{}: {} ({}solve: {})", prefix, answer, parse_timing, solve_timing);
            }
            Err(e) => {
                eprintln!("{}: Error - {}", prefix, e);
            }
        }
    }

    /// Print a summary after all records.
    ///
    /// Shows both total compute time (sum of per-part durations) and actual
    /// elapsed wall-clock time; in parallel mode the two differ.
    pub fn print_summary(&self, records: &[RunRecord]) {
        if self.quiet {
            return;
        }

        let total = records.len();
        let successes = records.iter().filter(|r| r.answer.is_ok()).count();
        let failures = total - successes;
        let puzzles = records.iter().map(|r| (r.year, r.day)).unique().count();

        // Parse time is counted once per puzzle, not once per part.
        let total_parse_time = records
            .iter()
            .unique_by(|r| (r.year, r.day))
            .filter_map(|r| r.parse)
            .fold(TimeDelta::zero(), |acc, d| acc + d);
        let total_solve_time = records
            .iter()
            .filter_map(|r| r.solve)
            .fold(TimeDelta::zero(), |acc, d| acc + d);
        let total_compute_time = total_parse_time + total_solve_time;
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!(
            "Puzzles: {}, parts: {} solved, {} failed",
            puzzles, successes, failures
        );
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let total_compute_secs =
                total_compute_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = total_compute_secs / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(TimeDelta::microseconds(500)), "500µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::seconds(2)), "2.00s");
        assert_eq!(format_duration(TimeDelta::microseconds(-500)), "-500µs");
    }
}
