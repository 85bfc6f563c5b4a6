//! Command-line tool reporting the degrees of separation between two people
//! (Layer 3).
//!
//! The tool loads a data directory, asks for two names (resolving duplicate
//! names interactively), runs a shortest-path search, and prints each hop.
//!
//! # Usage
//!
//! ```bash
//! degrees [DIRECTORY] [--source NAME] [--target NAME]
//! ```
//!
//! # Example
//!
//! ```bash
//! degrees data/small --source "Tom Cruise" --target "Tom Hanks"
//! ```

use std::io::{BufRead, Write};

use degrees_data::{Database, load_dir, resolve_person};
use degrees_search::SearchEngine;

/// Command-line arguments and run configuration.
pub mod config;

/// Error types for the command-line tool.
pub mod error;

/// Tracing subscriber setup.
pub mod logging;

/// Interactive prompts.
pub mod prompt;

/// Result formatting.
pub mod report;

pub use config::{Args, CliConfig};
pub use error::CliError;

/// Runs one lookup: load, resolve both names, search, report.
///
/// Prompts are read from `input` and everything user-facing is written to
/// `output`. Returns the degree of separation, or `None` when the two people
/// are not connected.
///
/// # Errors
///
/// Returns [`CliError`] if loading fails, a name does not resolve, the search
/// hits its limits, or I/O fails.
pub fn run<R: BufRead, W: Write>(
    config: &CliConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Option<usize>, CliError> {
    writeln!(output, "Loading data...")?;
    let (db, _summary) = load_dir(&config.data_dir)?;
    writeln!(output, "Data loaded.")?;

    let source = person_id(&db, config.source.as_deref(), input, output)?;
    let target = person_id(&db, config.target.as_deref(), input, output)?;

    let outcome = SearchEngine::new(&db)
        .with_limits(config.limits)
        .shortest_path_with_stats(&source, &target)?;
    tracing::info!(
        %source,
        %target,
        degrees = ?outcome.degrees(),
        expanded = outcome.stats.nodes_expanded,
        "search finished"
    );

    report::write_report(output, &db, &source, outcome.path.as_deref())?;
    Ok(outcome.degrees())
}

/// Flushes `output` and writes `err` to `errors`.
///
/// Failures here are only logged, since the run has already failed.
pub fn report_failure<W: Write, E: Write>(output: &mut W, errors: &mut E, err: &CliError) {
    if let Err(flush_err) = output.flush() {
        tracing::debug!(error = %flush_err, "failed to flush output");
    }
    if let Err(write_err) = writeln!(errors, "{err}") {
        tracing::debug!(error = %write_err, "failed to write error message");
    }
}

/// Resolves a preset name, or prompts for one.
fn person_id<R: BufRead, W: Write>(
    db: &Database,
    preset: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> Result<String, CliError> {
    let name = match preset {
        Some(name) => name.to_owned(),
        None => prompt::read_line(input, output, "Name: ")?,
    };

    let mut prompt_error = None;
    let resolved = resolve_person(db, &name, |candidates| {
        prompt::choose_candidate(input, output, &name, candidates).unwrap_or_else(|err| {
            prompt_error = Some(err);
            None
        })
    });

    if let Some(err) = prompt_error {
        return Err(err.into());
    }
    Ok(resolved?)
}
