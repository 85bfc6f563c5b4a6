//! Degrees of separation CLI.
//!
//! # Usage
//!
//! ```bash
//! degrees [DIRECTORY]
//! ```
//!
//! `DIRECTORY` defaults to `large` and must contain `people.csv`,
//! `movies.csv` and `stars.csv`.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use degrees_cli::{Args, CliConfig};

fn main() -> ExitCode {
    let config = CliConfig::from(Args::parse());
    config.tracing.init();

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    match degrees_cli::run(&config, &mut input, &mut output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            degrees_cli::report_failure(&mut output, &mut io::stderr(), &err);
            ExitCode::FAILURE
        }
    }
}
