//! Command-line arguments and run configuration.

use std::path::PathBuf;

use clap::Parser;
use degrees_search::SearchLimits;
use tracing::Level;

use crate::logging::{TracingConfig, TracingFormat};

/// Find the degrees of separation between two people.
#[derive(Debug, Parser)]
#[command(name = "degrees", version, about)]
pub struct Args {
    /// Directory containing people.csv, movies.csv and stars.csv.
    #[arg(env = "DEGREES_DATA", default_value = "large")]
    pub directory: PathBuf,

    /// Name of the first person (prompted for when omitted).
    #[arg(long, value_name = "NAME")]
    pub source: Option<String>,

    /// Name of the second person (prompted for when omitted).
    #[arg(long, value_name = "NAME")]
    pub target: Option<String>,

    /// Give up after expanding this many people.
    #[arg(long, value_name = "N")]
    pub max_expanded: Option<usize>,

    /// Report "Not connected." for connections longer than this.
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Maximum log level.
    #[arg(long, env = "DEGREES_LOG_LEVEL", default_value = "warn")]
    pub log_level: Level,

    /// Log output format.
    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: TracingFormat,

    /// Per-target log filter, e.g. `degrees_search=debug`.
    #[arg(long, env = "DEGREES_LOG", value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Log span enter and exit events.
    #[arg(long)]
    pub log_spans: bool,
}

/// Everything a run needs, independent of how it was parsed.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory to load.
    pub data_dir: PathBuf,
    /// First person's name, if given up front.
    pub source: Option<String>,
    /// Second person's name, if given up front.
    pub target: Option<String>,
    /// Bounds applied to the search.
    pub limits: SearchLimits,
    /// Log subscriber settings.
    pub tracing: TracingConfig,
}

impl CliConfig {
    /// Creates a configuration for `data_dir` with prompted names and no
    /// limits.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            source: None,
            target: None,
            limits: SearchLimits::default(),
            tracing: TracingConfig::default(),
        }
    }

    /// Sets both names so no prompting is needed.
    #[must_use]
    pub fn with_names(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self.target = Some(target.into());
        self
    }

    /// Sets the search limits.
    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl From<Args> for CliConfig {
    fn from(args: Args) -> Self {
        let mut limits = SearchLimits::new();
        limits.max_expanded = args.max_expanded;
        limits.max_depth = args.max_depth;

        let mut tracing = TracingConfig::new()
            .with_level(args.log_level)
            .with_format(args.log_format)
            .with_span_events(args.log_spans);
        if let Some(filter) = args.log_filter {
            tracing = tracing.with_env_filter(filter);
        }

        Self {
            data_dir: args.directory,
            source: args.source,
            target: args.target,
            limits,
            tracing,
        }
    }
}
