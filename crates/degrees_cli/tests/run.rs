//! End-to-end runs against the `data/small` dataset.
//!
//! These tests drive [`degrees_cli::run`] with scripted input and check the
//! exact report text.

use std::io::Cursor;
use std::path::PathBuf;

use degrees_cli::{CliConfig, CliError};
use degrees_data::{LoadError, ResolveError};
use degrees_search::{SearchError, SearchLimits};

fn small() -> CliConfig {
    CliConfig::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/small"))
}

fn run(config: &CliConfig, input: &str) -> (Result<Option<usize>, CliError>, String) {
    let mut input = Cursor::new(input.to_owned());
    let mut output = Vec::new();
    let result = degrees_cli::run(config, &mut input, &mut output);
    (result, String::from_utf8(output).unwrap())
}

// ─────────────────────────────────────────────────────────────────────────────
// Connected pairs
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn preset_names_print_each_hop() {
    let config = small().with_names("Tom Cruise", "Tom Hanks");
    let (result, output) = run(&config, "");

    assert_eq!(result.unwrap(), Some(2));
    assert_eq!(
        output,
        "Loading data...\n\
         Data loaded.\n\
         2 degrees of separation.\n\
         1: Tom Cruise and Kevin Bacon starred in A Few Good Men\n\
         2: Kevin Bacon and Tom Hanks starred in Apollo 13\n"
    );
}

#[test]
fn prompted_names() {
    let (result, output) = run(&small(), "Demi Moore\njack nicholson\n");

    assert_eq!(result.unwrap(), Some(1));
    assert!(output.contains("Name: Name: 1 degrees of separation.\n"));
    assert!(output.ends_with("1: Demi Moore and Jack Nicholson starred in A Few Good Men\n"));
}

#[test]
fn same_person_is_zero_degrees() {
    let config = small().with_names("Sally Field", "sally field");
    let (result, output) = run(&config, "");

    assert_eq!(result.unwrap(), Some(0));
    assert!(output.ends_with("0 degrees of separation.\n"));
}

#[test]
fn duplicate_name_is_disambiguated() {
    let (result, output) = run(&small(), "Kevin Bacon\n102\nBill Paxton\n");

    assert_eq!(result.unwrap(), Some(1));
    assert!(output.contains(
        "Which 'Kevin Bacon'?\n\
         ID: 1000001, Name: Kevin Bacon, Birth: \n\
         ID: 102, Name: Kevin Bacon, Birth: 1958\n\
         Intended Person ID: "
    ));
    assert!(output.ends_with("1: Kevin Bacon and Bill Paxton starred in Apollo 13\n"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Failures
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn isolated_person_is_not_connected() {
    let config = small().with_names("Tom Hanks", "Emma Watson");
    let (result, output) = run(&config, "");

    assert_eq!(result.unwrap(), None);
    assert!(output.ends_with("Not connected.\n"));
}

#[test]
fn unknown_name_is_person_not_found() {
    let (result, _) = run(&small(), "Nobody At All\n");
    let err = result.unwrap_err();

    assert_eq!(err.to_string(), "Person not found.");
    assert!(matches!(
        err,
        CliError::PersonNotFound(ResolveError::NotFound(name)) if name == "Nobody At All"
    ));
}

#[test]
fn bad_disambiguation_choice_is_person_not_found() {
    let (result, _) = run(&small(), "Kevin Bacon\n158\n");
    assert!(matches!(
        result,
        Err(CliError::PersonNotFound(ResolveError::InvalidChoice { .. }))
    ));

    let (result, _) = run(&small(), "Kevin Bacon\n\n");
    assert!(matches!(
        result,
        Err(CliError::PersonNotFound(ResolveError::Ambiguous { candidates: 2, .. }))
    ));
}

#[test]
fn expansion_limit_is_reported() {
    let config = small()
        .with_names("Valeria Golino", "Cary Elwes")
        .with_limits(SearchLimits::new().with_max_expanded(2));
    let (result, _) = run(&config, "");

    assert!(matches!(
        result,
        Err(CliError::Search(SearchError::LimitExceeded { max: 2, .. }))
    ));
}

#[test]
fn depth_limit_reports_not_connected() {
    let config = small()
        .with_names("Valeria Golino", "Cary Elwes")
        .with_limits(SearchLimits::new().with_max_depth(4));
    let (result, output) = run(&config, "");

    assert_eq!(result.unwrap(), None);
    assert!(output.ends_with("Not connected.\n"));
}

#[test]
fn missing_directory_is_a_load_error() {
    let config = CliConfig::new("/nonexistent/degrees/data").with_names("a", "b");
    let (result, output) = run(&config, "");

    assert!(matches!(
        result,
        Err(CliError::Load(LoadError::MissingDirectory(_)))
    ));
    assert_eq!(output, "Loading data...\n");
}
