//! CSV loading.
//!
//! A data directory holds three files with header rows:
//!
//! | File | Columns |
//! |------|---------|
//! | `people.csv` | `id`, `name`, `birth` |
//! | `movies.csv` | `id`, `title`, `year` |
//! | `stars.csv` | `person_id`, `movie_id` |
//!
//! Star rows naming an unknown person or movie are skipped.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::database::Database;
use crate::error::LoadError;
use crate::model::{Movie, Person};

const PEOPLE_FILE: &str = "people.csv";
const MOVIES_FILE: &str = "movies.csv";
const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    #[serde(default)]
    birth: String,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    #[serde(default)]
    year: String,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Counts reported after loading a data directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// People rows read.
    pub people: usize,
    /// Movie rows read.
    pub movies: usize,
    /// Star rows linked into both tables.
    pub stars: usize,
    /// Star rows skipped because an id was unknown.
    pub skipped: usize,
}

/// Loads `people.csv`, `movies.csv` and `stars.csv` from `dir`.
///
/// # Errors
///
/// Returns [`LoadError::MissingDirectory`] or [`LoadError::MissingFile`] when
/// the inputs are absent, and [`LoadError::Csv`] when a file cannot be parsed.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<(Database, LoadSummary), LoadError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(LoadError::MissingDirectory(dir.to_path_buf()));
    }

    let mut db = Database::new();
    let mut summary = LoadSummary::default();

    for row in read_rows::<PersonRow>(&required(dir, PEOPLE_FILE)?)? {
        db.insert_person(Person::new(row.id, row.name, non_empty(&row.birth)));
        summary.people += 1;
    }

    for row in read_rows::<MovieRow>(&required(dir, MOVIES_FILE)?)? {
        db.insert_movie(Movie::new(row.id, row.title, non_empty(&row.year)));
        summary.movies += 1;
    }

    for row in read_rows::<StarRow>(&required(dir, STARS_FILE)?)? {
        if db.link_star(&row.person_id, &row.movie_id) {
            summary.stars += 1;
        } else {
            tracing::debug!(
                person_id = %row.person_id,
                movie_id = %row.movie_id,
                "skipping star row with unknown id"
            );
            summary.skipped += 1;
        }
    }

    tracing::info!(
        dir = %dir.display(),
        people = summary.people,
        movies = summary.movies,
        stars = summary.stars,
        skipped = summary.skipped,
        "data loaded"
    );

    Ok((db, summary))
}

fn required(dir: &Path, file: &str) -> Result<PathBuf, LoadError> {
    let path = dir.join(file);
    if path.is_file() {
        Ok(path)
    } else {
        Err(LoadError::MissingFile(path))
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|err| LoadError::csv(path, err))?;

    reader
        .deserialize::<T>()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|err| LoadError::csv(path, err))
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
