//! Result formatting.

use std::io::{self, Write};

use degrees_data::Database;

/// Writes the outcome of a search from `source`.
///
/// A connected pair prints the degree count followed by one numbered line per
/// hop naming both people and the movie they share.
///
/// # Errors
///
/// Returns any I/O error from `output`.
pub fn write_report<W: Write>(
    output: &mut W,
    db: &Database,
    source: &str,
    path: Option<&[(String, String)]>,
) -> io::Result<()> {
    let Some(path) = path else {
        return writeln!(output, "Not connected.");
    };

    writeln!(output, "{} degrees of separation.", path.len())?;

    let mut previous = source;
    for (step, (movie_id, person_id)) in path.iter().enumerate() {
        writeln!(
            output,
            "{}: {} and {} starred in {}",
            step + 1,
            person_name(db, previous),
            person_name(db, person_id),
            movie_title(db, movie_id)
        )?;
        previous = person_id.as_str();
    }
    Ok(())
}

fn person_name<'a>(db: &'a Database, id: &'a str) -> &'a str {
    db.person(id).map_or(id, |person| person.name.as_str())
}

fn movie_title<'a>(db: &'a Database, id: &'a str) -> &'a str {
    db.movie(id).map_or(id, |movie| movie.title.as_str())
}
