//! Name to person id resolution.

use crate::database::Database;
use crate::error::ResolveError;
use crate::model::Candidate;

/// Resolves a display name to a single person id.
///
/// Lookup ignores case. When exactly one person has the name their id is
/// returned directly. When several do, `choose` receives the candidates in id
/// order and returns the intended id, or `None` to give up. `choose` is not
/// called otherwise.
///
/// # Errors
///
/// - [`ResolveError::NotFound`] if nobody has the name.
/// - [`ResolveError::Ambiguous`] if `choose` returns `None`.
/// - [`ResolveError::InvalidChoice`] if `choose` returns an id that is not
///   one of the candidates.
///
/// # Example
///
/// ```
/// use degrees_data::{Database, Person, resolve_person};
///
/// let mut db = Database::new();
/// db.insert_person(Person::new("1", "Chris Evans", Some("1981")));
/// db.insert_person(Person::new("2", "Chris Evans", Some("1966")));
///
/// let id = resolve_person(&db, "chris evans", |candidates| {
///     candidates
///         .iter()
///         .find(|c| c.birth == Some("1981"))
///         .map(|c| c.id.to_string())
/// });
/// assert_eq!(id.unwrap(), "1");
/// ```
pub fn resolve_person<F>(db: &Database, name: &str, choose: F) -> Result<String, ResolveError>
where
    F: FnOnce(&[Candidate<'_>]) -> Option<String>,
{
    let candidates: Vec<Candidate<'_>> = db
        .person_ids_for_name(name)
        .filter_map(|id| db.person(id))
        .map(Candidate::from)
        .collect();

    match candidates.as_slice() {
        [] => Err(ResolveError::NotFound(name.to_owned())),
        [only] => Ok(only.id.to_owned()),
        many => {
            let choice = choose(many).ok_or_else(|| ResolveError::Ambiguous {
                name: name.to_owned(),
                candidates: many.len(),
            })?;
            if many.iter().any(|candidate| candidate.id == choice) {
                Ok(choice)
            } else {
                Err(ResolveError::InvalidChoice {
                    name: name.to_owned(),
                    choice,
                })
            }
        }
    }
}
