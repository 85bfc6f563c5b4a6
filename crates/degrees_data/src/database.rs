//! In-memory people and movie tables.
//!
//! The [`Database`] is built once, before any search, and is read-only
//! afterwards. Searches borrow it as their [`AdjacencyProvider`].

use hashbrown::HashMap;
use std::collections::BTreeSet;

use degrees_search::AdjacencyProvider;

use crate::model::{Movie, Person};

/// People, movies, and a case-insensitive name index.
#[derive(Debug, Clone, Default)]
pub struct Database {
    people: HashMap<String, Person>,
    movies: HashMap<String, Movie>,
    /// Lowercased name to the ids of everyone with that name.
    names: HashMap<String, BTreeSet<String>>,
}

impl Database {
    /// Creates an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a person, replacing any person with the same id.
    ///
    /// A replaced person keeps every movie they were linked to, so the movie
    /// side of each link still has a matching person side. Use
    /// [`link_star`](Self::link_star) to add new links.
    pub fn insert_person(&mut self, mut person: Person) {
        if let Some(previous) = self.people.remove(&person.id) {
            let key = previous.name.to_lowercase();
            if let Some(ids) = self.names.get_mut(&key) {
                ids.remove(&person.id);
                if ids.is_empty() {
                    self.names.remove(&key);
                }
            }
            person.movies.extend(previous.movies);
        }
        self.names
            .entry(person.name.to_lowercase())
            .or_default()
            .insert(person.id.clone());
        self.people.insert(person.id.clone(), person);
    }

    /// Adds a movie, replacing any movie with the same id.
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id.clone(), movie);
    }

    /// Records that a person starred in a movie.
    ///
    /// Returns `false`, leaving both tables untouched, if either id is
    /// unknown.
    pub fn link_star(&mut self, person_id: &str, movie_id: &str) -> bool {
        let (Some(person), Some(movie)) =
            (self.people.get_mut(person_id), self.movies.get_mut(movie_id))
        else {
            return false;
        };
        person.movies.insert(movie_id.to_owned());
        movie.stars.insert(person_id.to_owned());
        true
    }

    /// Returns the person with the given id.
    #[must_use]
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    /// Returns the movie with the given id.
    #[must_use]
    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// Returns the ids of everyone with the given name, ignoring case.
    pub fn person_ids_for_name(&self, name: &str) -> impl Iterator<Item = &str> {
        self.names
            .get(&name.to_lowercase())
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Returns `(movie_id, person_id)` for everyone who starred in a movie
    /// with the given person, the person included.
    ///
    /// Pairs are ordered by movie id, then person id.
    #[must_use]
    pub fn neighbors_for_person(&self, person_id: &str) -> Vec<(String, String)> {
        let Some(person) = self.people.get(person_id) else {
            return Vec::new();
        };
        person
            .movies
            .iter()
            .filter_map(|movie_id| self.movies.get(movie_id))
            .flat_map(|movie| {
                movie
                    .stars
                    .iter()
                    .map(move |star| (movie.id.clone(), star.clone()))
            })
            .collect()
    }

    /// Returns the number of people.
    #[must_use]
    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    /// Returns the number of movies.
    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }
}

impl AdjacencyProvider for Database {
    type State = String;
    type Action = String;

    fn contains(&self, state: &String) -> bool {
        self.people.contains_key(state)
    }

    fn neighbors(&self, state: &String) -> Vec<(String, String)> {
        self.neighbors_for_person(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titanic() -> Database {
        let mut db = Database::new();
        db.insert_person(Person::new("1", "Leonardo DiCaprio", Some("1974")));
        db.insert_person(Person::new("2", "Kate Winslet", Some("1975")));
        db.insert_person(Person::new("3", "Joseph Gordon-Levitt", Some("1981")));
        db.insert_movie(Movie::new("10", "Titanic", Some("1997")));
        db.insert_movie(Movie::new("11", "Inception", Some("2010")));
        assert!(db.link_star("1", "10"));
        assert!(db.link_star("2", "10"));
        assert!(db.link_star("1", "11"));
        assert!(db.link_star("3", "11"));
        db
    }

    #[test]
    fn link_star_updates_both_sides() {
        let db = titanic();
        assert!(db.person("1").unwrap().movies.contains("11"));
        assert!(db.movie("11").unwrap().stars.contains("3"));
    }

    #[test]
    fn link_star_skips_unknown_ids() {
        let mut db = titanic();
        assert!(!db.link_star("99", "10"));
        assert!(!db.link_star("1", "99"));
        assert_eq!(db.movie("10").unwrap().stars.len(), 2);
        assert_eq!(db.person("1").unwrap().movies.len(), 2);
    }

    #[test]
    fn names_are_case_insensitive() {
        let db = titanic();
        let ids: Vec<_> = db.person_ids_for_name("KATE winslet").collect();
        assert_eq!(ids, vec!["2"]);
        assert_eq!(db.person_ids_for_name("nobody").count(), 0);
    }

    #[test]
    fn reinserting_a_person_moves_the_name_index() {
        let mut db = titanic();
        db.insert_person(Person::new("2", "Kate Elizabeth Winslet", None));
        assert_eq!(db.person_ids_for_name("kate winslet").count(), 0);
        assert_eq!(
            db.person_ids_for_name("kate elizabeth winslet").collect::<Vec<_>>(),
            vec!["2"]
        );
        assert_eq!(db.people_count(), 3);
    }

    #[test]
    fn reinserting_a_person_keeps_links_symmetric() {
        let mut db = titanic();
        db.insert_person(Person::new("2", "Kate Winslet", Some("1975")));
        assert!(db.person("2").unwrap().movies.contains("10"));

        let there = degrees_search::shortest_path(&db, &"1".to_owned(), &"2".to_owned()).unwrap();
        let back = degrees_search::shortest_path(&db, &"2".to_owned(), &"1".to_owned()).unwrap();
        assert_eq!(there, Some(vec![("10".to_owned(), "2".to_owned())]));
        assert_eq!(back, Some(vec![("10".to_owned(), "1".to_owned())]));

        let back = degrees_search::shortest_path(&db, &"2".to_owned(), &"3".to_owned()).unwrap();
        assert_eq!(back.map(|path| path.len()), Some(2));
    }

    #[test]
    fn neighbors_cover_every_movie_in_order() {
        let db = titanic();
        let pairs = db.neighbors_for_person("1");
        let expected: Vec<(String, String)> = [("10", "1"), ("10", "2"), ("11", "1"), ("11", "3")]
            .iter()
            .map(|(m, p)| ((*m).to_owned(), (*p).to_owned()))
            .collect();
        assert_eq!(pairs, expected);
        assert!(db.neighbors_for_person("missing").is_empty());
    }

    #[test]
    fn adjacency_provider_contains_people_only() {
        let db = titanic();
        assert!(db.contains(&"3".to_owned()));
        assert!(!db.contains(&"10".to_owned()));
        assert_eq!(db.neighbors(&"3".to_owned()).len(), 2);
    }
}
