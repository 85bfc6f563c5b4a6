//! Record types for people and movies.

use std::collections::BTreeSet;

/// A person and the movies they starred in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Unique person id.
    pub id: String,
    /// Display name as loaded.
    pub name: String,
    /// Birth year, when known.
    pub birth: Option<String>,
    /// Ids of the movies this person starred in.
    pub movies: BTreeSet<String>,
}

impl Person {
    /// Creates a person with no movies.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, birth: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth: birth.map(str::to_owned),
            movies: BTreeSet::new(),
        }
    }
}

/// A movie and its stars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    /// Unique movie id.
    pub id: String,
    /// Title as loaded.
    pub title: String,
    /// Release year, when known.
    pub year: Option<String>,
    /// Ids of the people who starred in this movie.
    pub stars: BTreeSet<String>,
}

impl Movie {
    /// Creates a movie with no stars.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, year: Option<&str>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.map(str::to_owned),
            stars: BTreeSet::new(),
        }
    }
}

/// One of several people sharing a name, offered for disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Person id.
    pub id: &'a str,
    /// Display name.
    pub name: &'a str,
    /// Birth year, when known.
    pub birth: Option<&'a str>,
}

impl<'a> From<&'a Person> for Candidate<'a> {
    fn from(person: &'a Person) -> Self {
        Self {
            id: &person.id,
            name: &person.name,
            birth: person.birth.as_deref(),
        }
    }
}
