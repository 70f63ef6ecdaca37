//! City catalog configuration
//!
//! The catalog maps each city identifier to its record source. It is built once
//! at startup and passed by value into the loader; nothing mutates it afterwards.

use crate::types::{BikeshareError, Result};
use std::path::{Path, PathBuf};

/// Cities shipped with the published datasets and their file names
pub const DEFAULT_CITIES: [(&str, &str); 3] = [
    ("Chicago", "chicago.csv"),
    ("New York City", "new_york_city.csv"),
    ("Washington", "washington.csv"),
];

/// Immutable city -> record source mapping
///
/// Entries keep insertion order so menus list cities the same way every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityCatalog {
    entries: Vec<(String, PathBuf)>,
}

impl CityCatalog {
    /// Build a catalog from explicit entries
    ///
    /// Later duplicates of a city name are ignored.
    pub fn new<I, S, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<String>,
        P: Into<PathBuf>,
    {
        let mut catalog = CityCatalog {
            entries: Vec::new(),
        };
        for (city, path) in entries {
            let city = city.into();
            if !catalog.contains(&city) {
                catalog.entries.push((city, path.into()));
            }
        }
        catalog
    }

    /// Default catalog with every file resolved against `data_dir`
    pub fn with_data_dir(data_dir: &Path) -> Self {
        CityCatalog::new(
            DEFAULT_CITIES
                .iter()
                .map(|(city, file)| (*city, data_dir.join(file))),
        )
    }

    /// Record source for a city
    ///
    /// # Errors
    ///
    /// Returns `UnknownCity` if the city is not part of the catalog.
    pub fn path_for(&self, city: &str) -> Result<&Path> {
        self.entries
            .iter()
            .find(|(name, _)| name == city)
            .map(|(_, path)| path.as_path())
            .ok_or_else(|| BikeshareError::unknown_city(city))
    }

    pub fn contains(&self, city: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == city)
    }

    /// City names in catalog order
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CityCatalog {
    fn default() -> Self {
        CityCatalog::with_data_dir(Path::new("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Chicago", "data/chicago.csv")]
    #[case("New York City", "data/new_york_city.csv")]
    #[case("Washington", "data/washington.csv")]
    fn test_default_catalog_paths(#[case] city: &str, #[case] expected: &str) {
        let catalog = CityCatalog::with_data_dir(Path::new("data"));
        assert_eq!(catalog.path_for(city).unwrap(), Path::new(expected));
    }

    #[rstest]
    #[case::unknown("Boston")]
    #[case::wrong_case("chicago")]
    fn test_unknown_city(#[case] city: &str) {
        let catalog = CityCatalog::default();
        assert_eq!(
            catalog.path_for(city).unwrap_err(),
            BikeshareError::unknown_city(city)
        );
    }

    #[test]
    fn test_cities_keep_insertion_order() {
        let catalog = CityCatalog::default();
        let cities: Vec<_> = catalog.cities().collect();
        assert_eq!(cities, vec!["Chicago", "New York City", "Washington"]);
    }

    #[test]
    fn test_duplicate_entries_keep_first() {
        let catalog = CityCatalog::new([("Chicago", "a.csv"), ("Chicago", "b.csv")]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.path_for("Chicago").unwrap(), Path::new("a.csv"));
    }
}
