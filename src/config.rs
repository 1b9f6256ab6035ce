use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    book::NewBook,
    catalog::Catalog,
    error::{LibraryError, Result},
};

/// Start-up settings for the catalog shell
///
/// Every field has a default, so a configuration file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Records added to the catalog before the menu opens
    pub seed_books: Vec<NewBook>,
    /// Wait for Enter after each menu action
    pub pause_after_action: bool,
    /// Colour success and failure messages
    pub color: bool,
    /// Print the version banner at start-up
    pub show_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_books: sample_books(),
            pause_after_action: true,
            color: true,
            show_banner: true,
        }
    }
}

impl Config {
    /// Load a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::ConfigRead` if the file cannot be read and
    /// `LibraryError::ConfigParse` if its contents are not a valid configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|source| LibraryError::ConfigRead { path: path.to_path_buf(), source })?;

        serde_json::from_str(&contents)
            .map_err(|source| LibraryError::ConfigParse { path: path.to_path_buf(), source })
    }

    /// Add every seed record to `catalog`, returning how many were added
    pub fn seed(&self, catalog: &mut Catalog) -> usize {
        for book in &self.seed_books {
            catalog.add(book.clone());
        }
        self.seed_books.len()
    }
}

/// The sample shelf a fresh catalog starts with
fn sample_books() -> Vec<NewBook> {
    vec![
        NewBook::new("The C++ Programming Language", "Bjarne Stroustrup")
            .isbn("978-0321563842")
            .publication_year(2013)
            .category("Programming"),
        NewBook::new("Effective Modern C++", "Scott Meyers")
            .isbn("978-1491903995")
            .publication_year(2014)
            .category("Programming"),
        NewBook::new("Design Patterns", "Gang of Four")
            .isbn("978-0201633610")
            .publication_year(1994)
            .category("Software Engineering"),
    ]
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::catalog::Catalog;

    #[test]
    fn test_default_seeds_three_samples() {
        let config = Config::default();
        let mut catalog = Catalog::new();

        assert_eq!(config.seed(&mut catalog), 3);
        assert_eq!(catalog.total_count(), 3);
        assert_eq!(catalog.search_by_category("Programming").len(), 2);
        assert_eq!(catalog.search_by_title("Design Patterns").len(), 1);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Result<Config, _> = serde_json::from_str(r#"{ "color": false }"#);
        assert!(config.is_ok());
        let Ok(config) = config else { return };

        assert!(!config.color);
        assert!(config.pause_after_action);
        assert!(config.show_banner);
        assert_eq!(config.seed_books.len(), 3);
    }

    #[test]
    fn test_seed_books_from_json() {
        let json = r#"{
            "seed_books": [
                { "title": "Dune", "author": "Frank Herbert", "publication_year": 1965, "category": "Fiction" },
                { "title": "Untitled", "author": "Anonymous" }
            ]
        }"#;
        let config: Result<Config, _> = serde_json::from_str(json);
        assert!(config.is_ok());
        let Ok(config) = config else { return };

        let mut catalog = Catalog::new();
        assert_eq!(config.seed(&mut catalog), 2);

        let untitled = catalog.get(2);
        assert_eq!(untitled.as_ref().map(crate::book::Book::category), Some("General"));
        assert_eq!(untitled.as_ref().map(crate::book::Book::isbn), Some(""));
        assert_eq!(catalog.get(1).and_then(|book| book.publication_year()), Some(1965));
    }
}
