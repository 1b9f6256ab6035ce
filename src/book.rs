use serde::{Deserialize, Serialize};

use crate::book_status::BookStatus;

/// Identifier assigned to a record by its owning catalog
pub type BookId = u32;

/// Category given to records added without one
pub const DEFAULT_CATEGORY: &str = "General";

/// Map a blank category onto [`DEFAULT_CATEGORY`]
fn resolve_category(category: &str) -> String {
    if category.trim().is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        category.to_string()
    }
}

/// A single catalog entry
///
/// Setters overwrite the stored value without validation; an empty title or
/// author is a valid record. The id is only ever assigned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Catalog-assigned identifier, 0 until stored
    id: BookId,
    /// Title of the work
    title: String,
    /// Author of the work
    author: String,
    /// ISBN, empty when unknown
    isbn: String,
    /// Year of publication, if known
    publication_year: Option<u32>,
    /// Shelving category
    category: String,
    /// Current circulation status
    status: BookStatus,
}

impl Default for Book {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl Book {
    /// Create an unstored record with only a title and an author
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::with_details(title, author, "", None, DEFAULT_CATEGORY)
    }

    /// Create an unstored record with every descriptive field
    ///
    /// A blank `category` falls back to [`DEFAULT_CATEGORY`].
    #[must_use]
    pub fn with_details(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        publication_year: Option<u32>,
        category: &str,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            publication_year,
            category: resolve_category(category),
            status: BookStatus::Available,
        }
    }

    /// Stamp the record with its catalog id
    pub(crate) fn with_id(mut self, id: BookId) -> Self {
        self.id = id;
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn set_isbn(&mut self, isbn: impl Into<String>) {
        self.isbn = isbn.into();
    }

    pub fn set_publication_year(&mut self, publication_year: Option<u32>) {
        self.publication_year = publication_year;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_status(&mut self, status: BookStatus) {
        self.status = status;
    }

    #[must_use]
    pub fn id(&self) -> BookId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    #[must_use]
    pub fn publication_year(&self) -> Option<u32> {
        self.publication_year
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn status(&self) -> BookStatus {
        self.status
    }

    /// Whether the book can be borrowed right now
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }

    /// Whether the book is currently lent out
    #[must_use]
    pub fn is_borrowed(&self) -> bool {
        self.status == BookStatus::Borrowed
    }
}

/// The caller-supplied fields of a record about to be added to a catalog
///
/// Also the shape of `seed_books` entries in the configuration file, so every
/// field except `title` and `author` may be omitted there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NewBook {
    /// Title of the work
    pub title: String,
    /// Author of the work
    pub author: String,
    /// ISBN, empty when unknown
    pub isbn: String,
    /// Year of publication, if known
    pub publication_year: Option<u32>,
    /// Shelving category; `None` or blank means [`DEFAULT_CATEGORY`]
    pub category: Option<String>,
}

impl NewBook {
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self { title: title.into(), author: author.into(), ..Self::default() }
    }

    #[must_use]
    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    #[must_use]
    pub fn publication_year(mut self, year: u32) -> Self {
        self.publication_year = Some(year);
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Build the stored record for this input under `id`
    pub(crate) fn into_book(self, id: BookId) -> Book {
        let category = self.category.as_deref().unwrap_or(DEFAULT_CATEGORY);
        Book::with_details(self.title, self.author, self.isbn, self.publication_year, category)
            .with_id(id)
    }
}
