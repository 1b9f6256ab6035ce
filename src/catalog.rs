use std::collections::BTreeMap;

use crate::{
    book::{Book, BookId, NewBook},
    book_status::BookStatus,
};

/// Owning store of every catalog record
///
/// Records are keyed by id. Ids are handed out from a counter that starts
/// at 1 and only moves forward, so a removed id is never issued again and
/// iteration order matches insertion order.
///
/// Mutations report success as a `bool`: an unknown id and a record in the
/// wrong status for the requested transition are both plain `false`, and a
/// failed call leaves the catalog untouched.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Stored records by id
    books: BTreeMap<BookId, Book>,
    /// Id handed to the next added record
    next_id: BookId,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self { books: BTreeMap::new(), next_id: 1 }
    }

    /// Store a new record and return the id assigned to it
    ///
    /// The record starts out [`BookStatus::Available`]; a missing or blank
    /// category becomes [`crate::book::DEFAULT_CATEGORY`].
    #[allow(clippy::arithmetic_side_effects)]
    pub fn add(&mut self, new_book: NewBook) -> BookId {
        let id = self.next_id;
        self.next_id += 1;
        self.books.insert(id, new_book.into_book(id));
        id
    }

    /// Remove a record, reporting whether one was stored under `id`
    #[must_use]
    pub fn remove(&mut self, id: BookId) -> bool {
        self.books.remove(&id).is_some()
    }

    /// Overwrite the title and author of a record
    ///
    /// Every other field, status included, is left as is. Returns `false`
    /// when `id` is unknown.
    #[must_use]
    pub fn update(&mut self, id: BookId, title: &str, author: &str) -> bool {
        match self.books.get_mut(&id) {
            Some(book) => {
                book.set_title(title);
                book.set_author(author);
                true
            }
            None => false,
        }
    }

    /// Get a copy of the record stored under `id`
    #[must_use]
    pub fn get(&self, id: BookId) -> Option<Book> {
        self.books.get(&id).cloned()
    }

    /// Get copies of every record, in ascending id order
    #[must_use]
    pub fn get_all(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    /// Records whose title contains `needle` (case-sensitive)
    #[must_use]
    pub fn search_by_title(&self, needle: &str) -> Vec<Book> {
        self.filter(|book| book.title().contains(needle))
    }

    /// Records whose author contains `needle` (case-sensitive)
    #[must_use]
    pub fn search_by_author(&self, needle: &str) -> Vec<Book> {
        self.filter(|book| book.author().contains(needle))
    }

    /// Records whose category is exactly `category`
    #[must_use]
    pub fn search_by_category(&self, category: &str) -> Vec<Book> {
        self.filter(|book| book.category() == category)
    }

    /// Lend out an available record
    ///
    /// Only an [`BookStatus::Available`] record can be borrowed; anything
    /// else, including an unknown id, returns `false`.
    #[must_use]
    pub fn borrow(&mut self, id: BookId) -> bool {
        self.transition(id, BookStatus::Available, BookStatus::Borrowed)
    }

    /// Take back a borrowed record
    ///
    /// Only a [`BookStatus::Borrowed`] record can be returned.
    #[must_use]
    pub fn return_book(&mut self, id: BookId) -> bool {
        self.transition(id, BookStatus::Borrowed, BookStatus::Available)
    }

    /// Number of stored records regardless of status
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.books.len()
    }

    /// Number of records that can be borrowed right now
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.count(Book::is_available)
    }

    /// Number of records currently lent out
    #[must_use]
    pub fn borrowed_count(&self) -> usize {
        self.count(Book::is_borrowed)
    }

    /// Move a record from `from` to `to`, only if it is currently in `from`
    fn transition(&mut self, id: BookId, from: BookStatus, to: BookStatus) -> bool {
        match self.books.get_mut(&id) {
            Some(book) if book.status() == from => {
                book.set_status(to);
                true
            }
            _ => false,
        }
    }

    /// Copies of the records matching `predicate`
    fn filter(&self, predicate: impl Fn(&Book) -> bool) -> Vec<Book> {
        self.books.values().filter(|&book| predicate(book)).cloned().collect()
    }

    /// Count the records matching `predicate`
    fn count(&self, predicate: impl Fn(&Book) -> bool) -> usize {
        self.books.values().filter(|&book| predicate(book)).count()
    }
}
