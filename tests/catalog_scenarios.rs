//! End-to-end catalog behaviour through the public API

#![allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use library_catalog::{BookStatus, Catalog, DEFAULT_CATEGORY, NewBook};
use pretty_assertions::assert_eq;

#[test]
fn borrow_and_return_round_trip() {
    let mut catalog = Catalog::new();

    let first = catalog.add(NewBook::new("Book A", "Author X"));
    let second = catalog.add(NewBook::new("Book B", "Author Y"));
    assert_eq!((first, second), (1, 2));

    assert!(catalog.borrow(first));
    assert!(!catalog.borrow(first));
    assert_eq!(catalog.total_count(), 2);
    assert_eq!(catalog.available_count(), 1);

    assert!(catalog.return_book(first));
    assert_eq!(catalog.available_count(), 2);
}

#[test]
fn ids_keep_increasing_across_removals() {
    let mut catalog = Catalog::new();
    let mut issued = Vec::new();

    for round in 0..5 {
        let id = catalog.add(NewBook::new(format!("Round {round}"), "Author"));
        issued.push(id);
        if round % 2 == 0 {
            assert!(catalog.remove(id));
        }
    }

    assert_eq!(issued, vec![1, 2, 3, 4, 5]);
    assert_eq!(catalog.total_count(), 2);
    assert_eq!(catalog.add(NewBook::new("After", "Author")), 6);
}

#[test]
fn stored_record_mirrors_input() {
    let mut catalog = Catalog::new();
    let id = catalog.add(
        NewBook::new("Effective Modern C++", "Scott Meyers")
            .isbn("978-1491903995")
            .publication_year(2014)
            .category("Programming"),
    );
    let plain = catalog.add(NewBook::new("Plain", "Nobody"));

    let book = catalog.get(id);
    assert!(book.is_some());
    let Some(book) = book else { return };
    assert_eq!(
        (book.id(), book.title(), book.author(), book.isbn()),
        (id, "Effective Modern C++", "Scott Meyers", "978-1491903995")
    );
    assert_eq!(book.publication_year(), Some(2014));
    assert_eq!(book.category(), "Programming");
    assert_eq!(book.status(), BookStatus::Available);

    let plain = catalog.get(plain);
    assert_eq!(plain.as_ref().map(|book| book.category()), Some(DEFAULT_CATEGORY));
}

#[test]
fn mixed_operations_keep_counts_consistent() {
    let mut catalog = Catalog::new();
    let ids: Vec<_> =
        (0..10).map(|n| catalog.add(NewBook::new(format!("Book {n}"), "Author"))).collect();

    for id in ids.iter().step_by(3) {
        assert!(catalog.borrow(*id));
    }
    assert!(catalog.remove(ids[0]));
    assert!(catalog.return_book(ids[3]));
    assert!(!catalog.return_book(ids[1]));

    let borrowed = catalog.get_all().iter().filter(|book| book.is_borrowed()).count();
    assert_eq!(borrowed, catalog.borrowed_count());
    assert_eq!(catalog.available_count(), catalog.total_count() - borrowed);
    assert_eq!((catalog.total_count(), borrowed), (9, 2));
}

#[test]
fn search_results_are_copies() {
    let mut catalog = Catalog::new();
    catalog.add(NewBook::new("C++ Programming", "Author 1"));
    catalog.add(NewBook::new("Python Programming", "Author 2"));
    catalog.add(NewBook::new("C++ Advanced", "Author 3"));

    let mut results = catalog.search_by_title("C++");
    assert_eq!(results.len(), 2);
    for book in &mut results {
        book.set_title("Edited");
    }

    assert_eq!(catalog.search_by_title("C++").len(), 2);
    assert!(catalog.search_by_title("Edited").is_empty());
    assert_eq!(catalog.search_by_title("").len(), 3);
}
