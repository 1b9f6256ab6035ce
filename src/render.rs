use crate::{book::Book, catalog::Catalog};

/// Rule printed between records in a listing
pub const SEPARATOR: &str = "─────────────────────────────────────────";

/// Text views of records and catalog statistics
#[derive(Debug)]
pub struct CatalogView;

impl CatalogView {
    /// Render one record as a block of labelled lines
    ///
    /// The ISBN and year lines are left out when those fields are empty.
    #[must_use]
    pub fn book(book: &Book) -> String {
        let mut block = String::new();
        block.push_str(&format!("Book ID:    {}\n", book.id()));
        block.push_str(&format!("Title:      {}\n", book.title()));
        block.push_str(&format!("Author:     {}\n", book.author()));
        if !book.isbn().is_empty() {
            block.push_str(&format!("ISBN:       {}\n", book.isbn()));
        }
        if let Some(year) = book.publication_year() {
            block.push_str(&format!("Year:       {year}\n"));
        }
        block.push_str(&format!("Category:   {}\n", book.category()));
        block.push_str(&format!("Status:     {}\n", book.status()));
        block
    }

    /// Render records one after another, each followed by [`SEPARATOR`]
    #[must_use]
    pub fn listing(books: &[Book]) -> String {
        books.iter().fold(String::new(), |mut out, book| {
            out.push_str(&Self::book(book));
            out.push_str(SEPARATOR);
            out.push('\n');
            out
        })
    }

    /// Render the total, available and borrowed counts
    #[must_use]
    pub fn statistics(catalog: &Catalog) -> String {
        format!(
            "Total books:     {}\nAvailable books: {}\nBorrowed books:  {}\n",
            catalog.total_count(),
            catalog.available_count(),
            catalog.borrowed_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{CatalogView, SEPARATOR};
    use crate::{book::NewBook, catalog::Catalog};

    #[test]
    fn test_full_record_block() {
        let mut catalog = Catalog::new();
        let id = catalog.add(
            NewBook::new("Design Patterns", "Gang of Four")
                .isbn("978-0201633610")
                .publication_year(1994)
                .category("Software Engineering"),
        );
        let block = catalog.get(id).map(|book| CatalogView::book(&book)).unwrap_or_default();

        assert_eq!(
            block,
            "Book ID:    1\n\
             Title:      Design Patterns\n\
             Author:     Gang of Four\n\
             ISBN:       978-0201633610\n\
             Year:       1994\n\
             Category:   Software Engineering\n\
             Status:     Available\n"
        );
    }

    #[test]
    fn test_sparse_record_block_omits_isbn_and_year() {
        let mut catalog = Catalog::new();
        let id = catalog.add(NewBook::new("Notes", "Anonymous"));
        assert!(catalog.borrow(id));
        let block = catalog.get(id).map(|book| CatalogView::book(&book)).unwrap_or_default();

        assert_eq!(
            block,
            "Book ID:    1\n\
             Title:      Notes\n\
             Author:     Anonymous\n\
             Category:   General\n\
             Status:     Borrowed\n"
        );
    }

    #[test]
    fn test_listing_separates_records() {
        let mut catalog = Catalog::new();
        catalog.add(NewBook::new("One", "A"));
        catalog.add(NewBook::new("Two", "B"));

        let listing = CatalogView::listing(&catalog.get_all());
        assert_eq!(listing.matches(SEPARATOR).count(), 2);
        assert!(listing.find("Title:      One") < listing.find("Title:      Two"));
        assert!(CatalogView::listing(&[]).is_empty());
    }

    #[test]
    fn test_statistics() {
        let mut catalog = Catalog::new();
        let id = catalog.add(NewBook::new("One", "A"));
        catalog.add(NewBook::new("Two", "B"));
        assert!(catalog.borrow(id));

        assert_eq!(
            CatalogView::statistics(&catalog),
            "Total books:     2\nAvailable books: 1\nBorrowed books:  1\n"
        );
    }
}
