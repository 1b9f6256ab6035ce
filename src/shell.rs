use std::{
    fmt,
    io::{BufRead, Write},
};

use colored::Colorize;
use tracing::{debug, info};

use crate::{
    book::{BookId, NewBook},
    catalog::Catalog,
    config::Config,
    error::Result,
    render::CatalogView,
};

/// Top-level menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Leave the shell
    Exit,
    /// Add a new record
    Add,
    /// Remove a record by id
    Remove,
    /// Change the title and author of a record
    Update,
    /// Show one record
    View,
    /// Show every record
    ViewAll,
    /// Search by title, author or category
    Search,
    /// Borrow a record
    Borrow,
    /// Return a borrowed record
    Return,
    /// Show catalog counts
    Statistics,
}

impl MenuChoice {
    /// Map a typed menu number onto its entry
    #[must_use]
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            0 => Some(Self::Exit),
            1 => Some(Self::Add),
            2 => Some(Self::Remove),
            3 => Some(Self::Update),
            4 => Some(Self::View),
            5 => Some(Self::ViewAll),
            6 => Some(Self::Search),
            7 => Some(Self::Borrow),
            8 => Some(Self::Return),
            9 => Some(Self::Statistics),
            _ => None,
        }
    }
}

/// Whether the menu loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Show the menu again
    Continue,
    /// Input ran out; leave the loop
    Quit,
}

/// Line-oriented interactive menu over a [`Catalog`]
///
/// The shell owns only its terminal handles and presentation settings; the
/// catalog is borrowed for the duration of [`Shell::run`]. Closing the input
/// ends the session the same way as choosing Exit.
pub struct Shell<R, W> {
    /// Where answers to prompts are read from
    input: R,
    /// Where menus, prompts and results are written
    output: W,
    /// Wait for Enter after each action
    pause_after_action: bool,
    /// Colour success and failure lines
    color: bool,
}

impl<R, W> fmt::Debug for Shell<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("pause_after_action", &self.pause_after_action)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell with pausing and colour enabled
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, pause_after_action: true, color: true }
    }

    /// Create a shell with the presentation settings from `config`
    #[must_use]
    pub fn with_config(input: R, output: W, config: &Config) -> Self {
        Self::new(input, output)
            .pause_after_action(config.pause_after_action)
            .color(config.color)
    }

    #[must_use]
    pub fn pause_after_action(mut self, pause: bool) -> Self {
        self.pause_after_action = pause;
        self
    }

    #[must_use]
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Give back the terminal handles
    #[must_use]
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print the start-up banner
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Io` if the output cannot be written.
    pub fn banner(&mut self) -> Result<()> {
        writeln!(self.output, "Library Management System v{}\n", env!("CARGO_PKG_VERSION"))?;
        Ok(())
    }

    /// Run the menu loop until the user exits or the input is closed
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Io` if reading a prompt answer or writing to the
    /// output fails.
    pub fn run(&mut self, catalog: &mut Catalog) -> Result<()> {
        loop {
            self.write_menu()?;
            let Some(number) = self.read_int("Enter your choice: ")? else {
                info!("Input closed, leaving the menu");
                break;
            };
            writeln!(self.output)?;

            let flow = match MenuChoice::from_number(number) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Thank you for using the Library Management System!")?;
                    break;
                }
                Some(choice) => {
                    debug!(?choice, "Menu action selected");
                    self.dispatch(choice, catalog)?
                }
                None => {
                    debug!(number, "Rejected menu number");
                    writeln!(self.output, "Invalid choice! Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                info!("Input closed, leaving the menu");
                break;
            }
            if self.pause_after_action {
                writeln!(self.output, "\nPress Enter to continue...")?;
                if self.read_line("")?.is_none() {
                    break;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Route a menu choice to its handler
    fn dispatch(&mut self, choice: MenuChoice, catalog: &mut Catalog) -> Result<Flow> {
        match choice {
            MenuChoice::Exit => Ok(Flow::Quit),
            MenuChoice::Add => self.handle_add(catalog),
            MenuChoice::Remove => self.handle_remove(catalog),
            MenuChoice::Update => self.handle_update(catalog),
            MenuChoice::View => self.handle_view(catalog),
            MenuChoice::ViewAll => self.handle_view_all(catalog),
            MenuChoice::Search => self.handle_search(catalog),
            MenuChoice::Borrow => self.handle_borrow(catalog),
            MenuChoice::Return => self.handle_return(catalog),
            MenuChoice::Statistics => self.handle_statistics(catalog),
        }
    }

    /// Draw the boxed main menu
    fn write_menu(&mut self) -> Result<()> {
        const MENU: &str = "
╔════════════════════════════════════════╗
║  LIBRARY MANAGEMENT SYSTEM             ║
╠════════════════════════════════════════╣
║  1. Add Book                           ║
║  2. Remove Book                        ║
║  3. Update Book                        ║
║  4. View Book Details                  ║
║  5. View All Books                     ║
║  6. Search Books                       ║
║  7. Borrow Book                        ║
║  8. Return Book                        ║
║  9. View Statistics                    ║
║  0. Exit                               ║
╚════════════════════════════════════════╝";
        writeln!(self.output, "{MENU}")?;
        Ok(())
    }

    /// Prompt for every field and add the record
    fn handle_add(&mut self, catalog: &mut Catalog) -> Result<Flow> {
        writeln!(self.output, "=== ADD NEW BOOK ===")?;

        let Some(title) = self.read_line("Enter book title: ")? else { return Ok(Flow::Quit) };
        let Some(author) = self.read_line("Enter author: ")? else { return Ok(Flow::Quit) };
        let Some(isbn) = self.read_line("Enter ISBN (optional): ")? else { return Ok(Flow::Quit) };
        let Some(year) = self.read_int("Enter publication year (0 to skip): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = self.read_line("Enter category (default: General): ")? else {
            return Ok(Flow::Quit);
        };

        let mut new_book = NewBook::new(title, author).isbn(isbn).category(category);
        // Zero, negative and out-of-range years all mean "no year"
        new_book.publication_year = u32::try_from(year).ok().filter(|year| *year > 0);

        let id = catalog.add(new_book);
        debug!(id, "Book added");
        self.success(&format!("Book added successfully! Book ID: {id}"))?;
        Ok(Flow::Continue)
    }

    /// Remove a record by id
    fn handle_remove(&mut self, catalog: &mut Catalog) -> Result<Flow> {
        writeln!(self.output, "=== REMOVE BOOK ===")?;

        let Some(id) = self.read_id("Enter book ID to remove: ")? else { return Ok(Flow::Quit) };
        debug!(?id, "Remove requested");

        if id.is_some_and(|id| catalog.remove(id)) {
            self.success("Book removed successfully!")?;
        } else {
            self.failure("Book not found!")?;
        }
        Ok(Flow::Continue)
    }

    /// Show a record, then replace its title and author
    fn handle_update(&mut self, catalog: &mut Catalog) -> Result<Flow> {
        writeln!(self.output, "=== UPDATE BOOK ===")?;

        let Some(id) = self.read_id("Enter book ID to update: ")? else { return Ok(Flow::Quit) };
        debug!(?id, "Update requested");

        let Some((id, current)) = id.and_then(|id| catalog.get(id).map(|book| (id, book))) else {
            self.failure("Book not found!")?;
            return Ok(Flow::Continue);
        };

        writeln!(self.output, "\nCurrent details:")?;
        write!(self.output, "{}", CatalogView::book(&current))?;

        let Some(title) = self.read_line("\nEnter new title (or press Enter to keep current): ")?
        else {
            return Ok(Flow::Quit);
        };
        let Some(author) = self.read_line("Enter new author (or press Enter to keep current): ")?
        else {
            return Ok(Flow::Quit);
        };

        // Blank answers keep what is already stored
        let title = if title.trim().is_empty() { current.title() } else { title.as_str() };
        let author = if author.trim().is_empty() { current.author() } else { author.as_str() };

        if catalog.update(id, title, author) {
            self.success("Book updated successfully!")?;
        } else {
            self.failure("Failed to update book!")?;
        }
        Ok(Flow::Continue)
    }

    /// Show one record
    fn handle_view(&mut self, catalog: &Catalog) -> Result<Flow> {
        writeln!(self.output, "=== VIEW BOOK DETAILS ===")?;

        let Some(id) = self.read_id("Enter book ID: ")? else { return Ok(Flow::Quit) };
        debug!(?id, "View requested");

        if let Some(book) = id.and_then(|id| catalog.get(id)) {
            writeln!(self.output)?;
            write!(self.output, "{}", CatalogView::book(&book))?;
        } else {
            self.failure("Book not found!")?;
        }
        Ok(Flow::Continue)
    }

    /// List every record with a total
    fn handle_view_all(&mut self, catalog: &Catalog) -> Result<Flow> {
        writeln!(self.output, "=== ALL BOOKS ===\n")?;

        let books = catalog.get_all();
        if books.is_empty() {
            writeln!(self.output, "No books in the library.")?;
            return Ok(Flow::Continue);
        }

        write!(self.output, "{}", CatalogView::listing(&books))?;
        writeln!(self.output, "\nTotal books: {}", books.len())?;
        Ok(Flow::Continue)
    }

    /// Ask for a search field and a query, then list the matches
    fn handle_search(&mut self, catalog: &Catalog) -> Result<Flow> {
        writeln!(self.output, "=== SEARCH BOOKS ===")?;
        writeln!(self.output, "1. Search by title")?;
        writeln!(self.output, "2. Search by author")?;
        writeln!(self.output, "3. Search by category")?;

        let Some(choice) = self.read_int("\nEnter your choice: ")? else { return Ok(Flow::Quit) };

        let prompt = match choice {
            1 => "Enter title to search: ",
            2 => "Enter author to search: ",
            3 => "Enter category to search: ",
            _ => {
                writeln!(self.output, "Invalid choice!")?;
                return Ok(Flow::Continue);
            }
        };
        let Some(query) = self.read_line(prompt)? else { return Ok(Flow::Quit) };
        debug!(choice, query = %query, "Search requested");

        let results = match choice {
            1 => catalog.search_by_title(&query),
            2 => catalog.search_by_author(&query),
            _ => catalog.search_by_category(&query),
        };

        writeln!(self.output, "\n=== SEARCH RESULTS ===")?;
        if results.is_empty() {
            writeln!(self.output, "No books found.")?;
        } else {
            write!(self.output, "{}", CatalogView::listing(&results))?;
            writeln!(self.output, "\nFound {} book(s).", results.len())?;
        }
        Ok(Flow::Continue)
    }

    /// Borrow a record by id
    fn handle_borrow(&mut self, catalog: &mut Catalog) -> Result<Flow> {
        writeln!(self.output, "=== BORROW BOOK ===")?;

        let Some(id) = self.read_id("Enter book ID to borrow: ")? else { return Ok(Flow::Quit) };

        if id.is_some_and(|id| catalog.borrow(id)) {
            debug!(?id, "Book borrowed");
            self.success("Book borrowed successfully!")?;
        } else {
            debug!(?id, "Borrow rejected");
            self.failure("Book not available for borrowing!")?;
        }
        Ok(Flow::Continue)
    }

    /// Return a record by id
    fn handle_return(&mut self, catalog: &mut Catalog) -> Result<Flow> {
        writeln!(self.output, "=== RETURN BOOK ===")?;

        let Some(id) = self.read_id("Enter book ID to return: ")? else { return Ok(Flow::Quit) };

        if id.is_some_and(|id| catalog.return_book(id)) {
            debug!(?id, "Book returned");
            self.success("Book returned successfully!")?;
        } else {
            debug!(?id, "Return rejected");
            self.failure("Book was not borrowed or not found!")?;
        }
        Ok(Flow::Continue)
    }

    /// Show the catalog counts
    fn handle_statistics(&mut self, catalog: &Catalog) -> Result<Flow> {
        writeln!(self.output, "=== LIBRARY STATISTICS ===")?;
        write!(self.output, "{}", CatalogView::statistics(catalog))?;
        Ok(Flow::Continue)
    }

    /// Write a success line, green when colour is on
    fn success(&mut self, message: &str) -> Result<()> {
        let line = format!("✓ {message}");
        if self.color {
            writeln!(self.output, "\n{}", line.green())?;
        } else {
            writeln!(self.output, "\n{line}")?;
        }
        Ok(())
    }

    /// Write a failure line, red when colour is on
    fn failure(&mut self, message: &str) -> Result<()> {
        let line = format!("✗ {message}");
        if self.color {
            writeln!(self.output, "\n{}", line.red())?;
        } else {
            writeln!(self.output, "\n{line}")?;
        }
        Ok(())
    }

    /// Show `prompt` and read one line without its terminator
    ///
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Show `prompt` and read an integer, re-prompting until one parses
    ///
    /// Only the first word of the line is considered. Returns `None` once the
    /// input is exhausted.
    fn read_int(&mut self, prompt: &str) -> Result<Option<i64>> {
        let mut answer = self.read_line(prompt)?;
        while let Some(line) = answer {
            if let Some(value) = line.split_whitespace().next().and_then(|word| word.parse().ok())
            {
                return Ok(Some(value));
            }
            answer = self.read_line("Invalid input! Please enter a number: ")?;
        }
        Ok(None)
    }

    /// Read an integer and narrow it to a book id
    ///
    /// The outer `None` means the input is exhausted; the inner `None` means
    /// the number can never name a record (negative or too large).
    fn read_id(&mut self, prompt: &str) -> Result<Option<Option<BookId>>> {
        Ok(self.read_int(prompt)?.map(|value| BookId::try_from(value).ok()))
    }
}
