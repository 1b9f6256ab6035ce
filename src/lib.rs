//! In-memory library catalog with borrow/return tracking.
//!
//! This crate provides the [`Catalog`] store of [`Book`] records, the
//! [`BookStatus`] circulation states, and a line-oriented [`Shell`] that
//! drives a catalog from an interactive text menu.

pub mod book;
pub mod book_status;
pub mod catalog;
pub mod config;
pub mod error;
pub mod render;
pub mod shared;
pub mod shell;

pub use book::{Book, BookId, DEFAULT_CATEGORY, NewBook};
pub use book_status::BookStatus;
pub use catalog::Catalog;
pub use config::Config;
pub use error::LibraryError;
pub use render::CatalogView;
pub use shared::SharedCatalog;
pub use shell::Shell;
