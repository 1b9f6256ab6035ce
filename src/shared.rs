use std::sync::{Arc, Mutex, PoisonError};

use crate::catalog::Catalog;

/// A cloneable handle to one catalog shared between threads
///
/// The whole catalog sits behind a single mutex, held for the duration of
/// one closure passed to [`SharedCatalog::with`]. Catalog operations never
/// leave partial state, so a lock poisoned by a panicking caller is
/// recovered rather than propagated.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    /// The guarded catalog
    inner: Arc<Mutex<Catalog>>,
}

impl SharedCatalog {
    /// Wrap an existing catalog
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { inner: Arc::new(Mutex::new(catalog)) }
    }

    /// Run `f` with exclusive access to the catalog
    pub fn with<T>(&self, f: impl FnOnce(&mut Catalog) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
