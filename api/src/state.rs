//! Application state container shared across Axum route handlers.
//!
//! Holds the store handle constructed in `main`, passed into handlers via
//! Axum's `State<T>` extractor. This replaces the lazy module-level
//! connection singleton of earlier iterations with an explicitly injected
//! handle whose lifecycle is owned by `main`.

use db::Store;

#[derive(Clone)]
pub struct AppState {
    store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Returns a shared reference to the store handle.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns a cloned store handle, for contexts that need ownership
    /// (e.g. the shutdown path).
    pub fn store_clone(&self) -> Store {
        self.store.clone()
    }
}
