use std::sync::Arc;

use service::menu::{InMemoryMenuStore, MenuService, MenuStore};

/// State shared by all handlers. The store is injected, never global.
#[derive(Clone)]
pub struct AppState {
    pub menu: MenuService,
}

impl AppState {
    pub fn new(store: Arc<dyn MenuStore>) -> Self {
        Self { menu: MenuService::new(store) }
    }

    /// State over an in-memory store, optionally pre-filled with the fixtures.
    pub fn in_memory(seed_fixtures: bool) -> Self {
        let store = if seed_fixtures {
            InMemoryMenuStore::seeded()
        } else {
            InMemoryMenuStore::new()
        };
        Self::new(Arc::new(store))
    }
}
