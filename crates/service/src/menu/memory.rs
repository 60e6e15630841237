use std::sync::Arc;

use async_trait::async_trait;
use models::{seed::seed_items, MenuItem, MenuItemInput};
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;
use crate::menu::store::MenuStore;

#[derive(Debug, Default)]
struct MenuState {
    items: Vec<MenuItem>,
    next_id: u64,
}

/// Process-local menu store.
///
/// Items live in a `Vec` to keep insertion order; lookups are linear. The
/// id counter only moves forward, so ids of deleted items are never reused.
#[derive(Clone, Debug)]
pub struct InMemoryMenuStore {
    inner: Arc<RwLock<MenuState>>,
}

impl InMemoryMenuStore {
    /// Empty store; the first created item gets id 1.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Store pre-filled with `items`; the counter starts above the largest id.
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        let next_id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        Self { inner: Arc::new(RwLock::new(MenuState { items, next_id })) }
    }

    /// Store pre-filled with the six fixture items.
    pub fn seeded() -> Self {
        Self::with_items(seed_items())
    }
}

impl Default for InMemoryMenuStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MenuStore for InMemoryMenuStore {
    async fn list(&self) -> Vec<MenuItem> {
        let state = self.inner.read().await;
        state.items.clone()
    }

    async fn get(&self, id: u64) -> Option<MenuItem> {
        let state = self.inner.read().await;
        state.items.iter().find(|i| i.id == id).cloned()
    }

    async fn create(&self, input: MenuItemInput) -> MenuItem {
        let mut state = self.inner.write().await;
        let id = state.next_id;
        state.next_id += 1;
        let item = input.into_new_item(id);
        state.items.push(item.clone());
        debug!(id, "menu item created");
        item
    }

    async fn replace(&self, id: u64, input: MenuItemInput) -> Result<MenuItem, ServiceError> {
        let mut state = self.inner.write().await;
        let existing = state
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| ServiceError::not_found("menu item"))?;
        input.apply_to(existing);
        debug!(id, "menu item replaced");
        Ok(existing.clone())
    }

    async fn delete(&self, id: u64) -> Result<MenuItem, ServiceError> {
        let mut state = self.inner.write().await;
        let idx = state
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| ServiceError::not_found("menu item"))?;
        let removed = state.items.remove(idx);
        debug!(id, "menu item deleted");
        Ok(removed)
    }
}
