use async_trait::async_trait;
use models::{MenuItem, MenuItemInput};

use crate::errors::ServiceError;

/// Trait abstraction for menu item storage.
///
/// Inputs are already validated. Each mutation runs as one atomic unit with
/// respect to every other store operation.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// All items in insertion order.
    async fn list(&self) -> Vec<MenuItem>;
    async fn get(&self, id: u64) -> Option<MenuItem>;
    /// Assign the next id and append.
    async fn create(&self, input: MenuItemInput) -> MenuItem;
    /// Overwrite every field but the id.
    async fn replace(&self, id: u64, input: MenuItemInput) -> Result<MenuItem, ServiceError>;
    /// Remove and return the item.
    async fn delete(&self, id: u64) -> Result<MenuItem, ServiceError>;
}
