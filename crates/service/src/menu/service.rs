use std::sync::Arc;

use models::{validate, MenuItem};
use serde_json::Value;
use tracing::warn;

use crate::errors::ServiceError;
use crate::menu::store::MenuStore;

/// Validate-then-mutate entry point used by the HTTP handlers.
///
/// Raw bodies never reach the store: they are validated into a typed
/// `MenuItemInput` first, and a rejected body leaves the store untouched.
#[derive(Clone)]
pub struct MenuService {
    store: Arc<dyn MenuStore>,
}

impl MenuService {
    pub fn new(store: Arc<dyn MenuStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<MenuItem> {
        self.store.list().await
    }

    pub async fn get(&self, id: u64) -> Result<MenuItem, ServiceError> {
        self.store.get(id).await.ok_or_else(|| ServiceError::not_found("menu item"))
    }

    pub async fn create(&self, raw: &Value) -> Result<MenuItem, ServiceError> {
        let input = validate(raw).map_err(|violations| {
            warn!(count = violations.len(), "rejected menu item create");
            ServiceError::Validation(violations)
        })?;
        Ok(self.store.create(input).await)
    }

    /// Full replace. The body is validated before the id is looked up, so an
    /// invalid body is reported even when the id does not exist.
    pub async fn replace(&self, id: u64, raw: &Value) -> Result<MenuItem, ServiceError> {
        let input = validate(raw).map_err(|violations| {
            warn!(id, count = violations.len(), "rejected menu item replace");
            ServiceError::Validation(violations)
        })?;
        self.store.replace(id, input).await
    }

    pub async fn delete(&self, id: u64) -> Result<MenuItem, ServiceError> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::memory::InMemoryMenuStore;
    use serde_json::json;

    fn service() -> MenuService {
        MenuService::new(Arc::new(InMemoryMenuStore::seeded()))
    }

    fn taco() -> Value {
        json!({
            "name": "Taco",
            "description": "Soft taco with beef and salsa",
            "price": 5.5,
            "category": "entree",
            "ingredients": ["beef", "salsa", "tortilla"]
        })
    }

    #[tokio::test]
    async fn create_delete_then_get_is_not_found() -> anyhow::Result<()> {
        let svc = service();
        let created = svc.create(&taco()).await?;
        assert_eq!(created.id, 7);
        assert_eq!(created.available, Some(true));

        svc.delete(7).await?;
        assert!(matches!(svc.get(7).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_create_leaves_store_unchanged() {
        let svc = service();
        let before = svc.list().await;
        let mut body = taco();
        body["price"] = json!(0);
        match svc.create(&body).await {
            Err(ServiceError::Validation(v)) => assert_eq!(v[0].path, "price"),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(svc.list().await, before);
    }

    #[tokio::test]
    async fn replace_validates_before_lookup() {
        let svc = service();
        let res = svc.replace(404, &json!({"name": "x"})).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));

        let res = svc.replace(404, &taco()).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn body_id_is_ignored() -> anyhow::Result<()> {
        let svc = service();
        let mut body = taco();
        body["id"] = json!(1);
        let created = svc.create(&body).await?;
        assert_eq!(created.id, 7);

        let replaced = svc.replace(2, &body).await?;
        assert_eq!(replaced.id, 2);
        assert_eq!(svc.get(1).await?.name, "Classic Burger");
        Ok(())
    }
}
