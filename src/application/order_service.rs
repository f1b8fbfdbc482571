use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{validate_items, ItemDraft, OrderView};
use crate::domain::ports::OrderStore;

/// Use-case layer over an injected store.
///
/// Validation happens here, before any store call, so invalid input never
/// reaches persistence. The concrete store (Postgres or in-memory) is
/// interchangeable behind the trait object.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    pub fn list_orders(&self) -> Result<Vec<OrderView>, DomainError> {
        self.store.list()
    }

    pub fn get_order(&self, id: Uuid) -> Result<OrderView, DomainError> {
        self.store.find_by_id(id)?.ok_or(DomainError::NotFound)
    }

    pub fn create_order(&self, items: Option<Vec<ItemDraft>>) -> Result<OrderView, DomainError> {
        let items = validate_items(items)?;
        self.store.create(items)
    }

    pub fn update_order(
        &self,
        id: Uuid,
        items: Option<Vec<ItemDraft>>,
    ) -> Result<OrderView, DomainError> {
        let items = validate_items(items)?;
        self.store.update(id, items)?.ok_or(DomainError::NotFound)
    }

    pub fn delete_order(&self, id: Uuid) -> Result<(), DomainError> {
        if self.store.delete(id)? {
            Ok(())
        } else {
            Err(DomainError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryOrderStore;

    fn service() -> OrderService {
        OrderService::new(Arc::new(InMemoryOrderStore::default()))
    }

    fn draft(product_id: &str, quantity: i32, unit_price: f64) -> ItemDraft {
        ItemDraft {
            product_id: Some(product_id.to_string()),
            quantity: Some(quantity),
            unit_price: Some(unit_price),
        }
    }

    #[test]
    fn create_computes_total_and_assigns_id() {
        let svc = service();

        let order = svc
            .create_order(Some(vec![draft("p1", 2, 5.0)]))
            .expect("create failed");

        assert_eq!(order.total, 10.0);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].product_id, "p1");
    }

    #[test]
    fn create_rejects_missing_items() {
        let err = service().create_order(None).expect_err("should reject");
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn create_rejects_empty_items() {
        let err = service()
            .create_order(Some(vec![]))
            .expect_err("should reject");
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn create_rejects_item_without_product_id() {
        let err = service()
            .create_order(Some(vec![ItemDraft {
                product_id: None,
                quantity: Some(1),
                unit_price: Some(1.0),
            }]))
            .expect_err("should reject");
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn rejected_create_leaves_nothing_behind() {
        let svc = service();

        let _ = svc.create_order(Some(vec![ItemDraft {
            product_id: None,
            quantity: Some(1),
            unit_price: Some(1.0),
        }]));

        assert!(svc.list_orders().expect("list failed").is_empty());
    }

    #[test]
    fn get_unknown_order_is_not_found() {
        let err = service()
            .get_order(Uuid::new_v4())
            .expect_err("should be not found");
        assert!(matches!(err, DomainError::NotFound));
    }

    #[test]
    fn update_unknown_order_is_not_found() {
        let err = service()
            .update_order(Uuid::new_v4(), Some(vec![draft("p1", 1, 1.0)]))
            .expect_err("should be not found");
        assert!(matches!(err, DomainError::NotFound));
    }

    #[test]
    fn update_replaces_items_and_recomputes_total() {
        let svc = service();
        let created = svc
            .create_order(Some(vec![draft("p1", 2, 5.0)]))
            .expect("create failed");

        let updated = svc
            .update_order(created.id, Some(vec![draft("p2", 3, 4.0)]))
            .expect("update failed");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.total, 12.0);
        assert_eq!(updated.items.len(), 1);
        assert_eq!(updated.items[0].product_id, "p2");
    }

    #[test]
    fn delete_unknown_order_is_not_found() {
        let err = service()
            .delete_order(Uuid::new_v4())
            .expect_err("should be not found");
        assert!(matches!(err, DomainError::NotFound));
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let svc = service();
        let created = svc
            .create_order(Some(vec![draft("p1", 1, 1.0)]))
            .expect("create failed");

        svc.delete_order(created.id).expect("delete failed");

        assert!(matches!(
            svc.get_order(created.id),
            Err(DomainError::NotFound)
        ));
    }
}
