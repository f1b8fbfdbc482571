use std::sync::Mutex;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{order_total, ItemInput, ItemView, OrderView};
use crate::domain::ports::OrderStore;

struct StoredOrder {
    id: Uuid,
    total: f64,
    created_at: DateTime<Utc>,
    items: Vec<ItemInput>,
}

impl StoredOrder {
    fn view(&self) -> OrderView {
        OrderView {
            id: self.id,
            total: self.total,
            created_at: self.created_at,
            items: self
                .items
                .iter()
                .map(|item| ItemView {
                    product_id: item.product_id.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                })
                .collect(),
        }
    }
}

/// Volatile store keeping orders in a mutex-guarded vector.
///
/// Requests run in parallel, so the shared vector needs the lock. New
/// orders go to the front, which keeps the list in creation-date
/// descending order without sorting on every read.
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<Vec<StoredOrder>>,
}

impl InMemoryOrderStore {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<StoredOrder>>, DomainError> {
        self.orders
            .lock()
            .map_err(|_| DomainError::Internal("order store mutex poisoned".to_string()))
    }
}

impl OrderStore for InMemoryOrderStore {
    fn list(&self) -> Result<Vec<OrderView>, DomainError> {
        Ok(self.lock()?.iter().map(StoredOrder::view).collect())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError> {
        Ok(self
            .lock()?
            .iter()
            .find(|order| order.id == id)
            .map(StoredOrder::view))
    }

    fn create(&self, items: Vec<ItemInput>) -> Result<OrderView, DomainError> {
        let stored = StoredOrder {
            id: Uuid::new_v4(),
            total: order_total(&items),
            created_at: Utc::now(),
            items,
        };
        let view = stored.view();
        self.lock()?.insert(0, stored);
        Ok(view)
    }

    fn update(&self, id: Uuid, items: Vec<ItemInput>) -> Result<Option<OrderView>, DomainError> {
        let mut orders = self.lock()?;
        let Some(order) = orders.iter_mut().find(|order| order.id == id) else {
            return Ok(None);
        };
        order.total = order_total(&items);
        order.items = items;
        Ok(Some(order.view()))
    }

    fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut orders = self.lock()?;
        let before = orders.len();
        orders.retain(|order| order.id != id);
        Ok(orders.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(product_id: &str, quantity: i32, unit_price: f64) -> ItemInput {
        ItemInput {
            product_id: product_id.to_string(),
            quantity: Some(quantity),
            unit_price: Some(unit_price),
        }
    }

    #[test]
    fn create_and_find_by_id_roundtrip() {
        let store = InMemoryOrderStore::default();

        let created = store
            .create(vec![make_item("p1", 2, 5.0)])
            .expect("create failed");

        let found = store
            .find_by_id(created.id)
            .expect("find failed")
            .expect("order should exist");

        assert_eq!(found.id, created.id);
        assert_eq!(found.total, 10.0);
        assert_eq!(found.items.len(), 1);
    }

    #[test]
    fn find_by_id_returns_none_for_unknown_id() {
        let store = InMemoryOrderStore::default();
        assert!(store
            .find_by_id(Uuid::new_v4())
            .expect("find should not error")
            .is_none());
    }

    #[test]
    fn items_missing_quantity_or_price_count_as_zero() {
        let store = InMemoryOrderStore::default();

        let created = store
            .create(vec![
                make_item("p1", 2, 5.0),
                ItemInput {
                    product_id: "p2".to_string(),
                    quantity: None,
                    unit_price: Some(99.0),
                },
            ])
            .expect("create failed");

        assert_eq!(created.total, 10.0);
        assert_eq!(created.items.len(), 2);
    }

    #[test]
    fn update_replaces_item_set_and_recomputes_total() {
        let store = InMemoryOrderStore::default();
        let created = store
            .create(vec![make_item("p1", 2, 5.0), make_item("p2", 1, 3.0)])
            .expect("create failed");

        let updated = store
            .update(created.id, vec![make_item("p3", 4, 2.5)])
            .expect("update failed")
            .expect("order should exist");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.total, 10.0);
        assert_eq!(updated.items.len(), 1);
        assert_eq!(updated.items[0].product_id, "p3");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn update_returns_none_for_unknown_id() {
        let store = InMemoryOrderStore::default();
        assert!(store
            .update(Uuid::new_v4(), vec![make_item("p1", 1, 1.0)])
            .expect("update should not error")
            .is_none());
    }

    #[test]
    fn delete_removes_the_order() {
        let store = InMemoryOrderStore::default();
        let created = store
            .create(vec![make_item("p1", 1, 1.0)])
            .expect("create failed");

        assert!(store.delete(created.id).expect("delete failed"));
        assert!(store
            .find_by_id(created.id)
            .expect("find failed")
            .is_none());
    }

    #[test]
    fn delete_returns_false_for_unknown_id() {
        let store = InMemoryOrderStore::default();
        assert!(!store.delete(Uuid::new_v4()).expect("delete should not error"));
    }

    #[test]
    fn list_returns_all_orders_newest_first() {
        let store = InMemoryOrderStore::default();

        let first = store
            .create(vec![make_item("p1", 1, 1.0)])
            .expect("create failed");
        let second = store
            .create(vec![make_item("p2", 1, 1.0)])
            .expect("create failed");

        let listed = store.list().expect("list failed");

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }
}
