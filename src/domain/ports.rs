use uuid::Uuid;

use super::errors::DomainError;
use super::order::{ItemInput, OrderView};

/// Storage contract for orders.
///
/// Implementations own id and timestamp generation and must derive the
/// stored total from the item set they are given, so that the total can
/// never drift from the items at rest. Multi-row writes are atomic.
pub trait OrderStore: Send + Sync + 'static {
    /// All orders with their items, newest first.
    fn list(&self) -> Result<Vec<OrderView>, DomainError>;

    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError>;

    fn create(&self, items: Vec<ItemInput>) -> Result<OrderView, DomainError>;

    /// Replace the full item set of an existing order. `None` if the id is
    /// unknown.
    fn update(&self, id: Uuid, items: Vec<ItemInput>) -> Result<Option<OrderView>, DomainError>;

    /// Remove the order and its items. `false` if the id is unknown.
    fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
