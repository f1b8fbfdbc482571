use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::DomainError;

/// Raw item fields as they arrive from a client, before validation.
#[derive(Debug, Clone)]
pub struct ItemDraft {
    pub product_id: Option<String>,
    pub quantity: Option<i32>,
    pub unit_price: Option<f64>,
}

/// A validated item: the product reference is guaranteed present, but
/// quantity and price may still be absent and then count as zero in the
/// order total.
#[derive(Debug, Clone)]
pub struct ItemInput {
    pub product_id: String,
    pub quantity: Option<i32>,
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ItemView {
    pub product_id: String,
    pub quantity: Option<i32>,
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: Uuid,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub items: Vec<ItemView>,
}

/// Check the item array an order is created or updated with.
///
/// The array must be present and non-empty, and every item must carry a
/// non-empty product id. Quantity and price stay optional.
pub fn validate_items(items: Option<Vec<ItemDraft>>) -> Result<Vec<ItemInput>, DomainError> {
    let items = match items {
        Some(items) if !items.is_empty() => items,
        _ => {
            return Err(DomainError::InvalidInput(
                "the 'items' field is required and must be a non-empty array".to_string(),
            ))
        }
    };

    items
        .into_iter()
        .map(|draft| match draft.product_id {
            Some(product_id) if !product_id.is_empty() => Ok(ItemInput {
                product_id,
                quantity: draft.quantity,
                unit_price: draft.unit_price,
            }),
            _ => Err(DomainError::InvalidInput(
                "every item must have a productId".to_string(),
            )),
        })
        .collect()
}

/// Sum of quantity x unit price over the items.
///
/// Items missing either field contribute zero instead of failing the order.
pub fn order_total(items: &[ItemInput]) -> f64 {
    items
        .iter()
        .filter_map(|item| Some(f64::from(item.quantity?) * item.unit_price?))
        .sum()
}
