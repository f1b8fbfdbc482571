use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::OrderService;
use crate::domain::order::{ItemDraft, OrderView};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

// The wire field names are fixed by existing clients and must not change.

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderItemRequest {
    #[serde(rename = "productId")]
    pub product_id: Option<String>,
    #[serde(rename = "quantidadeItem")]
    pub quantity: Option<i32>,
    #[serde(rename = "valorItem")]
    pub unit_price: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderRequest {
    pub items: Option<Vec<OrderItemRequest>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemResponse {
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(rename = "quantidadeItem", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(rename = "valorItem", skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    #[serde(rename = "numeroPedido")]
    pub order_id: Uuid,
    #[serde(rename = "valorTotal")]
    pub total: f64,
    /// Creation timestamp in RFC 3339 form.
    #[serde(rename = "dataCriacao")]
    pub created_at: String,
    pub items: Vec<OrderItemResponse>,
}

fn to_drafts(body: OrderRequest) -> Option<Vec<ItemDraft>> {
    body.items.map(|items| {
        items
            .into_iter()
            .map(|item| ItemDraft {
                product_id: item.product_id,
                quantity: item.quantity,
                unit_price: item.unit_price,
            })
            .collect()
    })
}

fn to_response(order: OrderView) -> OrderResponse {
    OrderResponse {
        order_id: order.id,
        total: order.total,
        created_at: order.created_at.to_rfc3339(),
        items: order
            .items
            .into_iter()
            .map(|item| OrderItemResponse {
                product_id: item.product_id,
                quantity: item.quantity,
                unit_price: item.unit_price,
            })
            .collect(),
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /order/list
///
/// Returns every order with its items, newest first.
#[utoipa::path(
    get,
    path = "/order/list",
    responses(
        (status = 200, description = "All orders with their items", body = [OrderResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(service: web::Data<OrderService>) -> Result<HttpResponse, AppError> {
    let svc = service.get_ref().clone();

    let orders = web::block(move || svc.list_orders())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<OrderResponse> = orders.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /order/{id}
#[utoipa::path(
    get,
    path = "/order/{id}",
    params(("id" = Uuid, Path, description = "Order UUID")),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<OrderService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let svc = service.get_ref().clone();
    let order_id = path.into_inner();

    let order = web::block(move || svc.get_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(to_response(order)))
}

/// POST /order
///
/// Creates a new order from an item array. The order row and all item rows
/// are written inside a single database transaction.
#[utoipa::path(
    post,
    path = "/order",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Missing or invalid items"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<OrderService>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let svc = service.get_ref().clone();
    let drafts = to_drafts(body.into_inner());

    let order = web::block(move || svc.create_order(drafts))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(to_response(order)))
}

/// PUT /order/{id}
///
/// Replaces the full item set of an existing order and recomputes its total.
#[utoipa::path(
    put,
    path = "/order/{id}",
    params(("id" = Uuid, Path, description = "Order UUID")),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 400, description = "Missing or invalid items"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn update_order(
    service: web::Data<OrderService>,
    path: web::Path<Uuid>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let svc = service.get_ref().clone();
    let order_id = path.into_inner();
    let drafts = to_drafts(body.into_inner());

    let order = web::block(move || svc.update_order(order_id, drafts))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(to_response(order)))
}

/// DELETE /order/{id}
#[utoipa::path(
    delete,
    path = "/order/{id}",
    params(("id" = Uuid, Path, description = "Order UUID")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    service: web::Data<OrderService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let svc = service.get_ref().clone();
    let order_id = path.into_inner();

    web::block(move || svc.delete_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::NoContent().finish())
}
