pub mod orders;

use actix_web::HttpResponse;

/// GET /
///
/// Plain-text greeting, handy as a smoke check that the service is up.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is up", body = String))
)]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Order service up and running")
}
