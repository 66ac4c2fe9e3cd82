// server/src/web/routes.rs

use crate::errors::AppError;
use crate::web::handlers::{product_handlers, related_product_handlers};
use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{web, HttpRequest};
use catalog::CatalogError;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Typed path ids always name a product. Report the first segment that is not an
// integer the same way a missing record is reported.
fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
  let info = req.match_info();
  let raw = ["product_id", "id"]
    .into_iter()
    .filter_map(|segment| info.get(segment))
    .find(|value| value.parse::<i64>().is_err())
    .unwrap_or_default()
    .to_string();
  tracing::debug!(error = %err, raw_id = %raw, "Unparseable path id.");
  AppError::from(CatalogError::product_not_found(raw)).into()
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::BadRequest(err.to_string()).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::BadRequest(err.to_string()).into()
}

// This function will be called in `main.rs` (and by the handler tests) to configure the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
    // Health Check Route
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/products")
        .route("", web::get().to(product_handlers::list_products_handler))
        .route("", web::post().to(product_handlers::create_product_handler))
        .route("/{id}", web::get().to(product_handlers::get_product_handler))
        .route("/{id}", web::patch().to(product_handlers::update_product_handler))
        .route("/{id}", web::put().to(product_handlers::update_product_handler))
        .route("/{id}", web::delete().to(product_handlers::destroy_product_handler))
        // Links owned by a product
        .route(
          "/{product_id}/related_products",
          web::post().to(related_product_handlers::create_related_product_handler),
        )
        .route(
          "/{product_id}/related_products/{id}",
          web::delete().to(related_product_handlers::destroy_related_product_handler),
        ),
    );
}
