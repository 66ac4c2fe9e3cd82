// server/src/web/handlers/related_product_handlers.rs

use actix_web::{web, HttpResponse};
use catalog::{ProductId, RelatedProductParams};
use serde_json::Value;
use tracing::{debug, instrument};

use super::require_param;
use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::create_related_product", skip(app_state, path, body), fields(product_id = %path.as_ref()))]
pub async fn create_related_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
  body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
  let params: RelatedProductParams = require_param(body.into_inner(), "related_product")?;
  let edge = app_state
    .catalog
    .create_related_product(path.into_inner(), params)
    .await?;
  Ok(HttpResponse::Created().json(edge))
}

/// `id` here is the related product's id, not the link's own id. An `id` that is
/// not an integer can match no link, so it is the same silent no-op once the
/// owning product is known to exist.
#[instrument(name = "handler::destroy_related_product", skip(app_state, path))]
pub async fn destroy_related_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(ProductId, String)>,
) -> Result<HttpResponse, AppError> {
  let (product_id, raw_related_id) = path.into_inner();
  match raw_related_id.parse::<ProductId>() {
    Ok(related_product_id) => {
      app_state
        .catalog
        .destroy_related_product(product_id, related_product_id)
        .await?;
    }
    Err(_) => {
      app_state.catalog.get_product(product_id).await?;
      debug!(raw_related_id = %raw_related_id, "Non-numeric related product id; nothing to unlink.");
    }
  }
  Ok(HttpResponse::NoContent().finish())
}
