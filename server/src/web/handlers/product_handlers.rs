// server/src/web/handlers/product_handlers.rs

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use catalog::{ListQuery, ProductId, ProductParams};
use serde_json::Value;
use tracing::{info, instrument};

use super::require_param;
use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state, query_params))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
  let query = ListQuery::from_pairs(query_params.into_inner());
  let products = app_state.catalog.list_products(&query).await?;
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.catalog.get_product(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::create_product", skip(app_state, body))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
  let params: ProductParams = require_param(body.into_inner(), "product")?;
  let product = app_state.catalog.create_product(params).await?;

  info!(product_id = product.id, "Product created via API.");
  Ok(
    HttpResponse::Created()
      .insert_header((header::LOCATION, format!("/products/{}", product.id)))
      .json(product),
  )
}

// Serves both PATCH and PUT; either way only the supplied attributes change.
#[instrument(name = "handler::update_product", skip(app_state, path, body), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
  body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
  let params: ProductParams = require_param(body.into_inner(), "product")?;
  let product = app_state.catalog.update_product(path.into_inner(), params).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::destroy_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn destroy_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
) -> Result<HttpResponse, AppError> {
  app_state.catalog.destroy_product(path.into_inner()).await?;
  Ok(HttpResponse::NoContent().finish())
}
