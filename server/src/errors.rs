// server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use catalog::CatalogError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  /// Rule violations, as full messages in rule order.
  #[error("Validation Error: {}", .0.join("; "))]
  Validation(Vec<String>),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Bad Request: {0}")]
  BadRequest(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Migration Error: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

impl From<CatalogError> for AppError {
  fn from(err: CatalogError) -> Self {
    match err {
      not_found @ CatalogError::NotFound { .. } => AppError::NotFound(not_found.to_string()),
      CatalogError::Invalid(violations) => AppError::Validation(violations.full_messages()),
      // Keep the whole source chain for the log line; it never reaches the client.
      CatalogError::Storage { source } => AppError::Internal(format!("{:#}", source)),
    }
  }
}

impl AppError {
  pub fn missing_param(key: &str) -> Self {
    AppError::BadRequest(format!("param is missing or the value is empty: {}", key))
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Migration(_) | AppError::Internal(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, status = status.as_u16(), "Responding with error");
    }

    match self {
      AppError::Validation(messages) => HttpResponse::UnprocessableEntity().json(json!({ "errors": messages })),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({ "errors": [m] })),
      AppError::BadRequest(m) => HttpResponse::BadRequest().json(json!({ "errors": [m] })),
      // Server-side failures carry no details to the client.
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Migration(_) | AppError::Internal(_) => {
        HttpResponse::InternalServerError().finish()
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
