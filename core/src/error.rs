// core/src/error.rs
use crate::validation::Violations;
use anyhow::Error as AnyhowError;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
  /// The requested record does not exist. The display form is the exact
  /// message returned to API clients.
  #[error("Couldn't find {resource} with 'id'={id}")]
  NotFound { resource: &'static str, id: String },

  /// One or more validation rules failed; violations are kept in rule order.
  #[error("Validation failed: {0}")]
  Invalid(Violations),

  #[error("Storage backend failure. Source: {source}")]
  Storage {
    #[source]
    source: AnyhowError,
  },
}

impl CatalogError {
  pub fn not_found(resource: &'static str, id: impl Display) -> Self {
    CatalogError::NotFound {
      resource,
      id: id.to_string(),
    }
  }

  pub fn product_not_found(id: impl Display) -> Self {
    Self::not_found("Product", id)
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, CatalogError::NotFound { .. })
  }

  /// Returns the violations if this is a validation failure.
  pub fn violations(&self) -> Option<&Violations> {
    match self {
      CatalogError::Invalid(violations) => Some(violations),
      _ => None,
    }
  }
}

impl From<Violations> for CatalogError {
  fn from(violations: Violations) -> Self {
    CatalogError::Invalid(violations)
  }
}

// Storage backends report their driver errors through anyhow so this crate
// stays independent of any particular database client.
impl From<AnyhowError> for CatalogError {
  fn from(err: AnyhowError) -> Self {
    CatalogError::Storage { source: err }
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
