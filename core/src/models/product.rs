// core/src/models/product.rs

use super::nullable;
use crate::query::{Column, Value};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type ProductId = i64;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  pub description: String,
  pub price: Decimal,
  pub quantity: i32,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Product {
  /// The value stored in `column`, typed for comparison against filter values.
  pub fn value_of(&self, column: Column) -> Value {
    match column {
      Column::Id => Value::Integer(self.id),
      Column::Name => Value::Text(self.name.clone()),
      Column::Description => Value::Text(self.description.clone()),
      Column::Price => Value::Decimal(self.price),
      Column::Quantity => Value::Integer(i64::from(self.quantity)),
      Column::CreatedAt => Value::Timestamp(self.created_at),
      Column::UpdatedAt => Value::Timestamp(self.updated_at),
    }
  }

  pub fn attributes(&self) -> ProductAttributes {
    ProductAttributes {
      name: self.name.clone(),
      description: self.description.clone(),
      price: self.price,
      quantity: self.quantity,
    }
  }
}

/// The business attributes of a product once every rule has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductAttributes {
  pub name: String,
  pub description: String,
  pub price: Decimal,
  pub quantity: i32,
}

/// Attributes as sent by a client under the `product` key.
///
/// The outer `Option` says whether the attribute was supplied, the inner one
/// whether it was supplied as `null`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductParams {
  #[serde(default, deserialize_with = "nullable")]
  pub name: Option<Option<String>>,
  #[serde(default, deserialize_with = "nullable")]
  pub description: Option<Option<String>>,
  #[serde(default, deserialize_with = "nullable")]
  pub price: Option<Option<Decimal>>,
  #[serde(default, deserialize_with = "nullable")]
  pub quantity: Option<Option<i32>>,
}

/// Candidate product state checked by the product rule set.
///
/// `id` is set when the draft replaces an existing record, so uniqueness checks
/// can ignore that record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
  pub id: Option<ProductId>,
  pub name: Option<String>,
  pub description: Option<String>,
  pub price: Option<Decimal>,
  pub quantity: Option<i32>,
}

impl ProductDraft {
  pub fn from_params(params: ProductParams) -> Self {
    Self {
      id: None,
      name: params.name.flatten(),
      description: params.description.flatten(),
      price: params.price.flatten(),
      quantity: params.quantity.flatten(),
    }
  }

  /// Starts from `existing` and replaces only the attributes present in `params`.
  pub fn for_update(existing: &Product, params: ProductParams) -> Self {
    Self {
      id: Some(existing.id),
      name: params.name.unwrap_or_else(|| Some(existing.name.clone())),
      description: params.description.unwrap_or_else(|| Some(existing.description.clone())),
      price: params.price.unwrap_or(Some(existing.price)),
      quantity: params.quantity.unwrap_or(Some(existing.quantity)),
    }
  }

  /// `None` while any attribute is still missing.
  pub fn into_attributes(self) -> Option<ProductAttributes> {
    Some(ProductAttributes {
      name: self.name?,
      description: self.description?,
      price: self.price?,
      quantity: self.quantity?,
    })
  }
}
