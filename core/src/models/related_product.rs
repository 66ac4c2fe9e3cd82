// core/src/models/related_product.rs

use super::ProductId;
use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

pub type RelatedProductId = i64;

/// A directed edge `product_id -> related_product_id`, owned by `product_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedProduct {
  pub id: RelatedProductId,
  pub product_id: ProductId,
  pub related_product_id: ProductId,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Body sent under the `related_product` key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RelatedProductParams {
  #[serde(default, deserialize_with = "lenient_id")]
  pub related_product_id: Option<ProductId>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
  Number(i64),
  Text(String),
  Other(IgnoredAny),
}

// Form-style clients send ids as strings. Anything that is not an integer
// (floats, booleans, objects, non-numeric text) counts as missing.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<ProductId>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Option::<IdRepr>::deserialize(deserializer)? {
    Some(IdRepr::Number(id)) => Some(id),
    Some(IdRepr::Text(raw)) => raw.trim().parse().ok(),
    Some(IdRepr::Other(_)) | None => None,
  })
}

/// Candidate edge checked by the link rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDraft {
  pub product_id: ProductId,
  pub related_product_id: Option<ProductId>,
}

impl LinkDraft {
  pub fn new(product_id: ProductId, params: RelatedProductParams) -> Self {
    Self {
      product_id,
      related_product_id: params.related_product_id,
    }
  }
}
