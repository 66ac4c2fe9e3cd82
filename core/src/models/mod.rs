// core/src/models/mod.rs

//! Contains data structures representing catalog records, the parameters clients
//! send for them, and the drafts that are validated before a write.

pub mod product;
pub mod related_product;

pub use product::{Product, ProductAttributes, ProductDraft, ProductId, ProductParams};
pub use related_product::{LinkDraft, RelatedProduct, RelatedProductId, RelatedProductParams};

use serde::{Deserialize, Deserializer};

/// Distinguishes an attribute that was sent as `null` (`Some(None)`) from one
/// that was not sent at all (`None`, via `#[serde(default)]`).
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Option::<T>::deserialize(deserializer).map(Some)
}
