// core/src/catalog/mod.rs

//! Defines `Catalog`, the service every API operation goes through.
//! Product operations live in `products.rs`, link operations in `related_products.rs`.

pub mod products;
pub mod related_products;

use crate::models::{LinkDraft, ProductDraft};
use crate::store::CatalogStore;
use crate::validation::RuleSet;
use std::sync::Arc;

/// Runs the catalog's rule sets and drives a `CatalogStore`.
///
/// Cheap to share behind an `Arc`; it holds no per-request state.
pub struct Catalog {
  store: Arc<dyn CatalogStore>,
  product_rules: RuleSet<ProductDraft>,
  link_rules: RuleSet<LinkDraft>,
}

impl Catalog {
  pub fn new(store: Arc<dyn CatalogStore>) -> Self {
    Self {
      store,
      product_rules: products::product_rules(),
      link_rules: related_products::link_rules(),
    }
  }

  pub fn store(&self) -> &Arc<dyn CatalogStore> {
    &self.store
  }

  pub fn product_rules(&self) -> &RuleSet<ProductDraft> {
    &self.product_rules
  }

  pub fn link_rules(&self) -> &RuleSet<LinkDraft> {
    &self.link_rules
  }
}

impl std::fmt::Debug for Catalog {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Catalog")
      .field("product_rules", &self.product_rules)
      .field("link_rules", &self.link_rules)
      .finish_non_exhaustive()
  }
}
