// core/src/store/mod.rs

//! Storage seam for the catalog. `Catalog` only ever talks to a
//! `dyn CatalogStore`; the server plugs in PostgreSQL, tests use [`MemoryStore`].

pub mod memory;

pub use memory::MemoryStore;

use crate::error::CatalogResult;
use crate::models::{Product, ProductAttributes, ProductId, RelatedProduct, RelatedProductId};
use crate::query::ListQuery;
use async_trait::async_trait;

/// Persistence operations the catalog needs.
///
/// Every write is atomic. Implementations must also enforce the storage-level
/// uniqueness constraints (product name; `(product_id, related_product_id)`)
/// and report a breach as `CatalogError::Invalid` carrying the same violation
/// the corresponding validation rule would have produced. That closes the gap
/// between a rule passing and the write landing.
#[async_trait]
pub trait CatalogStore: Send + Sync {
  /// Filtered, ordered, paginated products.
  async fn list_products(&self, query: &ListQuery) -> CatalogResult<Vec<Product>>;

  async fn count_products(&self) -> CatalogResult<u64>;

  async fn find_product(&self, id: ProductId) -> CatalogResult<Option<Product>>;

  /// Whether another product (not `except`) already uses `name`.
  async fn product_name_taken(&self, name: &str, except: Option<ProductId>) -> CatalogResult<bool>;

  async fn insert_product(&self, attributes: ProductAttributes) -> CatalogResult<Product>;

  /// Replaces the business attributes and advances `updated_at`.
  /// `Ok(None)` if the product no longer exists.
  async fn update_product(&self, id: ProductId, attributes: ProductAttributes) -> CatalogResult<Option<Product>>;

  /// Removes every edge owned by the product, then the product, in one
  /// transaction. `Ok(false)` if the product did not exist.
  async fn delete_product(&self, id: ProductId) -> CatalogResult<bool>;

  /// Ids of the existing products the given product links to, in edge order.
  /// Edges whose target no longer exists are skipped.
  async fn associated_product_ids(&self, product_id: ProductId) -> CatalogResult<Vec<ProductId>>;

  async fn insert_related_product(
    &self,
    product_id: ProductId,
    related_product_id: ProductId,
  ) -> CatalogResult<RelatedProduct>;

  /// The edge owned by `product_id` that points at `related_product_id`.
  async fn find_related_product(
    &self,
    product_id: ProductId,
    related_product_id: ProductId,
  ) -> CatalogResult<Option<RelatedProduct>>;

  async fn delete_related_product(&self, id: RelatedProductId) -> CatalogResult<bool>;
}
