// core/src/store/memory.rs

use super::CatalogStore;
use crate::error::CatalogResult;
use crate::models::{Product, ProductAttributes, ProductId, RelatedProduct, RelatedProductId};
use crate::query::ListQuery;
use crate::validation::messages::{ASSOCIATED_TWICE, TAKEN};
use crate::validation::{Violation, Violations};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct Tables {
  products: BTreeMap<ProductId, Product>,
  related_products: BTreeMap<RelatedProductId, RelatedProduct>,
  last_product_id: ProductId,
  last_related_product_id: RelatedProductId,
}

impl Tables {
  fn name_taken(&self, name: &str, except: Option<ProductId>) -> bool {
    self
      .products
      .values()
      .any(|p| p.name == name && Some(p.id) != except)
  }
}

/// `CatalogStore` kept entirely in process memory.
///
/// Each operation takes the table lock once, so every write is atomic. The
/// lock is never held across an `.await`.
#[derive(Debug, Default)]
pub struct MemoryStore {
  tables: RwLock<Tables>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

// Wall-clock time, nudged forward when needed so a record's timestamps
// strictly increase on every write.
fn next_timestamp(previous: Option<DateTime<Utc>>) -> DateTime<Utc> {
  let now = Utc::now();
  match previous {
    Some(prev) if now <= prev => prev + Duration::microseconds(1),
    _ => now,
  }
}

fn name_taken_violation() -> Violations {
  Violations::single(Violation::new("name", TAKEN))
}

#[async_trait]
impl CatalogStore for MemoryStore {
  async fn list_products(&self, query: &ListQuery) -> CatalogResult<Vec<Product>> {
    let tables = self.tables.read();
    let mut matching: Vec<&Product> = tables.products.values().filter(|p| query.matches(p)).collect();
    matching.sort_by(|a, b| query.sort.compare(a, b));

    let offset = usize::try_from(query.pagination.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(query.pagination.limit()).unwrap_or(usize::MAX);
    Ok(matching.into_iter().skip(offset).take(limit).cloned().collect())
  }

  async fn count_products(&self) -> CatalogResult<u64> {
    Ok(self.tables.read().products.len() as u64)
  }

  async fn find_product(&self, id: ProductId) -> CatalogResult<Option<Product>> {
    Ok(self.tables.read().products.get(&id).cloned())
  }

  async fn product_name_taken(&self, name: &str, except: Option<ProductId>) -> CatalogResult<bool> {
    Ok(self.tables.read().name_taken(name, except))
  }

  async fn insert_product(&self, attributes: ProductAttributes) -> CatalogResult<Product> {
    let mut tables = self.tables.write();
    if tables.name_taken(&attributes.name, None) {
      return Err(name_taken_violation().into());
    }

    tables.last_product_id += 1;
    let now = next_timestamp(None);
    let product = Product {
      id: tables.last_product_id,
      name: attributes.name,
      description: attributes.description,
      price: attributes.price,
      quantity: attributes.quantity,
      created_at: now,
      updated_at: now,
    };
    tables.products.insert(product.id, product.clone());
    Ok(product)
  }

  async fn update_product(&self, id: ProductId, attributes: ProductAttributes) -> CatalogResult<Option<Product>> {
    let mut tables = self.tables.write();
    if tables.name_taken(&attributes.name, Some(id)) {
      return Err(name_taken_violation().into());
    }

    let Some(product) = tables.products.get_mut(&id) else {
      return Ok(None);
    };
    product.name = attributes.name;
    product.description = attributes.description;
    product.price = attributes.price;
    product.quantity = attributes.quantity;
    product.updated_at = next_timestamp(Some(product.updated_at));
    Ok(Some(product.clone()))
  }

  async fn delete_product(&self, id: ProductId) -> CatalogResult<bool> {
    let mut tables = self.tables.write();
    if !tables.products.contains_key(&id) {
      return Ok(false);
    }
    tables.related_products.retain(|_, edge| edge.product_id != id);
    tables.products.remove(&id);
    Ok(true)
  }

  async fn associated_product_ids(&self, product_id: ProductId) -> CatalogResult<Vec<ProductId>> {
    let tables = self.tables.read();
    Ok(
      tables
        .related_products
        .values()
        .filter(|edge| edge.product_id == product_id && tables.products.contains_key(&edge.related_product_id))
        .map(|edge| edge.related_product_id)
        .collect(),
    )
  }

  async fn insert_related_product(
    &self,
    product_id: ProductId,
    related_product_id: ProductId,
  ) -> CatalogResult<RelatedProduct> {
    let mut tables = self.tables.write();
    let duplicate = tables
      .related_products
      .values()
      .any(|edge| edge.product_id == product_id && edge.related_product_id == related_product_id);
    if duplicate {
      return Err(Violations::single(Violation::base(ASSOCIATED_TWICE)).into());
    }

    tables.last_related_product_id += 1;
    let now = next_timestamp(None);
    let edge = RelatedProduct {
      id: tables.last_related_product_id,
      product_id,
      related_product_id,
      created_at: now,
      updated_at: now,
    };
    tables.related_products.insert(edge.id, edge.clone());
    Ok(edge)
  }

  async fn find_related_product(
    &self,
    product_id: ProductId,
    related_product_id: ProductId,
  ) -> CatalogResult<Option<RelatedProduct>> {
    Ok(
      self
        .tables
        .read()
        .related_products
        .values()
        .find(|edge| edge.product_id == product_id && edge.related_product_id == related_product_id)
        .cloned(),
    )
  }

  async fn delete_related_product(&self, id: RelatedProductId) -> CatalogResult<bool> {
    Ok(self.tables.write().related_products.remove(&id).is_some())
  }
}
