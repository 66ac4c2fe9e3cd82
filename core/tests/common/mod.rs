// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use catalog::{Catalog, CatalogStore, MemoryStore, Product, ProductParams};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::Level;

// --- Helper for Tracing Setup ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Several test binaries may race to install it
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// A catalog backed by a fresh in-memory store, plus a handle on that store.
pub fn new_catalog() -> (Catalog, Arc<MemoryStore>) {
  setup_tracing();
  let store = Arc::new(MemoryStore::new());
  let catalog = Catalog::new(store.clone());
  (catalog, store)
}

// --- Fixtures ---

/// Valid attributes for the n-th sample product ("Product n").
pub fn product_params(n: u32) -> ProductParams {
  ProductParams {
    name: Some(Some(format!("Product {}", n))),
    description: Some(Some(format!("Description of product {}.", n))),
    price: Some(Some(Decimal::new(1000 + i64::from(n) * 25, 2))),
    quantity: Some(Some((n % 50) as i32)),
  }
}

pub async fn create_products(catalog: &Catalog, count: u32) -> Vec<Product> {
  let mut created = Vec::with_capacity(count as usize);
  for n in 1..=count {
    created.push(
      catalog
        .create_product(product_params(n))
        .await
        .expect("fixture product should be valid"),
    );
  }
  created
}

pub async fn product_count(store: &MemoryStore) -> u64 {
  store.count_products().await.expect("memory store count cannot fail")
}

/// Full messages of an `Invalid` error; panics on any other outcome.
pub fn messages<T: std::fmt::Debug>(result: catalog::CatalogResult<T>) -> Vec<String> {
  match result {
    Err(catalog::CatalogError::Invalid(violations)) => violations.full_messages(),
    other => panic!("Expected CatalogError::Invalid, got {:?}", other),
  }
}
