// server/src/state.rs
use catalog::{Catalog, CatalogStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub catalog: Arc<Catalog>,
}

impl AppState {
  pub fn new(store: Arc<dyn CatalogStore>) -> Self {
    Self {
      catalog: Arc::new(Catalog::new(store)),
    }
  }
}
