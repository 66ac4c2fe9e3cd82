// server/src/web/mod.rs

// Builds an actix test service over the real routes. Defined before the child
// modules so their test modules can use it.
#[cfg(test)]
macro_rules! init_test_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .configure($crate::web::configure_app_routes),
    )
  };
}

// Declare child modules
pub mod handlers;
pub mod routes;

pub use routes::configure_app_routes;

#[cfg(test)]
pub(crate) mod test_support {
  use crate::state::AppState;
  use catalog::{MemoryStore, Product, ProductParams};
  use rust_decimal::Decimal;
  use std::sync::Arc;

  pub fn memory_state() -> AppState {
    AppState::new(Arc::new(MemoryStore::new()))
  }

  pub fn product_params(n: u32) -> ProductParams {
    ProductParams {
      name: Some(Some(format!("Product {}", n))),
      description: Some(Some(format!("Description of product {}.", n))),
      price: Some(Some(Decimal::new(1000 + i64::from(n) * 25, 2))),
      quantity: Some(Some((n % 50) as i32)),
    }
  }

  pub async fn create_products(state: &AppState, count: u32) -> Vec<Product> {
    let mut created = Vec::new();
    for n in 1..=count {
      created.push(state.catalog.create_product(product_params(n)).await.unwrap());
    }
    created
  }
}
