// server/src/db/mod.rs

//! Database bootstrap: pool, migrations, optional seed data.

pub mod pg_store;

pub use pg_store::PgStore;

use crate::config::AppConfig;
use crate::errors::Result;
use catalog::{Catalog, CatalogError, ProductParams};
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub async fn connect(config: &AppConfig) -> Result<PgPool> {
  let pool = PgPoolOptions::new()
    .max_connections(config.database_max_connections)
    .connect(&config.database_url)
    .await?;
  Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
  sqlx::migrate!("./migrations").run(pool).await?;
  Ok(())
}

const SAMPLE_PRODUCTS: [(&str, &str, i64, i32); 5] = [
  ("Desk Lamp", "Adjustable LED desk lamp with a weighted base.", 3499, 25),
  ("Lamp Shade", "Linen drum shade that fits standard lamp harps.", 1850, 40),
  ("Notebook", "A5 dotted notebook, 192 pages.", 1299, 120),
  ("Fountain Pen", "Steel nib fountain pen, fine point.", 4500, 15),
  ("Ink Bottle", "50ml bottle of blue-black ink.", 999, 60),
];

/// Inserts the sample products through the catalog, so the usual rules apply.
/// Names that already exist are skipped; returns how many were created.
pub async fn seed_db(catalog: &Catalog) -> Result<usize> {
  let mut created = 0;
  for (name, description, price_cents, quantity) in SAMPLE_PRODUCTS {
    let params = ProductParams {
      name: Some(Some(name.to_string())),
      description: Some(Some(description.to_string())),
      price: Some(Some(Decimal::new(price_cents, 2))),
      quantity: Some(Some(quantity)),
    };
    match catalog.create_product(params).await {
      Ok(_) => created += 1,
      Err(CatalogError::Invalid(violations)) if violations.includes("name") => {
        tracing::debug!(product = name, "Seed product already present.");
      }
      Err(e) => return Err(e.into()),
    }
  }
  Ok(created)
}
