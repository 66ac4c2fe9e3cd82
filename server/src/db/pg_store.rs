// server/src/db/pg_store.rs

//! PostgreSQL implementation of `catalog::CatalogStore`.
//!
//! Dynamic listing SQL is assembled with `sqlx::QueryBuilder`: column names come
//! only from `catalog::Column`'s allow-list, every client value is a bound parameter.

use async_trait::async_trait;
use catalog::validation::messages::{ASSOCIATED_TWICE, TAKEN};
use catalog::{
  CatalogError, CatalogResult, CatalogStore, Condition, ListQuery, Predicate, Product, ProductAttributes, ProductId,
  RelatedProduct, RelatedProductId, Value, Violation, Violations,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::{error, instrument};

// Unique index names from migrations/; a breach maps back to the rule's message.
const PRODUCTS_NAME_INDEX: &str = "index_products_on_name";
const RELATED_PRODUCTS_PAIR_INDEX: &str = "index_related_products_on_product_id_and_related_product_id";

#[derive(Debug, FromRow)]
struct ProductRow {
  id: i64,
  name: String,
  description: String,
  price: Decimal,
  quantity: i32,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: row.id,
      name: row.name,
      description: row.description,
      price: row.price,
      quantity: row.quantity,
      created_at: row.created_at,
      updated_at: row.updated_at,
    }
  }
}

#[derive(Debug, FromRow)]
struct RelatedProductRow {
  id: i64,
  product_id: i64,
  related_product_id: i64,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<RelatedProductRow> for RelatedProduct {
  fn from(row: RelatedProductRow) -> Self {
    RelatedProduct {
      id: row.id,
      product_id: row.product_id,
      related_product_id: row.related_product_id,
      created_at: row.created_at,
      updated_at: row.updated_at,
    }
  }
}

fn storage_error(e: sqlx::Error) -> CatalogError {
  error!("Database operation failed: {}", e);
  anyhow::Error::new(e).into()
}

fn write_error(e: sqlx::Error) -> CatalogError {
  if let sqlx::Error::Database(db_err) = &e {
    if db_err.is_unique_violation() {
      match db_err.constraint() {
        Some(PRODUCTS_NAME_INDEX) => return Violations::single(Violation::new("name", TAKEN)).into(),
        Some(RELATED_PRODUCTS_PAIR_INDEX) => return Violations::single(Violation::base(ASSOCIATED_TWICE)).into(),
        _ => {}
      }
    }
  }
  storage_error(e)
}

fn push_condition(qb: &mut QueryBuilder<'_, Postgres>, condition: &Condition) {
  let column = condition.column.as_str();

  if let Some(pattern) = condition.like_pattern() {
    let operator = if condition.predicate == Predicate::NotCont {
      " NOT ILIKE "
    } else {
      " ILIKE "
    };
    qb.push(column).push(operator).push_bind(pattern);
    return;
  }

  let operator = match condition.predicate {
    Predicate::NotEq => " <> ",
    Predicate::Lt => " < ",
    Predicate::Lteq => " <= ",
    Predicate::Gt => " > ",
    Predicate::Gteq => " >= ",
    _ => " = ",
  };
  qb.push(column).push(operator);
  match &condition.value {
    Value::Integer(v) => qb.push_bind(*v),
    Value::Decimal(v) => qb.push_bind(*v),
    Value::Text(v) => qb.push_bind(v.clone()),
    Value::Timestamp(v) => qb.push_bind(*v),
  };
}

#[derive(Debug, Clone)]
pub struct PgStore {
  pool: PgPool,
}

impl PgStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl CatalogStore for PgStore {
  #[instrument(name = "PgStore::list_products", skip_all)]
  async fn list_products(&self, query: &ListQuery) -> CatalogResult<Vec<Product>> {
    let mut qb = QueryBuilder::<Postgres>::new(
      "SELECT id, name, description, price, quantity, created_at, updated_at FROM products",
    );
    for (idx, condition) in query.filters.iter().enumerate() {
      qb.push(if idx == 0 { " WHERE " } else { " AND " });
      push_condition(&mut qb, condition);
    }

    qb.push(" ORDER BY ")
      .push(query.sort.column.as_str())
      .push(" ")
      .push(query.sort.direction.as_sql());
    if query.sort.needs_tie_breaker() {
      qb.push(", id ASC");
    }
    qb.push(" LIMIT ")
      .push_bind(query.pagination.limit())
      .push(" OFFSET ")
      .push_bind(query.pagination.offset());

    let rows: Vec<ProductRow> = qb
      .build_query_as()
      .fetch_all(&self.pool)
      .await
      .map_err(storage_error)?;
    Ok(rows.into_iter().map(Product::from).collect())
  }

  async fn count_products(&self) -> CatalogResult<u64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
      .fetch_one(&self.pool)
      .await
      .map_err(storage_error)?;
    Ok(count.max(0) as u64)
  }

  async fn find_product(&self, id: ProductId) -> CatalogResult<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(
      "SELECT id, name, description, price, quantity, created_at, updated_at FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .map_err(storage_error)?;
    Ok(row.map(Product::from))
  }

  async fn product_name_taken(&self, name: &str, except: Option<ProductId>) -> CatalogResult<bool> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2))")
      .bind(name)
      .bind(except)
      .fetch_one(&self.pool)
      .await
      .map_err(storage_error)
  }

  async fn insert_product(&self, attributes: ProductAttributes) -> CatalogResult<Product> {
    let row: ProductRow = sqlx::query_as(
      r#"
      INSERT INTO products (name, description, price, quantity, created_at, updated_at)
      VALUES ($1, $2, $3, $4, NOW(), NOW())
      RETURNING id, name, description, price, quantity, created_at, updated_at
      "#,
    )
    .bind(attributes.name)
    .bind(attributes.description)
    .bind(attributes.price)
    .bind(attributes.quantity)
    .fetch_one(&self.pool)
    .await
    .map_err(write_error)?;
    Ok(row.into())
  }

  async fn update_product(&self, id: ProductId, attributes: ProductAttributes) -> CatalogResult<Option<Product>> {
    // GREATEST keeps updated_at strictly increasing even within one clock tick.
    let row: Option<ProductRow> = sqlx::query_as(
      r#"
      UPDATE products
      SET name = $2, description = $3, price = $4, quantity = $5,
          updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
      WHERE id = $1
      RETURNING id, name, description, price, quantity, created_at, updated_at
      "#,
    )
    .bind(id)
    .bind(attributes.name)
    .bind(attributes.description)
    .bind(attributes.price)
    .bind(attributes.quantity)
    .fetch_optional(&self.pool)
    .await
    .map_err(write_error)?;
    Ok(row.map(Product::from))
  }

  #[instrument(name = "PgStore::delete_product", skip(self))]
  async fn delete_product(&self, id: ProductId) -> CatalogResult<bool> {
    let mut tx = self.pool.begin().await.map_err(storage_error)?;

    sqlx::query("DELETE FROM related_products WHERE product_id = $1")
      .bind(id)
      .execute(&mut *tx)
      .await
      .map_err(storage_error)?;
    let deleted = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&mut *tx)
      .await
      .map_err(storage_error)?
      .rows_affected();

    tx.commit().await.map_err(storage_error)?;
    Ok(deleted > 0)
  }

  async fn associated_product_ids(&self, product_id: ProductId) -> CatalogResult<Vec<ProductId>> {
    sqlx::query_scalar(
      r#"
      SELECT rp.related_product_id
      FROM related_products rp
      INNER JOIN products p ON p.id = rp.related_product_id
      WHERE rp.product_id = $1
      ORDER BY rp.id
      "#,
    )
    .bind(product_id)
    .fetch_all(&self.pool)
    .await
    .map_err(storage_error)
  }

  async fn insert_related_product(
    &self,
    product_id: ProductId,
    related_product_id: ProductId,
  ) -> CatalogResult<RelatedProduct> {
    let row: RelatedProductRow = sqlx::query_as(
      r#"
      INSERT INTO related_products (product_id, related_product_id, created_at, updated_at)
      VALUES ($1, $2, NOW(), NOW())
      RETURNING id, product_id, related_product_id, created_at, updated_at
      "#,
    )
    .bind(product_id)
    .bind(related_product_id)
    .fetch_one(&self.pool)
    .await
    .map_err(write_error)?;
    Ok(row.into())
  }

  async fn find_related_product(
    &self,
    product_id: ProductId,
    related_product_id: ProductId,
  ) -> CatalogResult<Option<RelatedProduct>> {
    let row: Option<RelatedProductRow> = sqlx::query_as(
      r#"
      SELECT id, product_id, related_product_id, created_at, updated_at
      FROM related_products
      WHERE product_id = $1 AND related_product_id = $2
      ORDER BY id
      LIMIT 1
      "#,
    )
    .bind(product_id)
    .bind(related_product_id)
    .fetch_optional(&self.pool)
    .await
    .map_err(storage_error)?;
    Ok(row.map(RelatedProduct::from))
  }

  async fn delete_related_product(&self, id: RelatedProductId) -> CatalogResult<bool> {
    let result = sqlx::query("DELETE FROM related_products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(storage_error)?;
    Ok(result.rows_affected() > 0)
  }
}
