// src/lib.rs

//! Catalog: the domain core of the product catalog API.
//!
//! The crate owns everything that is not HTTP:
//!  - Product and related-product models, plus the draft types validated before a write.
//!  - Ordered, named validation rule sets (presence, uniqueness, self-link, duplicate-link).
//!  - The listing contract: allow-listed filters, allow-listed sorting, clamped pagination.
//!  - The `CatalogStore` storage trait and an in-memory implementation.
//!  - The `Catalog` service that runs rules and talks to a store.

pub mod catalog;
pub mod error;
pub mod models;
pub mod query;
pub mod store;
pub mod validation;

// --- Re-exports for the Public API ---

pub use crate::catalog::Catalog;
pub use crate::error::{CatalogError, CatalogResult};

pub use crate::models::{
  LinkDraft, Product, ProductAttributes, ProductDraft, ProductId, ProductParams, RelatedProduct, RelatedProductId,
  RelatedProductParams,
};

pub use crate::query::{Column, Condition, ListQuery, Pagination, Predicate, Sort, SortDirection, Value};

pub use crate::store::{CatalogStore, MemoryStore};

pub use crate::validation::{Rule, RuleControl, RuleSet, Violation, Violations};

/*
    Request lifecycle:
    1. The HTTP layer parses path/query/body into `ListQuery`, `ProductParams` or `RelatedProductParams`.
    2. `Catalog` loads what it needs from its `CatalogStore` (404 -> `CatalogError::NotFound`).
    3. A draft record is built and run through the matching `RuleSet`; violations come back
       in rule order as `CatalogError::Invalid`.
    4. Only a clean draft reaches the store, which performs the write atomically.
*/
