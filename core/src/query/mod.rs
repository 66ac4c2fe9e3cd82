// core/src/query/mod.rs

//! The product listing contract: search conditions, ordering and pagination,
//! parsed from raw query-string pairs.
//!
//! Every column name that reaches a backend comes from [`Column`], never from
//! the client, so backends can splice `Column::as_str()` into SQL safely.

pub mod column;
pub mod filter;
pub mod page;
pub mod sort;

pub use column::{Column, Value, ValueKind};
pub use filter::{Condition, Predicate};
pub use page::{Pagination, DEFAULT_PER_PAGE, MAX_PER_PAGE};
pub use sort::{Sort, SortDirection};

use crate::models::Product;

/// A fully parsed listing request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
  /// AND-ed search conditions.
  pub filters: Vec<Condition>,
  pub sort: Sort,
  pub pagination: Pagination,
}

impl ListQuery {
  /// Builds a query from decoded query-string pairs.
  ///
  /// Recognised keys: `q[<column>_<predicate>]`, `order_attribute`, `order`,
  /// `page` and `per`. Unrecognised keys and unsupported search conditions are
  /// dropped. For repeated scalar keys the last one wins.
  pub fn from_pairs<I, K, V>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let mut filters = Vec::new();
    let mut order_attribute = None;
    let mut order = None;
    let mut page = None;
    let mut per = None;

    for (key, value) in pairs {
      let (key, value) = (key.as_ref(), value.as_ref());
      match key {
        "order_attribute" => order_attribute = Some(value.to_string()),
        "order" => order = Some(value.to_string()),
        "page" => page = Some(value.to_string()),
        "per" => per = Some(value.to_string()),
        _ => {
          let search_key = key.strip_prefix("q[").and_then(|k| k.strip_suffix(']'));
          match search_key.and_then(|k| Condition::parse(k, value)) {
            Some(condition) => filters.push(condition),
            None => tracing::debug!(key, "Ignoring unsupported listing parameter."),
          }
        }
      }
    }

    Self {
      filters,
      sort: Sort::from_params(order_attribute.as_deref(), order.as_deref()),
      pagination: Pagination::from_params(page.as_deref(), per.as_deref()),
    }
  }

  pub fn matches(&self, product: &Product) -> bool {
    self.filters.iter().all(|condition| condition.matches(product))
  }
}
