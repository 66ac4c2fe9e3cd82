// core/src/query/sort.rs

use super::column::Column;
use crate::models::Product;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
  #[default]
  Asc,
  Desc,
}

impl SortDirection {
  /// `asc`/`desc` in any case; everything else (including absence) is ascending.
  pub fn parse(raw: Option<&str>) -> Self {
    match raw.map(str::trim) {
      Some(dir) if dir.eq_ignore_ascii_case("desc") => SortDirection::Desc,
      _ => SortDirection::Asc,
    }
  }

  pub fn as_sql(self) -> &'static str {
    match self {
      SortDirection::Asc => "ASC",
      SortDirection::Desc => "DESC",
    }
  }
}

/// Listing order. Rows that tie on `column` are ordered by ascending id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
  pub column: Column,
  pub direction: SortDirection,
}

impl Default for Sort {
  fn default() -> Self {
    Self {
      column: Column::Id,
      direction: SortDirection::Asc,
    }
  }
}

impl Sort {
  /// Builds the order from `order_attribute` / `order`. An attribute outside
  /// the column allow-list falls back to `id ASC` and drops the direction.
  pub fn from_params(attribute: Option<&str>, direction: Option<&str>) -> Self {
    match attribute.and_then(Column::from_name) {
      Some(column) => Self {
        column,
        direction: SortDirection::parse(direction),
      },
      None => Self::default(),
    }
  }

  /// Whether an `id ASC` tie-breaker must follow the primary order.
  pub fn needs_tie_breaker(&self) -> bool {
    self.column != Column::Id
  }

  pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
    let primary = a
      .value_of(self.column)
      .partial_cmp(&b.value_of(self.column))
      .unwrap_or(Ordering::Equal);
    let primary = match self.direction {
      SortDirection::Asc => primary,
      SortDirection::Desc => primary.reverse(),
    };
    primary.then_with(|| a.id.cmp(&b.id))
  }
}
