// core/src/query/column.rs

//! The allow-list of product columns that may be filtered and sorted on, and
//! the typed values compared against them.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
  Id,
  Name,
  Description,
  Price,
  Quantity,
  CreatedAt,
  UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
  Integer,
  Decimal,
  Text,
  Timestamp,
}

impl Column {
  pub const ALL: [Column; 7] = [
    Column::Id,
    Column::Name,
    Column::Description,
    Column::Price,
    Column::Quantity,
    Column::CreatedAt,
    Column::UpdatedAt,
  ];

  /// The column name as it appears in the `products` table and in query parameters.
  pub fn as_str(self) -> &'static str {
    match self {
      Column::Id => "id",
      Column::Name => "name",
      Column::Description => "description",
      Column::Price => "price",
      Column::Quantity => "quantity",
      Column::CreatedAt => "created_at",
      Column::UpdatedAt => "updated_at",
    }
  }

  /// Exact, case-sensitive lookup. Anything not in the allow-list is `None`.
  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|c| c.as_str() == name)
  }

  pub fn kind(self) -> ValueKind {
    match self {
      Column::Id | Column::Quantity => ValueKind::Integer,
      Column::Price => ValueKind::Decimal,
      Column::Name | Column::Description => ValueKind::Text,
      Column::CreatedAt | Column::UpdatedAt => ValueKind::Timestamp,
    }
  }

  pub fn is_textual(self) -> bool {
    self.kind() == ValueKind::Text
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  Integer(i64),
  Decimal(Decimal),
  Text(String),
  Timestamp(DateTime<Utc>),
}

impl Value {
  /// Parses a raw query-string value as `kind`. Blank or malformed input is `None`.
  ///
  /// Timestamps accept RFC 3339 or a bare `YYYY-MM-DD` (midnight UTC).
  pub fn parse(kind: ValueKind, raw: &str) -> Option<Self> {
    let raw = raw.trim();
    if raw.is_empty() {
      return None;
    }
    match kind {
      ValueKind::Integer => raw.parse::<i64>().ok().map(Value::Integer),
      ValueKind::Decimal => Decimal::from_str(raw).ok().map(Value::Decimal),
      ValueKind::Text => Some(Value::Text(raw.to_string())),
      ValueKind::Timestamp => DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .ok()
        .or_else(|| {
          NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
        })
        .map(Value::Timestamp),
    }
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      Value::Text(s) => Some(s),
      _ => None,
    }
  }
}

// Values of different kinds are unordered.
impl PartialOrd for Value {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    match (self, other) {
      (Value::Integer(a), Value::Integer(b)) => a.partial_cmp(b),
      (Value::Decimal(a), Value::Decimal(b)) => a.partial_cmp(b),
      (Value::Text(a), Value::Text(b)) => a.partial_cmp(b),
      (Value::Timestamp(a), Value::Timestamp(b)) => a.partial_cmp(b),
      _ => None,
    }
  }
}
