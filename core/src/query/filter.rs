// core/src/query/filter.rs

//! Search conditions of the form `q[<column>_<predicate>]=<value>`.

use super::column::{Column, Value};
use crate::models::Product;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
  Eq,
  NotEq,
  Lt,
  Lteq,
  Gt,
  Gteq,
  Cont,
  NotCont,
  Start,
  End,
}

impl Predicate {
  pub const ALL: [Predicate; 10] = [
    Predicate::NotEq,
    Predicate::Eq,
    Predicate::Lteq,
    Predicate::Lt,
    Predicate::Gteq,
    Predicate::Gt,
    Predicate::NotCont,
    Predicate::Cont,
    Predicate::Start,
    Predicate::End,
  ];

  pub fn suffix(self) -> &'static str {
    match self {
      Predicate::Eq => "eq",
      Predicate::NotEq => "not_eq",
      Predicate::Lt => "lt",
      Predicate::Lteq => "lteq",
      Predicate::Gt => "gt",
      Predicate::Gteq => "gteq",
      Predicate::Cont => "cont",
      Predicate::NotCont => "not_cont",
      Predicate::Start => "start",
      Predicate::End => "end",
    }
  }

  /// Pattern predicates; only valid on text columns.
  pub fn is_pattern(self) -> bool {
    matches!(self, Predicate::Cont | Predicate::NotCont | Predicate::Start | Predicate::End)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
  pub column: Column,
  pub predicate: Predicate,
  pub value: Value,
}

impl Condition {
  /// Parses a search key such as `name_cont` and its raw value.
  ///
  /// Returns `None` for unknown columns, unknown predicates, pattern predicates
  /// on non-text columns, and values that are blank or do not parse as the
  /// column's type.
  pub fn parse(key: &str, raw: &str) -> Option<Self> {
    Predicate::ALL.into_iter().find_map(|predicate| {
      let column_name = key.strip_suffix(predicate.suffix())?.strip_suffix('_')?;
      let column = Column::from_name(column_name)?;
      if predicate.is_pattern() && !column.is_textual() {
        return None;
      }
      let value = Value::parse(column.kind(), raw)?;
      Some(Condition {
        column,
        predicate,
        value,
      })
    })
  }

  pub fn matches(&self, product: &Product) -> bool {
    let actual = product.value_of(self.column);
    match self.predicate {
      Predicate::Eq => actual == self.value,
      Predicate::NotEq => actual != self.value,
      Predicate::Lt => actual.partial_cmp(&self.value) == Some(Ordering::Less),
      Predicate::Lteq => matches!(actual.partial_cmp(&self.value), Some(Ordering::Less | Ordering::Equal)),
      Predicate::Gt => actual.partial_cmp(&self.value) == Some(Ordering::Greater),
      Predicate::Gteq => matches!(
        actual.partial_cmp(&self.value),
        Some(Ordering::Greater | Ordering::Equal)
      ),
      Predicate::Cont | Predicate::NotCont | Predicate::Start | Predicate::End => {
        let (Some(haystack), Some(needle)) = (actual.as_text(), self.value.as_text()) else {
          return false;
        };
        let haystack = haystack.to_lowercase();
        let needle = needle.to_lowercase();
        match self.predicate {
          Predicate::Cont => haystack.contains(&needle),
          Predicate::NotCont => !haystack.contains(&needle),
          Predicate::Start => haystack.starts_with(&needle),
          _ => haystack.ends_with(&needle),
        }
      }
    }
  }

  /// The `ILIKE` pattern for pattern predicates, with `\`, `%` and `_` escaped.
  pub fn like_pattern(&self) -> Option<String> {
    if !self.predicate.is_pattern() {
      return None;
    }
    let escaped = escape_like(self.value.as_text()?);
    Some(match self.predicate {
      Predicate::Start => format!("{}%", escaped),
      Predicate::End => format!("%{}", escaped),
      _ => format!("%{}%", escaped),
    })
  }
}

fn escape_like(raw: &str) -> String {
  let mut escaped = String::with_capacity(raw.len());
  for ch in raw.chars() {
    if matches!(ch, '\\' | '%' | '_') {
      escaped.push('\\');
    }
    escaped.push(ch);
  }
  escaped
}
