// core/src/validation/violation.rs

use crate::error::{CatalogError, CatalogResult};
use std::fmt;

/// A single failed rule.
///
/// Attribute-scoped violations render as `"<Humanized attribute> <message>"`
/// (e.g. `Price can't be blank`). Base violations render the message as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
  pub attribute: Option<&'static str>,
  pub message: String,
}

impl Violation {
  pub fn new(attribute: &'static str, message: impl Into<String>) -> Self {
    Self {
      attribute: Some(attribute),
      message: message.into(),
    }
  }

  pub fn base(message: impl Into<String>) -> Self {
    Self {
      attribute: None,
      message: message.into(),
    }
  }

  pub fn full_message(&self) -> String {
    match self.attribute {
      Some(attribute) => format!("{} {}", humanize(attribute), self.message),
      None => self.message.clone(),
    }
  }
}

impl fmt::Display for Violation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.full_message())
  }
}

/// `"related_product_id"` -> `"Related product"`, `"name"` -> `"Name"`.
pub fn humanize(attribute: &str) -> String {
  let base = attribute.strip_suffix("_id").unwrap_or(attribute);
  let spaced = base.replace('_', " ");
  let mut chars = spaced.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Ordered collection of violations gathered by a rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn single(violation: Violation) -> Self {
    Self(vec![violation])
  }

  pub fn push(&mut self, violation: Violation) {
    self.0.push(violation);
  }

  pub fn add(&mut self, attribute: &'static str, message: impl Into<String>) {
    self.push(Violation::new(attribute, message));
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
    self.0.iter()
  }

  /// Whether any violation is recorded against `attribute`.
  pub fn includes(&self, attribute: &str) -> bool {
    self.0.iter().any(|v| v.attribute == Some(attribute))
  }

  pub fn full_messages(&self) -> Vec<String> {
    self.0.iter().map(Violation::full_message).collect()
  }

  /// `Ok(())` when empty, otherwise `CatalogError::Invalid(self)`.
  pub fn into_result(self) -> CatalogResult<()> {
    if self.is_empty() {
      Ok(())
    } else {
      Err(CatalogError::Invalid(self))
    }
  }
}

impl fmt::Display for Violations {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.full_messages().join("; "))
  }
}

impl IntoIterator for Violations {
  type Item = Violation;
  type IntoIter = std::vec::IntoIter<Violation>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a> IntoIterator for &'a Violations {
  type Item = &'a Violation;
  type IntoIter = std::slice::Iter<'a, Violation>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
