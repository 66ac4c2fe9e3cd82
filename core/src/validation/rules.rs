// core/src/validation/rules.rs

//! Reusable rules that only inspect the draft: presence and ad-hoc checks.
//! Rules that need the store live next to the operations that use them.

use super::messages::BLANK;
use super::{Rule, RuleControl, Violation, Violations};
use crate::error::CatalogResult;
use crate::store::CatalogStore;
use async_trait::async_trait;

/// `None`, empty and whitespace-only strings are blank.
pub fn is_blank(value: Option<&str>) -> bool {
  value.map_or(true, |s| s.trim().is_empty())
}

/// Requires an attribute to be present on the draft.
pub struct Presence<TDraft> {
  attribute: &'static str,
  present: fn(&TDraft) -> bool,
  message: &'static str,
  halt_when_missing: bool,
}

impl<TDraft> Presence<TDraft> {
  /// Reports `"<Attribute> can't be blank"` when `present` returns false.
  pub fn of(attribute: &'static str, present: fn(&TDraft) -> bool) -> Self {
    Self {
      attribute,
      present,
      message: BLANK,
      halt_when_missing: false,
    }
  }

  pub fn with_message(mut self, message: &'static str) -> Self {
    self.message = message;
    self
  }

  /// Stops the rule set when the attribute is missing; later rules depend on it.
  pub fn halting(mut self) -> Self {
    self.halt_when_missing = true;
    self
  }
}

#[async_trait]
impl<TDraft> Rule<TDraft> for Presence<TDraft>
where
  TDraft: Send + Sync,
{
  async fn check(&self, draft: &TDraft, _store: &dyn CatalogStore, violations: &mut Violations) -> CatalogResult<RuleControl> {
    if (self.present)(draft) {
      return Ok(RuleControl::Continue);
    }
    violations.add(self.attribute, self.message);
    if self.halt_when_missing {
      Ok(RuleControl::Halt)
    } else {
      Ok(RuleControl::Continue)
    }
  }
}

type CheckFn<TDraft> = Box<dyn Fn(&TDraft) -> Option<Violation> + Send + Sync>;

/// A synchronous predicate over the draft that yields at most one violation.
pub struct Check<TDraft> {
  check: CheckFn<TDraft>,
}

impl<TDraft> Check<TDraft> {
  pub fn new<F>(check: F) -> Self
  where
    F: Fn(&TDraft) -> Option<Violation> + Send + Sync + 'static,
  {
    Self { check: Box::new(check) }
  }
}

#[async_trait]
impl<TDraft> Rule<TDraft> for Check<TDraft>
where
  TDraft: Send + Sync,
{
  async fn check(&self, draft: &TDraft, _store: &dyn CatalogStore, violations: &mut Violations) -> CatalogResult<RuleControl> {
    if let Some(violation) = (self.check)(draft) {
      violations.push(violation);
    }
    Ok(RuleControl::Continue)
  }
}
