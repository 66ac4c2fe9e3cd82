// core/src/validation/rule_set.rs

//! Contains `RuleSet<TDraft>`, an ordered list of named rules, and its execution.

use super::{Rule, RuleControl, Violations};
use crate::error::CatalogResult;
use crate::store::CatalogStore;
use tracing::{event, instrument, span, Instrument, Level};

struct NamedRule<TDraft: Send + Sync> {
  name: String,
  rule: Box<dyn Rule<TDraft>>,
}

/// Ordered, named validation rules for one draft type.
///
/// Rules run in the order they were added and all append to one violation
/// list. A rule returning `RuleControl::Halt` stops the set early.
pub struct RuleSet<TDraft>
where
  TDraft: 'static + Send + Sync,
{
  rules: Vec<NamedRule<TDraft>>,
}

impl<TDraft> Default for RuleSet<TDraft>
where
  TDraft: 'static + Send + Sync,
{
  fn default() -> Self {
    Self { rules: Vec::new() }
  }
}

impl<TDraft> RuleSet<TDraft>
where
  TDraft: 'static + Send + Sync,
{
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends a rule. Panics if a rule with the same name is already present,
  /// since that can only be a wiring mistake.
  pub fn rule<R>(mut self, name: impl Into<String>, rule: R) -> Self
  where
    R: Rule<TDraft> + 'static,
  {
    let name = name.into();
    if self.rules.iter().any(|r| r.name == name) {
      panic!("Catalog setup error: rule '{}' already exists in rule set.", name);
    }
    self.rules.push(NamedRule {
      name,
      rule: Box::new(rule),
    });
    self
  }

  pub fn rule_names(&self) -> Vec<&str> {
    self.rules.iter().map(|r| r.name.as_str()).collect()
  }

  pub fn len(&self) -> usize {
    self.rules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rules.is_empty()
  }

  /// Runs every rule (until one halts) and returns what they found.
  #[instrument(
        name = "RuleSet::violations",
        skip_all,
        fields(draft_type = %std::any::type_name::<TDraft>(), num_rules = self.rules.len()),
        err(Display)
    )]
  pub async fn violations(&self, draft: &TDraft, store: &dyn CatalogStore) -> CatalogResult<Violations> {
    let mut violations = Violations::new();

    for (rule_idx, named) in self.rules.iter().enumerate() {
      let rule_span = span!(Level::DEBUG, "validation_rule", rule_name = named.name.as_str(), rule_index = rule_idx);
      let before = violations.len();

      // Span guards must not live across an await; attach the span to the future instead.
      let control = named
        .rule
        .check(draft, store, &mut violations)
        .instrument(rule_span)
        .await?;

      if violations.len() > before {
        event!(
          Level::DEBUG,
          rule_name = named.name.as_str(),
          added = violations.len() - before,
          "Rule reported violations."
        );
      }
      if control == RuleControl::Halt {
        event!(Level::DEBUG, rule_name = named.name.as_str(), "Rule halted the rule set.");
        break;
      }
    }

    Ok(violations)
  }

  /// Like [`RuleSet::violations`] but fails with `CatalogError::Invalid` when anything was found.
  pub async fn validate(&self, draft: &TDraft, store: &dyn CatalogStore) -> CatalogResult<()> {
    self.violations(draft, store).await?.into_result()
  }
}

impl<TDraft> std::fmt::Debug for RuleSet<TDraft>
where
  TDraft: 'static + Send + Sync,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RuleSet").field("rules", &self.rule_names()).finish()
  }
}
