// core/src/validation/rule.rs

//! Defines the `Rule` trait and the control signal rules hand back to their rule set.

use super::Violations;
use crate::error::CatalogResult;
use crate::store::CatalogStore;
use async_trait::async_trait;

/// Signal from a rule indicating whether the remaining rules should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleControl {
  /// Keep evaluating the following rules.
  Continue,
  /// Skip every following rule. Violations gathered so far are still reported.
  Halt,
}

/// One validation step over a draft record of type `TDraft`.
///
/// Rules that only look at the draft ignore `store`; rules such as uniqueness
/// or duplicate-link detection query it. Returning `Err` aborts validation
/// entirely (e.g. a referenced record does not exist).
#[async_trait]
pub trait Rule<TDraft>: Send + Sync
where
  TDraft: Send + Sync,
{
  async fn check(
    &self,
    draft: &TDraft,
    store: &dyn CatalogStore,
    violations: &mut Violations,
  ) -> CatalogResult<RuleControl>;
}
