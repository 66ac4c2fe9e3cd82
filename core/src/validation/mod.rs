// core/src/validation/mod.rs

//! Explicit validation for catalog records.
//!
//! A [`RuleSet`] is an ordered list of named [`Rule`]s evaluated against a draft
//! record before anything is written. Each rule appends to a shared [`Violations`]
//! list, so messages always come out in rule order. A rule may also halt the set
//! (later rules are skipped) or fail outright with a [`crate::CatalogError`].

pub mod messages;
pub mod rule;
pub mod rule_set;
pub mod rules;
pub mod violation;

pub use rule::{Rule, RuleControl};
pub use rule_set::RuleSet;
pub use rules::{is_blank, Check, Presence};
pub use violation::{humanize, Violation, Violations};
