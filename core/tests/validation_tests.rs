// tests/validation_tests.rs
mod common;
use async_trait::async_trait;
use catalog::validation::{humanize, Check, Presence};
use catalog::{
  CatalogError, CatalogResult, CatalogStore, MemoryStore, Rule, RuleControl, RuleSet, Violation, Violations,
};
use common::*;

#[derive(Debug, Default)]
struct Draft {
  title: Option<String>,
  size: Option<u32>,
}

struct AlwaysFails;

#[async_trait]
impl Rule<Draft> for AlwaysFails {
  async fn check(&self, _draft: &Draft, _store: &dyn CatalogStore, _violations: &mut Violations) -> CatalogResult<RuleControl> {
    Err(CatalogError::product_not_found(1))
  }
}

fn draft_rules() -> RuleSet<Draft> {
  RuleSet::new()
    .rule(
      "title_presence",
      Presence::of("title", |d: &Draft| !catalog::validation::is_blank(d.title.as_deref())).halting(),
    )
    .rule("size_presence", Presence::of("size", |d: &Draft| d.size.is_some()))
    .rule(
      "size_limit",
      Check::new(|d: &Draft| {
        d.size
          .filter(|s| *s > 10)
          .map(|_| Violation::new("size", "is too large"))
      }),
    )
}

#[test]
fn test_humanize_attribute_names() {
  assert_eq!(humanize("name"), "Name");
  assert_eq!(humanize("related_product_id"), "Related product");
  assert_eq!(humanize("created_at"), "Created at");
}

#[test]
fn test_full_messages_for_attribute_and_base_violations() {
  let mut violations = Violations::new();
  violations.add("price", "can't be blank");
  violations.push(Violation::base("cannot associate twice."));

  assert_eq!(
    violations.full_messages(),
    vec!["Price can't be blank".to_string(), "cannot associate twice.".to_string()]
  );
  assert_eq!(violations.to_string(), "Price can't be blank; cannot associate twice.");
  assert!(violations.includes("price"));
  assert!(!violations.includes("name"));
}

#[test]
fn test_rule_set_keeps_insertion_order() {
  assert_eq!(draft_rules().rule_names(), vec!["title_presence", "size_presence", "size_limit"]);
}

#[test]
#[should_panic(expected = "rule 'dup' already exists")]
fn test_rule_set_rejects_duplicate_names() {
  let _ = RuleSet::<Draft>::new()
    .rule("dup", Presence::of("title", |d: &Draft| d.title.is_some()))
    .rule("dup", Presence::of("size", |d: &Draft| d.size.is_some()));
}

#[tokio::test]
async fn test_rule_set_collects_violations_in_order() {
  setup_tracing();
  let store = MemoryStore::new();
  let draft = Draft {
    title: Some("ok".to_string()),
    size: Some(11),
  };

  let violations = draft_rules().violations(&draft, &store).await.unwrap();

  assert_eq!(violations.full_messages(), vec!["Size is too large".to_string()]);
}

#[tokio::test]
async fn test_halting_rule_skips_the_rest() {
  setup_tracing();
  let store = MemoryStore::new();

  let violations = draft_rules().violations(&Draft::default(), &store).await.unwrap();

  assert_eq!(violations.full_messages(), vec!["Title can't be blank".to_string()]);
}

#[tokio::test]
async fn test_validate_passes_clean_drafts() {
  setup_tracing();
  let store = MemoryStore::new();
  let draft = Draft {
    title: Some("ok".to_string()),
    size: Some(3),
  };

  assert!(draft_rules().validate(&draft, &store).await.is_ok());
}

#[tokio::test]
async fn test_rule_errors_abort_validation() {
  setup_tracing();
  let store = MemoryStore::new();
  let rules = RuleSet::new()
    .rule("size_presence", Presence::of("size", |d: &Draft| d.size.is_some()))
    .rule("explodes", AlwaysFails);

  let err = rules.validate(&Draft::default(), &store).await.unwrap_err();

  assert!(err.is_not_found());
}

#[test]
fn test_catalog_rule_sets_are_wired_in_reporting_order() {
  let (catalog, _store) = new_catalog();

  assert_eq!(
    catalog.product_rules().rule_names(),
    vec![
      "name_presence",
      "name_uniqueness",
      "description_presence",
      "price_presence",
      "quantity_presence"
    ]
  );
  assert_eq!(
    catalog.link_rules().rule_names(),
    vec![
      "related_product_presence",
      "related_product_exists",
      "not_self",
      "not_associated_twice"
    ]
  );
}
