// core/src/catalog/related_products.rs

use super::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{LinkDraft, ProductId, RelatedProduct, RelatedProductParams};
use crate::store::CatalogStore;
use crate::validation::messages::{ASSOCIATED_TWICE, MUST_EXIST, SAME_PRODUCT};
use crate::validation::{Check, Presence, Rule, RuleControl, RuleSet, Violation, Violations};
use anyhow::anyhow;
use async_trait::async_trait;
use tracing::{info, instrument, warn};

/// Link rules, in reporting order.
///
/// A missing target id halts the set; a target id that names no product fails
/// with `NotFound` before the self-link and duplicate checks run.
///
/// The self-link and duplicate messages are record-level (`Violation::base`), so
/// clients see `cannot be the same product.` without a `Related product` prefix.
pub fn link_rules() -> RuleSet<LinkDraft> {
  RuleSet::new()
    .rule(
      "related_product_presence",
      Presence::of("related_product_id", |d: &LinkDraft| d.related_product_id.is_some())
        .with_message(MUST_EXIST)
        .halting(),
    )
    .rule("related_product_exists", RelatedProductExists)
    .rule(
      "not_self",
      Check::new(|d: &LinkDraft| {
        (d.related_product_id == Some(d.product_id)).then(|| Violation::base(SAME_PRODUCT))
      }),
    )
    .rule("not_associated_twice", NotAssociatedTwice)
}

pub struct RelatedProductExists;

#[async_trait]
impl Rule<LinkDraft> for RelatedProductExists {
  async fn check(&self, draft: &LinkDraft, store: &dyn CatalogStore, _violations: &mut Violations) -> CatalogResult<RuleControl> {
    let Some(target) = draft.related_product_id else {
      return Ok(RuleControl::Continue);
    };
    match store.find_product(target).await? {
      Some(_) => Ok(RuleControl::Continue),
      None => Err(CatalogError::product_not_found(target)),
    }
  }
}

/// The target must not already be among the owner's associated products.
pub struct NotAssociatedTwice;

#[async_trait]
impl Rule<LinkDraft> for NotAssociatedTwice {
  async fn check(&self, draft: &LinkDraft, store: &dyn CatalogStore, violations: &mut Violations) -> CatalogResult<RuleControl> {
    let Some(target) = draft.related_product_id else {
      return Ok(RuleControl::Continue);
    };
    let associated = store.associated_product_ids(draft.product_id).await?;
    if associated.contains(&target) {
      violations.push(Violation::base(ASSOCIATED_TWICE));
    }
    Ok(RuleControl::Continue)
  }
}

impl Catalog {
  /// Links `product_id` to the product named in `params`.
  #[instrument(name = "Catalog::create_related_product", skip(self, params))]
  pub async fn create_related_product(
    &self,
    product_id: ProductId,
    params: RelatedProductParams,
  ) -> CatalogResult<RelatedProduct> {
    let owner = self.get_product(product_id).await?;
    let draft = LinkDraft::new(owner.id, params);
    if let Err(err) = self.link_rules.validate(&draft, self.store.as_ref()).await {
      warn!(error = %err, "Related product rejected.");
      return Err(err);
    }

    let target = draft
      .related_product_id
      .ok_or_else(|| anyhow!("validated link draft is missing its target"))?;
    let edge = self.store.insert_related_product(owner.id, target).await?;
    info!(related_product_id = target, edge_id = edge.id, "Related product linked.");
    Ok(edge)
  }

  /// Removes the link from `product_id` to `related_product_id`. The lookup is by
  /// target product id, not by the edge's own id. A missing link is not an error.
  #[instrument(name = "Catalog::destroy_related_product", skip(self))]
  pub async fn destroy_related_product(&self, product_id: ProductId, related_product_id: ProductId) -> CatalogResult<()> {
    let owner = self.get_product(product_id).await?;
    match self.store.find_related_product(owner.id, related_product_id).await? {
      Some(edge) => {
        self.store.delete_related_product(edge.id).await?;
        info!(edge_id = edge.id, "Related product unlinked.");
      }
      None => info!("No link to remove."),
    }
    Ok(())
  }
}
