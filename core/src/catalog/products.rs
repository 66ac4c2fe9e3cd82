// core/src/catalog/products.rs

use super::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Product, ProductDraft, ProductId, ProductParams};
use crate::query::ListQuery;
use crate::store::CatalogStore;
use crate::validation::messages::TAKEN;
use crate::validation::{is_blank, Presence, Rule, RuleControl, RuleSet, Violations};
use anyhow::anyhow;
use async_trait::async_trait;
use tracing::{info, instrument, warn};

/// Product rules, in reporting order.
pub fn product_rules() -> RuleSet<ProductDraft> {
  RuleSet::new()
    .rule(
      "name_presence",
      Presence::of("name", |d: &ProductDraft| !is_blank(d.name.as_deref())),
    )
    .rule("name_uniqueness", NameUniqueness)
    .rule(
      "description_presence",
      Presence::of("description", |d: &ProductDraft| !is_blank(d.description.as_deref())),
    )
    .rule("price_presence", Presence::of("price", |d: &ProductDraft| d.price.is_some()))
    .rule(
      "quantity_presence",
      Presence::of("quantity", |d: &ProductDraft| d.quantity.is_some()),
    )
}

/// No other product may carry the same name. Skipped while the name is blank.
pub struct NameUniqueness;

#[async_trait]
impl Rule<ProductDraft> for NameUniqueness {
  async fn check(
    &self,
    draft: &ProductDraft,
    store: &dyn CatalogStore,
    violations: &mut Violations,
  ) -> CatalogResult<RuleControl> {
    let Some(name) = draft.name.as_deref().filter(|n| !n.trim().is_empty()) else {
      return Ok(RuleControl::Continue);
    };
    if store.product_name_taken(name, draft.id).await? {
      violations.add("name", TAKEN);
    }
    Ok(RuleControl::Continue)
  }
}

impl Catalog {
  #[instrument(name = "Catalog::list_products", skip_all, fields(
    filters = query.filters.len(),
    sort = query.sort.column.as_str(),
    page = query.pagination.page,
    per_page = query.pagination.per_page,
  ))]
  pub async fn list_products(&self, query: &ListQuery) -> CatalogResult<Vec<Product>> {
    let products = self.store.list_products(query).await?;
    info!("Listed {} products.", products.len());
    Ok(products)
  }

  #[instrument(name = "Catalog::get_product", skip(self))]
  pub async fn get_product(&self, id: ProductId) -> CatalogResult<Product> {
    match self.store.find_product(id).await? {
      Some(product) => Ok(product),
      None => {
        warn!("Product {} not found.", id);
        Err(CatalogError::product_not_found(id))
      }
    }
  }

  #[instrument(name = "Catalog::create_product", skip_all)]
  pub async fn create_product(&self, params: ProductParams) -> CatalogResult<Product> {
    let draft = ProductDraft::from_params(params);
    if let Err(err) = self.product_rules.validate(&draft, self.store.as_ref()).await {
      warn!(error = %err, "Product rejected.");
      return Err(err);
    }

    let attributes = draft
      .into_attributes()
      .ok_or_else(|| anyhow!("validated product draft is missing attributes"))?;
    let product = self.store.insert_product(attributes).await?;
    info!(product_id = product.id, "Product created.");
    Ok(product)
  }

  /// Applies the supplied subset of attributes and re-validates the whole record.
  /// Nothing is written when the merged record equals the stored one.
  #[instrument(name = "Catalog::update_product", skip(self, params))]
  pub async fn update_product(&self, id: ProductId, params: ProductParams) -> CatalogResult<Product> {
    let existing = self.get_product(id).await?;
    let draft = ProductDraft::for_update(&existing, params);
    if let Err(err) = self.product_rules.validate(&draft, self.store.as_ref()).await {
      warn!(error = %err, "Product update rejected.");
      return Err(err);
    }

    let attributes = draft
      .into_attributes()
      .ok_or_else(|| anyhow!("validated product draft is missing attributes"))?;
    if attributes == existing.attributes() {
      info!("Product {} unchanged.", id);
      return Ok(existing);
    }

    match self.store.update_product(id, attributes).await? {
      Some(product) => {
        info!("Product {} updated.", id);
        Ok(product)
      }
      None => Err(CatalogError::product_not_found(id)),
    }
  }

  /// Deletes the product together with the links it owns.
  #[instrument(name = "Catalog::destroy_product", skip(self))]
  pub async fn destroy_product(&self, id: ProductId) -> CatalogResult<()> {
    if self.store.delete_product(id).await? {
      info!("Product {} deleted.", id);
      Ok(())
    } else {
      warn!("Product {} not found.", id);
      Err(CatalogError::product_not_found(id))
    }
  }
}
