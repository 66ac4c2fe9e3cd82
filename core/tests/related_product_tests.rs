// tests/related_product_tests.rs
mod common;
use catalog::{CatalogStore, RelatedProductParams};
use common::*;

fn link_to(id: i64) -> RelatedProductParams {
  RelatedProductParams {
    related_product_id: Some(id),
  }
}

#[tokio::test]
async fn test_create_related_product() {
  let (catalog, store) = new_catalog();
  let products = create_products(&catalog, 2).await;

  let edge = catalog
    .create_related_product(products[0].id, link_to(products[1].id))
    .await
    .unwrap();

  assert_eq!(edge.product_id, products[0].id);
  assert_eq!(edge.related_product_id, products[1].id);
  assert_eq!(store.associated_product_ids(products[0].id).await.unwrap(), vec![products[1].id]);
}

#[tokio::test]
async fn test_link_to_self_is_rejected() {
  let (catalog, store) = new_catalog();
  let products = create_products(&catalog, 1).await;

  let result = catalog.create_related_product(products[0].id, link_to(products[0].id)).await;

  assert_eq!(messages(result), vec!["cannot be the same product.".to_string()]);
  assert!(store.associated_product_ids(products[0].id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_linking_twice_is_rejected() {
  let (catalog, _store) = new_catalog();
  let products = create_products(&catalog, 2).await;
  catalog
    .create_related_product(products[0].id, link_to(products[1].id))
    .await
    .unwrap();

  let result = catalog.create_related_product(products[0].id, link_to(products[1].id)).await;

  assert_eq!(messages(result), vec!["cannot associate twice.".to_string()]);
}

#[tokio::test]
async fn test_links_are_directional() {
  let (catalog, _store) = new_catalog();
  let products = create_products(&catalog, 2).await;
  catalog
    .create_related_product(products[0].id, link_to(products[1].id))
    .await
    .unwrap();

  let reverse = catalog.create_related_product(products[1].id, link_to(products[0].id)).await;

  assert!(reverse.is_ok());
}

#[tokio::test]
async fn test_link_without_target_is_rejected() {
  let (catalog, _store) = new_catalog();
  let products = create_products(&catalog, 1).await;

  let result = catalog
    .create_related_product(products[0].id, RelatedProductParams::default())
    .await;

  assert_eq!(messages(result), vec!["Related product must exist".to_string()]);
}

#[tokio::test]
async fn test_link_to_missing_product_reports_not_found() {
  let (catalog, _store) = new_catalog();
  let products = create_products(&catalog, 1).await;

  let err = catalog
    .create_related_product(products[0].id, link_to(404))
    .await
    .unwrap_err();

  assert_eq!(err.to_string(), "Couldn't find Product with 'id'=404");
}

#[tokio::test]
async fn test_link_under_missing_owner_reports_not_found() {
  let (catalog, _store) = new_catalog();
  let products = create_products(&catalog, 1).await;

  let err = catalog
    .create_related_product(50, link_to(products[0].id))
    .await
    .unwrap_err();

  assert_eq!(err.to_string(), "Couldn't find Product with 'id'=50");
}

#[tokio::test]
async fn test_destroy_related_product_by_target_id() {
  let (catalog, store) = new_catalog();
  let products = create_products(&catalog, 3).await;
  catalog
    .create_related_product(products[0].id, link_to(products[1].id))
    .await
    .unwrap();
  catalog
    .create_related_product(products[0].id, link_to(products[2].id))
    .await
    .unwrap();

  catalog
    .destroy_related_product(products[0].id, products[1].id)
    .await
    .unwrap();

  assert_eq!(store.associated_product_ids(products[0].id).await.unwrap(), vec![products[2].id]);
  // The same link can be created again once removed.
  assert!(catalog
    .create_related_product(products[0].id, link_to(products[1].id))
    .await
    .is_ok());
}

#[tokio::test]
async fn test_destroy_missing_related_product_is_a_no_op() {
  let (catalog, _store) = new_catalog();
  let products = create_products(&catalog, 1).await;

  let result = catalog.destroy_related_product(products[0].id, 12345).await;

  assert!(result.is_ok());
}

#[tokio::test]
async fn test_destroy_related_product_under_missing_owner_reports_not_found() {
  let (catalog, _store) = new_catalog();

  let err = catalog.destroy_related_product(3, 1).await.unwrap_err();

  assert!(err.is_not_found());
}

#[tokio::test]
async fn test_store_rejects_duplicate_link_even_without_rules() {
  let (catalog, store) = new_catalog();
  let products = create_products(&catalog, 2).await;
  store.insert_related_product(products[0].id, products[1].id).await.unwrap();

  let err = store
    .insert_related_product(products[0].id, products[1].id)
    .await
    .unwrap_err();

  assert_eq!(
    err.violations().map(|v| v.full_messages()),
    Some(vec!["cannot associate twice.".to_string()])
  );
}
