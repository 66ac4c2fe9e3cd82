// tests/serialization_tests.rs
mod common;

use catalog::{ProductParams, RelatedProductParams};
use common::{create_products, new_catalog};
use rust_decimal::Decimal;
use serde_json::{json, Value};

#[tokio::test]
async fn product_serializes_with_every_column_and_a_string_price() {
  let (catalog, _store) = new_catalog();
  let product = create_products(&catalog, 1).await.remove(0);

  let value = serde_json::to_value(&product).unwrap();
  let object = value.as_object().unwrap();
  let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
  keys.sort_unstable();
  assert_eq!(
    keys,
    vec!["created_at", "description", "id", "name", "price", "quantity", "updated_at"]
  );

  assert_eq!(value["id"], json!(product.id));
  assert_eq!(value["name"], "Product 1");
  assert_eq!(value["price"], "10.25");
  assert_eq!(value["quantity"], 1);
  assert!(value["created_at"].as_str().is_some_and(|s| s.contains('T')));
}

#[test]
fn product_params_tell_absent_from_null() {
  let params: ProductParams = serde_json::from_value(json!({ "price": null, "quantity": 4 })).unwrap();
  assert_eq!(params.price, Some(None));
  assert_eq!(params.quantity, Some(Some(4)));
  assert_eq!(params.name, None);

  let params: ProductParams = serde_json::from_value(json!({ "price": "12.50" })).unwrap();
  assert_eq!(params.price, Some(Some(Decimal::new(1250, 2))));
}

fn target_of(body: Value) -> Option<i64> {
  serde_json::from_value::<RelatedProductParams>(body)
    .expect("any JSON id shape should deserialize")
    .related_product_id
}

#[test]
fn related_product_id_accepts_integers_and_numeric_strings() {
  assert_eq!(target_of(json!({ "related_product_id": 7 })), Some(7));
  assert_eq!(target_of(json!({ "related_product_id": " 8 " })), Some(8));
}

#[test]
fn related_product_id_of_any_other_shape_counts_as_missing() {
  assert_eq!(target_of(json!({})), None);
  assert_eq!(target_of(json!({ "related_product_id": null })), None);
  assert_eq!(target_of(json!({ "related_product_id": "abc" })), None);
  assert_eq!(target_of(json!({ "related_product_id": true })), None);
  assert_eq!(target_of(json!({ "related_product_id": 2.0 })), None);
  assert_eq!(target_of(json!({ "related_product_id": [1] })), None);
  assert_eq!(target_of(json!({ "related_product_id": { "id": 1 } })), None);
}
