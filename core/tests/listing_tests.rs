// tests/listing_tests.rs
mod common;
use catalog::{Column, ListQuery, Pagination, SortDirection};
use common::*;

fn query(pairs: &[(&str, &str)]) -> ListQuery {
  ListQuery::from_pairs(pairs.iter().copied())
}

fn ids(products: &[catalog::Product]) -> Vec<i64> {
  products.iter().map(|p| p.id).collect()
}

#[tokio::test]
async fn test_list_empty_catalog() {
  let (catalog, _store) = new_catalog();

  let products = catalog.list_products(&ListQuery::default()).await.unwrap();

  assert!(products.is_empty());
}

#[tokio::test]
async fn test_list_defaults_to_ascending_id() {
  let (catalog, _store) = new_catalog();
  create_products(&catalog, 5).await;

  let products = catalog.list_products(&query(&[])).await.unwrap();

  assert_eq!(ids(&products), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_list_returns_first_twenty_by_default() {
  let (catalog, _store) = new_catalog();
  create_products(&catalog, 30).await;

  let products = catalog.list_products(&query(&[])).await.unwrap();

  assert_eq!(products.len(), 20);
  assert_eq!(products[0].id, 1);
}

#[tokio::test]
async fn test_list_with_page_and_per() {
  let (catalog, _store) = new_catalog();
  create_products(&catalog, 30).await;

  let first = catalog.list_products(&query(&[("page", "1"), ("per", "10")])).await.unwrap();
  let second = catalog.list_products(&query(&[("page", "2"), ("per", "10")])).await.unwrap();
  let beyond = catalog.list_products(&query(&[("page", "9"), ("per", "10")])).await.unwrap();

  assert_eq!(first.len(), 10);
  assert_eq!(ids(&second), (11..=20).collect::<Vec<_>>());
  assert!(beyond.is_empty());
}

#[tokio::test]
async fn test_list_caps_per_at_one_hundred() {
  let (catalog, _store) = new_catalog();
  create_products(&catalog, 110).await;

  let products = catalog.list_products(&query(&[("page", "1"), ("per", "110")])).await.unwrap();

  assert_eq!(products.len(), 100);
}

#[tokio::test]
async fn test_list_sorted_by_allowed_attribute() {
  let (catalog, _store) = new_catalog();
  create_products(&catalog, 3).await;

  let products = catalog
    .list_products(&query(&[("order_attribute", "price"), ("order", "DESC")]))
    .await
    .unwrap();

  assert_eq!(ids(&products), vec![3, 2, 1]);
}

#[tokio::test]
async fn test_list_ignores_unknown_sort_attribute() {
  let (catalog, _store) = new_catalog();
  create_products(&catalog, 3).await;

  let q = query(&[("order_attribute", "price; DROP TABLE products"), ("order", "desc")]);
  let products = catalog.list_products(&q).await.unwrap();

  assert_eq!(q.sort.column, Column::Id);
  assert_eq!(q.sort.direction, SortDirection::Asc);
  assert_eq!(ids(&products), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_list_sort_ties_break_on_id() {
  let (catalog, _store) = new_catalog();
  // Quantities are n % 50, so products 1 and 51 share quantity 1.
  create_products(&catalog, 51).await;

  let products = catalog
    .list_products(&query(&[("order_attribute", "quantity"), ("per", "100")]))
    .await
    .unwrap();

  assert_eq!(products[0].quantity, 0);
  assert_eq!(ids(&products[1..3]), vec![1, 51]);
}

#[tokio::test]
async fn test_list_filters_by_name_substring_case_insensitively() {
  let (catalog, _store) = new_catalog();
  create_products(&catalog, 12).await;

  let products = catalog.list_products(&query(&[("q[name_cont]", "product 1")])).await.unwrap();

  assert_eq!(ids(&products), vec![1, 10, 11, 12]);
}

#[tokio::test]
async fn test_list_combines_filters() {
  let (catalog, _store) = new_catalog();
  create_products(&catalog, 10).await;

  // Prices are 10.00 + n * 0.25.
  let products = catalog
    .list_products(&query(&[("q[price_gteq]", "11.00"), ("q[id_lt]", "7")]))
    .await
    .unwrap();

  assert_eq!(ids(&products), vec![4, 5, 6]);
}

#[tokio::test]
async fn test_list_ignores_unsupported_filters() {
  let (catalog, _store) = new_catalog();
  create_products(&catalog, 3).await;

  let q = query(&[
    ("q[secret_eq]", "x"),
    ("q[name_matches]", "x"),
    ("q[price_cont]", "1"),
    ("q[quantity_eq]", "many"),
    ("q[name_eq]", ""),
  ]);
  let products = catalog.list_products(&q).await.unwrap();

  assert!(q.filters.is_empty());
  assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn test_list_falls_back_to_default_page_size_for_bad_per() {
  let (catalog, _store) = new_catalog();
  create_products(&catalog, 25).await;

  for per in ["abc", "0", "-5", ""] {
    let q = query(&[("per", per)]);
    assert_eq!(q.pagination, Pagination::default(), "per={:?}", per);
    assert_eq!(catalog.list_products(&q).await.unwrap().len(), 20);
  }
}
