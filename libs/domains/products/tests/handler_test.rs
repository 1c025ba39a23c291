//! Handler tests using an in-memory repository double.

use std::sync::Mutex;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde_json::{json, Value};
use tower::ServiceExt;

use domain_products::{
    handlers, CreateProduct, Product, ProductError, ProductFilter, ProductRepository,
    ProductResult, ProductService, UnconfiguredRepository,
};

/// In-memory repository with the same filter semantics as the MongoDB one.
#[derive(Default)]
struct InMemoryRepository {
    products: Mutex<Vec<Product>>,
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<String> {
        let id = ObjectId::new();
        let now = DateTime::now();
        let product = Product {
            id: Some(id),
            title: input.title,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.products
            .lock()
            .map_err(|_| ProductError::Store("poisoned lock".to_string()))?
            .push(product);
        Ok(id.to_hex())
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self
            .products
            .lock()
            .map_err(|_| ProductError::Store("poisoned lock".to_string()))?;

        // Empty strings mean the param was not given
        let search = filter
            .search
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase());
        let category = filter.category.filter(|c| !c.is_empty());
        let matches = products
            .iter()
            .filter(|p| match category {
                Some(ref category) => p.category.as_deref() == Some(category),
                None => true,
            })
            .filter(|p| match search {
                Some(ref needle) => {
                    p.title.to_lowercase().contains(needle)
                        || p.description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(needle))
                }
                None => true,
            })
            .take(filter.limit as usize)
            .cloned()
            .collect();

        Ok(matches)
    }

    async fn distinct_categories(&self) -> ProductResult<Vec<String>> {
        let products = self
            .products
            .lock()
            .map_err(|_| ProductError::Store("poisoned lock".to_string()))?;

        let mut categories: Vec<String> = Vec::new();
        for product in products.iter() {
            if let Some(ref category) = product.category {
                if !categories.contains(category) {
                    categories.push(category.clone());
                }
            }
        }
        Ok(categories)
    }

    async fn count(&self) -> ProductResult<u64> {
        let products = self
            .products
            .lock()
            .map_err(|_| ProductError::Store("poisoned lock".to_string()))?;
        Ok(products.len() as u64)
    }
}

fn app() -> Router {
    handlers::router(ProductService::new(InMemoryRepository::default()))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is json")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn test_list_products_empty() {
    let response = app().oneshot(get("/products")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_create_then_list() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/products",
            json!({"title": "Lemonade", "price": 2.5, "category": "Drinks"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    let id = created["id"].as_str().expect("id is text");
    assert_eq!(id.len(), 24);

    let response = app.oneshot(get("/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], id);
    assert_eq!(listed[0]["title"], "Lemonade");
    assert_eq!(listed[0]["in_stock"], true);
    assert!(listed[0]["created_at"].is_string());
}

#[tokio::test]
async fn test_create_rejects_empty_title() {
    let response = app()
        .oneshot(post_json("/products", json!({"title": "", "price": 2.5})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_rejects_client_supplied_id() {
    // Unknown fields fail JSON deserialization before validation
    let response = app()
        .oneshot(post_json(
            "/products",
            json!({"title": "Soup", "price": 3.0, "id": "abc"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_filters_by_category() {
    let app = app();
    for (title, category) in [("Margherita", "Pizza"), ("Cheeseburger", "Burgers")] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/products",
                json!({"title": title, "price": 9.99, "category": category}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(get("/products?category=Pizza"))
        .await
        .unwrap();
    let listed = body_json(response).await;

    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["title"], "Margherita");
}

#[tokio::test]
async fn test_list_ignores_empty_filter_params() {
    let app = app();
    let response = app
        .clone()
        .oneshot(post_json(
            "/products",
            json!({"title": "Margherita", "price": 9.99, "category": "Pizza"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    for uri in ["/products?category=", "/products?search=", "/products?category=&search="] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let listed = body_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1, "uri: {uri}");
    }
}

#[tokio::test]
async fn test_list_search_is_case_insensitive() {
    let app = app();
    let response = app
        .clone()
        .oneshot(post_json(
            "/products",
            json!({
                "title": "Pad Thai",
                "description": "Stir-fried rice noodles",
                "price": 12.49
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.clone().oneshot(get("/products?search=NOODLES")).await.unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let response = app.oneshot(get("/products?search=pizza")).await.unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_rejects_out_of_range_limit() {
    let response = app().oneshot(get("/products?limit=0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app().oneshot(get("/products?limit=201")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_applies_limit() {
    let app = app();
    for n in 0..5 {
        let response = app
            .clone()
            .oneshot(post_json(
                "/products",
                json!({"title": format!("Item {n}"), "price": 1.0}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get("/products?limit=3")).await.unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_categories_sorted_distinct() {
    let app = app();
    for (title, category) in [
        ("Sushi Platter", "Sushi"),
        ("Margherita", "Pizza"),
        ("Pepperoni", "Pizza"),
    ] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/products",
                json!({"title": title, "price": 9.99, "category": category}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get("/categories")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(["Pizza", "Sushi"]));
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let app = app();

    let response = app.clone().oneshot(post_json("/seed", json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let first = body_json(response).await;
    assert_eq!(first, json!({"inserted": 8, "total": 8}));

    let response = app.clone().oneshot(post_json("/seed", json!({}))).await.unwrap();
    let second = body_json(response).await;
    assert_eq!(second, json!({"inserted": 0, "total": 8}));

    let response = app.oneshot(get("/categories")).await.unwrap();
    let categories = body_json(response).await;
    assert_eq!(
        categories,
        json!(["Asian", "Burgers", "Desserts", "Pizza", "Salads", "Sushi"])
    );
}

#[tokio::test]
async fn test_unconfigured_repository_returns_503() {
    let app = handlers::router(ProductService::new(UnconfiguredRepository));

    for uri in ["/products", "/categories"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    let response = app
        .oneshot(post_json("/products", json!({"title": "Soup", "price": 3.0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Database not configured");
}
