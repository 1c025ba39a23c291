//! Product entities and DTOs

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Stored product record, serde-mapped to the MongoDB document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Assigned by the store on insert; never client-supplied.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default = "default_in_stock")]
    pub in_stock: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub created_at: Option<DateTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub updated_at: Option<DateTime>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Build a fresh record from a create request, stamping timestamps.
    pub fn new(input: CreateProduct) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            title: input.title,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// Request DTO for creating a product.
///
/// Unknown fields (including `id`) are rejected so clients cannot pick
/// their own document ids.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: f64,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

/// Query parameters for listing products.
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct ProductFilter {
    /// Exact category match
    pub category: Option<String>,

    /// Case-insensitive substring match against title or description
    pub search: Option<String>,

    /// Maximum number of products to return (1-200)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 200, message = "limit must be between 1 and 200"))]
    pub limit: i64,
}

pub(crate) fn default_limit() -> i64 {
    100
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            limit: default_limit(),
        }
    }
}

/// Wire shape for a product, with the store id flattened to text.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub in_stock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: product.title,
            description: product.description,
            price: product.price,
            category: product.category,
            in_stock: product.in_stock,
            created_at: product.created_at.map(format_datetime),
            updated_at: product.updated_at.map(format_datetime),
        }
    }
}

fn format_datetime(dt: DateTime) -> String {
    dt.try_to_rfc3339_string().unwrap_or_else(|_| dt.to_string())
}

/// Response body for a successful create.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: String,
}

/// Response body for the seed operation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeedResponse {
    pub inserted: u64,
    pub total: u64,
}

/// The fixed catalog used to seed an empty collection.
pub fn sample_products() -> Vec<CreateProduct> {
    let samples = [
        (
            "Margherita Pizza",
            "Classic pizza with tomato, mozzarella, and basil",
            9.99,
            "Pizza",
        ),
        (
            "Pepperoni Pizza",
            "Pepperoni, mozzarella, tomato sauce",
            11.49,
            "Pizza",
        ),
        (
            "Veggie Burger",
            "Plant-based patty with fresh veggies",
            8.99,
            "Burgers",
        ),
        (
            "Cheeseburger",
            "Beef patty, cheese, lettuce, tomato",
            10.49,
            "Burgers",
        ),
        (
            "Chicken Caesar Salad",
            "Grilled chicken with romaine and Caesar dressing",
            7.99,
            "Salads",
        ),
        ("Sushi Platter", "Assorted rolls and nigiri", 14.99, "Sushi"),
        (
            "Pad Thai",
            "Stir-fried rice noodles with tamarind sauce",
            12.49,
            "Asian",
        ),
        (
            "Chocolate Cake",
            "Rich and moist chocolate cake slice",
            4.99,
            "Desserts",
        ),
    ];

    samples
        .into_iter()
        .map(|(title, description, price, category)| CreateProduct {
            title: title.to_string(),
            description: Some(description.to_string()),
            price,
            category: Some(category.to_string()),
            in_stock: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_product_validation() {
        let valid = CreateProduct {
            title: "Lemonade".to_string(),
            description: None,
            price: 2.50,
            category: Some("Drinks".to_string()),
            in_stock: true,
        };
        assert!(valid.validate().is_ok());

        let empty_title = CreateProduct {
            title: String::new(),
            ..valid.clone()
        };
        assert!(empty_title.validate().is_err());

        let negative_price = CreateProduct {
            price: -1.0,
            ..valid
        };
        assert!(negative_price.validate().is_err());
    }

    #[test]
    fn test_create_product_rejects_unknown_fields() {
        let result: Result<CreateProduct, _> =
            serde_json::from_str(r#"{"title": "Soup", "price": 3.0, "id": "abc"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_product_defaults() {
        let input: CreateProduct = serde_json::from_str(r#"{"title": "Soup", "price": 3.0}"#)
            .expect("minimal body should deserialize");
        assert!(input.in_stock);
        assert!(input.description.is_none());
        assert!(input.category.is_none());
    }

    #[test]
    fn test_filter_limit_bounds() {
        let filter = ProductFilter {
            limit: default_limit(),
            ..Default::default()
        };
        assert!(filter.validate().is_ok());

        let too_small = ProductFilter {
            limit: 0,
            ..Default::default()
        };
        assert!(too_small.validate().is_err());

        let too_large = ProductFilter {
            limit: 201,
            ..Default::default()
        };
        assert!(too_large.validate().is_err());
    }

    #[test]
    fn test_product_response_id_normalization() {
        let oid = ObjectId::new();
        let product = Product::new(CreateProduct {
            title: "Tea".to_string(),
            description: None,
            price: 1.99,
            category: None,
            in_stock: true,
        });

        let with_id = Product {
            id: Some(oid),
            ..product.clone()
        };
        let response = ProductResponse::from(with_id);
        assert_eq!(response.id, oid.to_hex());
        assert!(response.created_at.is_some());

        let response = ProductResponse::from(product);
        assert_eq!(response.id, "");
    }

    #[test]
    fn test_sample_products_catalog() {
        let samples = sample_products();
        assert_eq!(samples.len(), 8);
        assert!(samples.iter().all(|p| p.in_stock));
        assert!(samples.iter().all(|p| p.validate().is_ok()));
        assert_eq!(samples[0].title, "Margherita Pizza");
    }
}
