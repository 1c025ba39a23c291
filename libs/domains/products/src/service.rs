//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{sample_products, CreateProduct, Product, ProductFilter, SeedResponse};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer handles validation, business rules, and orchestrates
/// repository operations.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products with optional filters
    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        filter
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.list(filter).await
    }

    /// Create a new product, returning the assigned id
    #[instrument(skip(self, input), fields(product_title = %input.title))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<String> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Distinct category values, with empty strings dropped and the rest
    /// sorted ascending
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ProductResult<Vec<String>> {
        let mut categories: Vec<String> = self
            .repository
            .distinct_categories()
            .await?
            .into_iter()
            .filter(|category| !category.is_empty())
            .collect();

        categories.sort();
        Ok(categories)
    }

    /// Seed the catalog with sample products.
    ///
    /// Idempotent: inserts only when the collection is empty, so repeated
    /// calls never duplicate the samples.
    #[instrument(skip(self))]
    pub async fn seed_products(&self) -> ProductResult<SeedResponse> {
        let existing = self.repository.count().await?;

        let mut inserted = 0;
        if existing == 0 {
            for sample in sample_products() {
                self.repository.create(sample).await?;
                inserted += 1;
            }
            tracing::info!(inserted, "Seeded sample products");
        }

        let total = self.repository.count().await?;
        Ok(SeedResponse { inserted, total })
    }
}
