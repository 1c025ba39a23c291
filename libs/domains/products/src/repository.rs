use async_trait::async_trait;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter};

/// Repository trait for product persistence
///
/// Implementations can use different storage backends; the service layer
/// only depends on this interface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product and return the assigned id as hex text
    async fn create(&self, input: CreateProduct) -> ProductResult<String>;

    /// List products matching the filter, capped at `filter.limit`
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Distinct category values across all products
    async fn distinct_categories(&self) -> ProductResult<Vec<String>>;

    /// Total number of stored products
    async fn count(&self) -> ProductResult<u64>;
}

/// Stand-in repository used when no database connection exists.
///
/// Every operation fails fast with `ProductError::Configuration`, which
/// surfaces as a 503 without touching the network.
pub struct UnconfiguredRepository;

#[async_trait]
impl ProductRepository for UnconfiguredRepository {
    async fn create(&self, _input: CreateProduct) -> ProductResult<String> {
        Err(ProductError::Configuration)
    }

    async fn list(&self, _filter: ProductFilter) -> ProductResult<Vec<Product>> {
        Err(ProductError::Configuration)
    }

    async fn distinct_categories(&self) -> ProductResult<Vec<String>> {
        Err(ProductError::Configuration)
    }

    async fn count(&self) -> ProductResult<u64> {
        Err(ProductError::Configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_repository_fails_every_operation() {
        let repo = UnconfiguredRepository;

        assert!(matches!(
            repo.list(ProductFilter::default()).await,
            Err(ProductError::Configuration)
        ));
        assert!(matches!(
            repo.distinct_categories().await,
            Err(ProductError::Configuration)
        ));
        assert!(matches!(repo.count().await, Err(ProductError::Configuration)));
    }
}
