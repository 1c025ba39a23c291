//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{bson::doc, Collection, Database};
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter};
use crate::repository::ProductRepository;

/// Name of the backing collection.
pub const COLLECTION_NAME: &str = "product";

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>(COLLECTION_NAME);
        Self { collection }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    /// Build a MongoDB filter document from ProductFilter
    ///
    /// Empty strings mean the param was not given, so they add no clause.
    fn build_filter(filter: &ProductFilter) -> mongodb::bson::Document {
        let mut doc = doc! {};

        if let Some(ref category) = filter.category {
            if !category.is_empty() {
                doc.insert("category", category);
            }
        }

        if let Some(ref search) = filter.search {
            if !search.is_empty() {
                doc.insert(
                    "$or",
                    vec![
                        doc! { "title": { "$regex": search, "$options": "i" } },
                        doc! { "description": { "$regex": search, "$options": "i" } },
                    ],
                );
            }
        }

        doc
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_title = %input.title))]
    async fn create(&self, input: CreateProduct) -> ProductResult<String> {
        let product = Product::new(input);

        let result = self.collection.insert_one(&product).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ProductError::Store("insert did not return an object id".to_string()))?;

        tracing::info!(product_id = %id, "Product created successfully");
        Ok(id.to_hex())
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let mongo_filter = Self::build_filter(&filter);

        let options = mongodb::options::FindOptions::builder()
            .limit(filter.limit)
            .build();

        let cursor = self
            .collection
            .find(mongo_filter)
            .with_options(options)
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn distinct_categories(&self) -> ProductResult<Vec<String>> {
        let values = self.collection.distinct("category", doc! {}).await?;

        let categories = values
            .into_iter()
            .filter_map(|value| value.as_str().map(str::to_string))
            .collect();

        Ok(categories)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> ProductResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }
}
