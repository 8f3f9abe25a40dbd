//! Document store access for the `product` collection.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::models::{NewProduct, ProductDocument};

pub mod filter;
pub mod mongo;

pub use filter::ProductFilter;
pub use mongo::MongoProductStore;

pub const PRODUCT_COLLECTION: &str = "product";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Unexpected inserted id: {0}")]
    UnexpectedId(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Store client used by the handler layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Name of the connected database.
    fn database_name(&self) -> String;

    /// Insert a product and return the identifier the store assigned.
    async fn insert(&self, product: NewProduct) -> StoreResult<ObjectId>;

    /// Products matching `filter`, in insertion order.
    async fn find(&self, filter: &ProductFilter) -> StoreResult<Vec<ProductDocument>>;

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<ProductDocument>>;

    /// Number of documents in the product collection.
    async fn count(&self) -> StoreResult<u64>;

    /// Distinct string values of the `category` field, unsorted.
    async fn distinct_categories(&self) -> StoreResult<Vec<String>>;

    /// Collection names in the connected database.
    async fn collection_names(&self) -> StoreResult<Vec<String>>;
}
