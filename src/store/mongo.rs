//! MongoDB implementation of ProductStore

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Bson, doc, oid::ObjectId},
};
use tracing::instrument;

use super::{PRODUCT_COLLECTION, ProductFilter, ProductStore, StoreError, StoreResult};
use crate::models::{NewProduct, ProductDocument};

pub struct MongoProductStore {
    db: Database,
    collection: Collection<ProductDocument>,
}

impl MongoProductStore {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<ProductDocument>(PRODUCT_COLLECTION);
        Self { db, collection }
    }
}

#[async_trait]
impl ProductStore for MongoProductStore {
    fn database_name(&self) -> String {
        self.db.name().to_string()
    }

    #[instrument(skip(self, product), fields(title = %product.title))]
    async fn insert(&self, product: NewProduct) -> StoreResult<ObjectId> {
        let result = self
            .collection
            .clone_with_type::<NewProduct>()
            .insert_one(&product)
            .await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::UnexpectedId(result.inserted_id.to_string()))?;

        tracing::info!(product_id = %id, "product inserted");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find(&self, filter: &ProductFilter) -> StoreResult<Vec<ProductDocument>> {
        let cursor = self
            .collection
            .find(filter.to_document())
            .sort(doc! { "_id": 1 })
            .await?;
        let products: Vec<ProductDocument> = cursor.try_collect().await?;
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<ProductDocument>> {
        let product = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(product)
    }

    async fn count(&self) -> StoreResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }

    async fn distinct_categories(&self) -> StoreResult<Vec<String>> {
        let values = self.collection.distinct("category", doc! {}).await?;
        Ok(values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(category) => Some(category),
                _ => None,
            })
            .collect())
    }

    async fn collection_names(&self) -> StoreResult<Vec<String>> {
        let names = self.db.list_collection_names().await?;
        Ok(names)
    }
}
