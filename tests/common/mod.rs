#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use electronics_store_api::{
    config::AppConfig,
    models::{NewProduct, ProductDocument},
    routes::create_app,
    state::AppState,
    store::{ProductFilter, ProductStore, StoreResult},
};
use mongodb::bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

/// In-process stand-in for the document store, holding documents in
/// insertion order.
#[derive(Default)]
pub struct InMemoryStore {
    docs: Mutex<Vec<ProductDocument>>,
}

impl InMemoryStore {
    pub fn len(&self) -> usize {
        self.docs.lock().unwrap().len()
    }

    pub fn push_raw(&self, doc: ProductDocument) {
        self.docs.lock().unwrap().push(doc);
    }
}

fn matches(filter: &ProductFilter, doc: &ProductDocument) -> bool {
    if let Some(ref text) = filter.text_query {
        if !doc.title.to_lowercase().contains(&text.to_lowercase()) {
            return false;
        }
    }
    if let Some(ref category) = filter.category {
        if &doc.category != category {
            return false;
        }
    }
    if filter.min_price.is_some_and(|min| doc.price < min) {
        return false;
    }
    if filter.max_price.is_some_and(|max| doc.price > max) {
        return false;
    }
    true
}

#[async_trait]
impl ProductStore for InMemoryStore {
    fn database_name(&self) -> String {
        "memory".to_string()
    }

    async fn insert(&self, product: NewProduct) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        self.docs.lock().unwrap().push(product.into_document(id));
        Ok(id)
    }

    async fn find(&self, filter: &ProductFilter) -> StoreResult<Vec<ProductDocument>> {
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .filter(|doc| matches(filter, doc))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<ProductDocument>> {
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .find(|doc| doc.id == id)
            .cloned())
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.len() as u64)
    }

    async fn distinct_categories(&self) -> StoreResult<Vec<String>> {
        let mut categories: Vec<String> = Vec::new();
        for doc in self.docs.lock().unwrap().iter() {
            if !categories.contains(&doc.category) {
                categories.push(doc.category.clone());
            }
        }
        Ok(categories)
    }

    async fn collection_names(&self) -> StoreResult<Vec<String>> {
        Ok(vec!["product".to_string()])
    }
}

pub fn app_with(store: Option<Arc<InMemoryStore>>) -> Router {
    let store = store.map(|s| s as Arc<dyn ProductStore>);
    create_app(AppState::new(AppConfig::default(), store))
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn parse<T: DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}
