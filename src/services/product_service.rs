use mongodb::bson::oid::ObjectId;

use crate::{
    dto::products::CreateProductRequest,
    error::{AppError, AppResult},
    models::Product,
    state::AppState,
    store::ProductFilter,
};

/// List products matching the filter. Without a store, or when the store call
/// fails, the listing is empty rather than an error.
pub async fn list_products(state: &AppState, filter: ProductFilter) -> Vec<Product> {
    let Some(store) = state.store.as_deref() else {
        return Vec::new();
    };

    match store.find(&filter).await {
        Ok(docs) => docs.into_iter().map(Product::from).collect(),
        Err(err) => {
            tracing::warn!(error = %err, "listing products failed, returning empty list");
            Vec::new()
        }
    }
}

pub async fn get_product(state: &AppState, raw_id: &str) -> AppResult<Product> {
    let store = state.store()?;
    let id = ObjectId::parse_str(raw_id)
        .map_err(|_| AppError::MalformedIdentifier(raw_id.to_string()))?;

    let result = store.find_by_id(id).await?.map(Product::from);
    match result {
        Some(p) => Ok(p),
        None => Err(AppError::NotFound),
    }
}

/// Validate and insert a product, returning the new id in its hex form.
pub async fn create_product(state: &AppState, payload: CreateProductRequest) -> AppResult<String> {
    let product = payload.into_new_product()?;
    let store = state.store()?;
    let id = store.insert(product).await?;
    Ok(id.to_hex())
}

/// Distinct non-empty categories in ascending byte order.
pub async fn list_categories(state: &AppState) -> Vec<String> {
    let Some(store) = state.store.as_deref() else {
        return Vec::new();
    };

    match store.distinct_categories().await {
        Ok(mut categories) => {
            categories.retain(|c| !c.is_empty());
            categories.sort();
            categories.dedup();
            categories
        }
        Err(err) => {
            tracing::warn!(error = %err, "listing categories failed, returning empty list");
            Vec::new()
        }
    }
}
