use crate::{
    models::NewProduct,
    store::{ProductStore, StoreResult},
};

/// The fixed sample catalogue, in insertion order.
pub fn sample_products() -> Vec<NewProduct> {
    let samples = [
        (
            "Smartphone X200",
            "6.5\" OLED, 128GB, Dual Camera",
            699.0,
            "Phones",
            "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?q=80&w=800&auto=format&fit=crop",
        ),
        (
            "Noise-Canceling Headphones",
            "Over-ear, 30h battery, Bluetooth 5.2",
            199.0,
            "Audio",
            "https://images.unsplash.com/photo-1518441902119-52ab42fb52fb?q=80&w=800&auto=format&fit=crop",
        ),
        (
            "4K Ultra HD TV 55\"",
            "55-inch, HDR10+, Smart TV",
            499.0,
            "TVs",
            "https://images.unsplash.com/photo-1593359677879-74010a5d13b6?q=80&w=800&auto=format&fit=crop",
        ),
        (
            "Gaming Laptop G15",
            "RTX 4060, 16GB RAM, 1TB SSD",
            1499.0,
            "Computers",
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?q=80&w=800&auto=format&fit=crop",
        ),
    ];

    samples
        .into_iter()
        .map(|(title, description, price, category, image)| NewProduct {
            title: title.to_string(),
            description: Some(description.to_string()),
            price,
            category: category.to_string(),
            in_stock: true,
            image: Some(image.to_string()),
        })
        .collect()
}

/// Insert the sample catalogue when the product collection is empty.
/// Returns how many products were inserted.
pub async fn seed_products(store: &dyn ProductStore) -> StoreResult<usize> {
    if store.count().await? > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for product in sample_products() {
        store.insert(product).await?;
        inserted += 1;
    }
    Ok(inserted)
}

/// Startup hook: seeding problems are logged and otherwise ignored.
pub async fn seed_on_startup(store: Option<&dyn ProductStore>) {
    let Some(store) = store else {
        return;
    };

    match seed_products(store).await {
        Ok(0) => tracing::debug!("product collection already populated, skipping seed"),
        Ok(count) => tracing::info!(count, "seeded sample products"),
        Err(err) => tracing::warn!(error = %err, "seeding sample products failed"),
    }
}
