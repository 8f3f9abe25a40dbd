use anyhow::Result;
use mongodb::{Client, Database, options::ClientOptions};
use std::{sync::Arc, time::Duration};

use crate::{
    config::AppConfig,
    store::{MongoProductStore, ProductStore},
};

/// Create a MongoDB handle. The driver connects lazily, so an unreachable
/// server surfaces on the first store call rather than here.
pub async fn connect(database_url: &str, database_name: &str) -> Result<Database> {
    let mut options = ClientOptions::parse(database_url).await?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.connect_timeout = Some(Duration::from_secs(10));
    options.server_selection_timeout = Some(Duration::from_secs(5));

    let client = Client::with_options(options)?;
    Ok(client.database(database_name))
}

/// Build the product store when the database is configured.
///
/// Returns `None` when either setting is missing or the client cannot be
/// created; handlers then answer with their store-unavailable fallbacks.
pub async fn create_store(config: &AppConfig) -> Option<Arc<dyn ProductStore>> {
    let (Some(url), Some(name)) = (&config.database_url, &config.database_name) else {
        tracing::warn!("DATABASE_URL or DATABASE_NAME not set, running without a database");
        return None;
    };

    match connect(url, name).await {
        Ok(db) => {
            tracing::info!(database = %name, "database client ready");
            Some(Arc::new(MongoProductStore::new(db)))
        }
        Err(err) => {
            tracing::warn!(error = %err, "database client could not be created");
            None
        }
    }
}
