use anyhow::Context;
use electronics_store_api::{
    config::AppConfig,
    db::connect,
    seed::seed_products,
    store::MongoProductStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is not set")?;
    let name = config
        .database_name
        .as_deref()
        .context("DATABASE_NAME is not set")?;

    let db = connect(url, name).await?;
    let store = MongoProductStore::new(db);
    let inserted = seed_products(&store).await?;

    if inserted == 0 {
        println!("Product collection already populated, nothing seeded");
    } else {
        println!("Seeded {inserted} products into {name}");
    }
    Ok(())
}
