use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = non_empty_var("DATABASE_URL");
        let database_name = non_empty_var("DATABASE_NAME");
        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8000);
        Ok(Self {
            database_url,
            database_name,
            host,
            port,
        })
    }

    pub fn has_database_url(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn has_database_name(&self) -> bool {
        self.database_name.is_some()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            database_name: None,
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}
