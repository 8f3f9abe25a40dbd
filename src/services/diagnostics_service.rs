use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

/// Flat status object served by `GET /test`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Probe the store. Never fails; problems are reported in the text fields.
pub async fn diagnose(state: &AppState) -> DiagnosticsReport {
    let mut report = DiagnosticsReport {
        backend: "✅ Running".to_string(),
        database: "⚠️  Available but not initialized".to_string(),
        database_url: presence(state.config.has_database_url()),
        database_name: presence(state.config.has_database_name()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if let Some(store) = state.store.as_deref() {
        report.connection_status = "Connected".to_string();
        match store.collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_COLLECTIONS);
                report.collections = names;
                report.database = "✅ Connected & Working".to_string();
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    database = %store.database_name(),
                    "listing collections failed"
                );
                let short: String = err.to_string().chars().take(MAX_ERROR_CHARS).collect();
                report.database = format!("⚠️  Connected but Error: {short}");
            }
        }
    }

    report
}

fn presence(set: bool) -> String {
    if set { "✅ Set" } else { "❌ Not Set" }.to_string()
}
