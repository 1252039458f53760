//! Summary Routes
//!
//! `/summary` (narrative text) and `/waste-summary` (structured report),
//! both keyed by `menu_id` and `scope` query parameters.

use async_trait::async_trait;
use dashboard_sync::{MenuId, Scope, StoreResult, SummarySource, WasteReport};
use serde::Deserialize;

use super::{read_json, transport, HttpBackend};

#[derive(Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    summary: Option<String>,
}

impl HttpBackend {
    fn scoped_get(&self, path: &str, id: &MenuId, scope: Scope) -> reqwest::RequestBuilder {
        self.client
            .get(self.url(path))
            .query(&[("menu_id", id.as_str()), ("scope", scope.as_str())])
    }
}

#[async_trait(?Send)]
impl SummarySource for HttpBackend {
    async fn fetch_summary(&self, id: &MenuId, scope: Scope) -> StoreResult<String> {
        let response = self.scoped_get("/summary", id, scope).send().await.map_err(transport)?;
        let body: SummaryResponse = read_json(response, "Failed to fetch summary").await?;
        Ok(body.summary.unwrap_or_default())
    }

    async fn fetch_waste_report(&self, id: &MenuId, scope: Scope) -> StoreResult<WasteReport> {
        let response = self.scoped_get("/waste-summary", id, scope).send().await.map_err(transport)?;
        read_json(response, "Failed to load reports").await
    }
}
