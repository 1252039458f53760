//! Backend API Client
//!
//! HTTP implementation of the dashboard's backend seams. Every route lives
//! under the configured API base; non-2xx responses carry their body text
//! as the error detail when the server sent one.

mod menu;
mod summary;

use dashboard_sync::{StoreError, StoreResult};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::route::encode_segment;

pub struct HttpBackend {
    client: reqwest::Client,
    base: String,
}

impl HttpBackend {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn menu_url(&self, id: &str) -> String {
        self.url(&format!("/menus/{}", encode_segment(id)))
    }
}

// ========================
// Response Helpers
// ========================

fn transport(e: reqwest::Error) -> StoreError {
    StoreError::Transport(e.to_string())
}

/// Map a non-2xx response to `StoreError::Status`, passing others through
async fn check_status(response: reqwest::Response, fallback: &str) -> StoreResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.ok();
    Err(status_error(status, body.as_deref(), fallback))
}

/// `body` is `None` when the response body could not be read
fn status_error(status: StatusCode, body: Option<&str>, fallback: &str) -> StoreError {
    log::warn!("[API] {} {}", status.as_u16(), fallback);
    StoreError::from_status(status.as_u16(), body.unwrap_or_default(), fallback)
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response, fallback: &str) -> StoreResult<T> {
    check_status(response, fallback)
        .await?
        .json::<T>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}
