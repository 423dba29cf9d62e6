//! No-WASM transport using reqwest
//!
//! This module provides HTTP functionality for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use crate::error::Result;
use crate::interface::{HttpClient, RequestApi};
use crate::model::dtos::SubmissionPayload;
use reqwest::{header::CONTENT_TYPE, Client};
use serde_json::Value;

use super::WEB_APP_URL;

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    base_url: String,
}

impl HttpClient for NoWasmClient {
    async fn new() -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: WEB_APP_URL.to_string(),
        })
    }
}

impl NoWasmClient {
    /// Client against a non-default deployment (tests, staging macro).
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: url.into(),
        })
    }

    async fn handle_json_response(resp: reqwest::Response) -> Result<Value> {
        let ok = resp.status().is_success();
        let text = resp.text().await?;
        super::interpret_response(ok, &text)
    }
}

impl RequestApi for NoWasmClient {
    async fn fetch_roster(&self) -> Result<Value> {
        let resp = self.client.get(&self.base_url).send().await?;

        log::debug!("roster fetch status: {:?}", resp.status());

        Self::handle_json_response(resp).await
    }

    async fn submit(&self, payload: &SubmissionPayload) -> Result<Value> {
        // The Apps Script endpoint only answers CORS simple requests, so the
        // JSON body goes out as text/plain instead of application/json.
        let body = serde_json::to_string(payload)?;
        let resp = self
            .client
            .post(&self.base_url)
            .header(CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(body)
            .send()
            .await?;

        log::debug!("submission status: {:?}", resp.status());

        Self::handle_json_response(resp).await
    }
}
