//! WASM transport using gloo_net
//!
//! This module provides HTTP functionality for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's
//! fetch API.

use crate::error::Result;
use crate::interface::{HttpClient, RequestApi};
use crate::model::dtos::SubmissionPayload;
use gloo_net::http::Request;
use serde_json::Value;
use web_sys::RequestMode;

use super::WEB_APP_URL;

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient {
    base_url: String,
}

impl HttpClient for WasmClient {
    async fn new() -> Result<Self> {
        Ok(Self {
            base_url: WEB_APP_URL.to_string(),
        })
    }
}

impl WasmClient {
    /// Client against a non-default deployment (tests, staging macro).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            base_url: url.into(),
        }
    }

    async fn handle_json_response(resp: gloo_net::http::Response) -> Result<Value> {
        let ok = resp.ok();
        let text = resp.text().await?;

        log::debug!("response status: {}, length: {}", resp.status(), text.len());

        super::interpret_response(ok, &text)
    }
}

impl RequestApi for WasmClient {
    async fn fetch_roster(&self) -> Result<Value> {
        let resp = Request::get(&self.base_url)
            .mode(RequestMode::Cors)
            .send()
            .await?;

        Self::handle_json_response(resp).await
    }

    async fn submit(&self, payload: &SubmissionPayload) -> Result<Value> {
        // The Apps Script endpoint only answers CORS simple requests, so the
        // JSON body goes out as text/plain instead of application/json.
        let body = serde_json::to_string(payload)?;
        let resp = Request::post(&self.base_url)
            .mode(RequestMode::Cors)
            .header("Content-Type", "text/plain;charset=utf-8")
            .body(body)?
            .send()
            .await?;

        Self::handle_json_response(resp).await
    }
}
