#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::model::dtos::SubmissionPayload;
use serde_json::Value;

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance
    async fn new() -> Result<Self>
    where
        Self: Sized;
}

/// The two operations the web app exposes.
pub trait RequestApi {
    /// Fetch the class-to-students roster.
    async fn fetch_roster(&self) -> Result<Value>;

    /// Submit a payment or a new-student registration.
    async fn submit(&self, payload: &SubmissionPayload) -> Result<Value>;
}
