use reqwest::Client;
use serde_json::Value;
use std::env;
use std::error::Error;
use std::fmt;

use crate::models::query::PlanRequest;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug)]
pub enum PlannerError {
    Http(reqwest::Error),
    Response(String),
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::Http(err) => write!(f, "HTTP error: {}", err),
            PlannerError::Response(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl Error for PlannerError {}

impl From<reqwest::Error> for PlannerError {
    fn from(err: reqwest::Error) -> Self {
        PlannerError::Http(err)
    }
}

/// Client for the remote planning service. Fire-once and fail-fast: one
/// POST per results request, with no retry and no partial-result handling.
#[derive(Clone)]
pub struct PlannerClient {
    client: Client,
    base_url: String,
}

impl PlannerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            env::var("PLANNER_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue the single planning request and return the parsed body. Any
    /// non-success status or transport failure is one error condition.
    pub async fn generate_plan(&self, request: &PlanRequest) -> Result<Value, PlannerError> {
        let url = format!("{}/api/generate_plan", self.base_url);

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlannerError::Response(format!("HTTP {}", status.as_u16())));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| PlannerError::Response(format!("Failed to parse response: {}", err)))?;

        Ok(body)
    }
}
