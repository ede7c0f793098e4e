use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use super::types::{HealthResponse, SummarizeRequest, SummarizeResponse};
use super::Summarizer;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },
}

/// HTTP client for the summarization model server
pub struct SummarizerClient {
    http: Client,
    endpoint: String,
    model: Option<String>,
    temperature: Option<f32>,
}

impl SummarizerClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SummarizerError> {
        Self::with_timeout(endpoint, Duration::from_secs(180)) // 3 min for LLM generation
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SummarizerError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: None,
            temperature: None,
        })
    }

    /// Ask the server for a specific model instead of its default
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Check if the summarizer server is healthy
    pub async fn health_check(&self) -> Result<HealthResponse, SummarizerError> {
        let response = self
            .http
            .get(format!("{}/health", self.endpoint))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SummarizerError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Summarizer for SummarizerClient {
    async fn summarize(&self, text: &str, instructions: &str) -> Result<String, SummarizerError> {
        let req = SummarizeRequest {
            text: text.to_string(),
            instructions: instructions.to_string(),
            model: self.model.clone(),
            temperature: self.temperature,
        };
        debug!(chars = req.text.len(), endpoint = %self.endpoint, "requesting summary");

        let response = self
            .http
            .post(format!("{}/summarize", self.endpoint))
            .json(&req)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SummarizerError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let res: SummarizeResponse = response.json().await?;
        Ok(res.summary.trim().to_string())
    }
}
