mod client;
mod prompts;
mod types;


pub use client::{SummarizerClient, SummarizerError};
pub use prompts::{CHUNK_SUMMARY, FINAL_SUMMARY};
pub use types::{HealthResponse, SummarizeRequest, SummarizeResponse};

use async_trait::async_trait;

/// Generative model that condenses text under an instruction prompt
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str, instructions: &str) -> Result<String, SummarizerError>;
}
