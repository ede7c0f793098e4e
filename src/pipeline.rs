//! Map-then-reduce summarization over entity chunks.

use serde::Serialize;
use tracing::{info, warn};

use crate::chunker::Chunk;
use crate::summarizer::{CHUNK_SUMMARY, FINAL_SUMMARY, Summarizer, SummarizerError};

/// Final summary plus the per-chunk summaries it was built from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub final_summary: String,
    /// One entry per chunk, in chunk order, blank ones included
    pub chunk_summaries: Vec<String>,
}

impl DocumentSummary {
    /// Chunk summaries separated by blank lines
    pub fn chunk_summaries_text(&self) -> String {
        self.chunk_summaries.join("\n\n")
    }
}

/// Bullet-list the non-blank summaries, one per line
pub fn stitch_summaries(summaries: &[String]) -> String {
    summaries
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| format!("- {s}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summarize every chunk in order, then merge the results into one summary.
///
/// When no chunk produced a non-blank summary the merge call is skipped and
/// the final summary is empty. The first summarizer error aborts the run.
pub async fn summarize_chunks<S>(
    chunks: &[Chunk],
    summarizer: &S,
) -> Result<DocumentSummary, SummarizerError>
where
    S: Summarizer + ?Sized,
{
    let mut chunk_summaries = Vec::with_capacity(chunks.len());
    for (idx, chunk) in chunks.iter().enumerate() {
        let summary = summarizer.summarize(&chunk.text, CHUNK_SUMMARY).await?;
        if summary.trim().is_empty() {
            warn!(chunk = idx, "summarizer returned an empty chunk summary");
        }
        chunk_summaries.push(summary);
    }
    info!(chunks = chunks.len(), "chunk summaries complete");

    let stitched = stitch_summaries(&chunk_summaries);
    if stitched.is_empty() {
        return Ok(DocumentSummary {
            final_summary: String::new(),
            chunk_summaries,
        });
    }

    let final_summary = summarizer.summarize(&stitched, FINAL_SUMMARY).await?;
    info!(chars = final_summary.len(), "final summary complete");

    Ok(DocumentSummary {
        final_summary,
        chunk_summaries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Echoes a tag per call and records every request
    #[derive(Default)]
    struct RecordingSummarizer {
        calls: Mutex<Vec<(String, String)>>,
        blank: bool,
    }

    #[async_trait]
    impl Summarizer for RecordingSummarizer {
        async fn summarize(
            &self,
            text: &str,
            instructions: &str,
        ) -> Result<String, SummarizerError> {
            let mut calls = self.calls.lock().unwrap();
            calls.push((text.to_string(), instructions.to_string()));
            if self.blank {
                return Ok("   ".to_string());
            }
            Ok(format!("summary {}", calls.len()))
        }
    }

    struct FailingSummarizer;

    #[async_trait]
    impl Summarizer for FailingSummarizer {
        async fn summarize(&self, _: &str, _: &str) -> Result<String, SummarizerError> {
            Err(SummarizerError::ServerError {
                status: 503,
                body: "overloaded".to_string(),
            })
        }
    }

    fn chunk(text: &str) -> Chunk {
        Chunk {
            text: text.to_string(),
            sentences: vec![text.to_string()],
            entities: vec![],
            token_count: 1,
        }
    }

    #[test]
    fn test_stitch_skips_blank_summaries() {
        let summaries = vec!["one".to_string(), "  ".to_string(), "two".to_string()];
        assert_eq!(stitch_summaries(&summaries), "- one\n- two");
        assert_eq!(stitch_summaries(&[]), "");
    }

    #[tokio::test]
    async fn test_summarize_maps_then_reduces() {
        let summarizer = RecordingSummarizer::default();
        let chunks = vec![chunk("Alice joined Acme."), chunk("Paris hosted it.")];

        let result = summarize_chunks(&chunks, &summarizer).await.unwrap();

        assert_eq!(result.chunk_summaries, vec!["summary 1", "summary 2"]);
        assert_eq!(result.final_summary, "summary 3");
        assert_eq!(result.chunk_summaries_text(), "summary 1\n\nsummary 2");

        let calls = summarizer.calls.lock().unwrap();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0], ("Alice joined Acme.".to_string(), CHUNK_SUMMARY.to_string()));
        assert_eq!(calls[2].0, "- summary 1\n- summary 2");
        assert_eq!(calls[2].1, FINAL_SUMMARY);
    }

    #[tokio::test]
    async fn test_no_chunks_skips_final_call() {
        let summarizer = RecordingSummarizer::default();
        let result = summarize_chunks(&[], &summarizer).await.unwrap();

        assert_eq!(result, DocumentSummary::default());
        assert!(summarizer.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_chunk_summaries_skip_final_call() {
        let summarizer = RecordingSummarizer {
            blank: true,
            ..Default::default()
        };
        let result = summarize_chunks(&[chunk("Text.")], &summarizer).await.unwrap();

        assert!(result.final_summary.is_empty());
        assert_eq!(result.chunk_summaries.len(), 1);
        assert_eq!(summarizer.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_summarizer_error_propagates() {
        let result = summarize_chunks(&[chunk("Text.")], &FailingSummarizer).await;
        assert!(matches!(
            result,
            Err(SummarizerError::ServerError { status: 503, .. })
        ));
    }
}
