/// Estimate token count for a piece of text
/// Uses a simple heuristic: 1 token ≈ 4 characters
/// This is a rough approximation, not a tokenizer-exact count
pub fn estimate_tokens(text: &str) -> usize {
    // Counts chars rather than bytes so non-ASCII text is not overweighted
    (text.chars().count() / 4).max(1)
}

/// Sum of per-sentence estimates for a run of sentences
pub fn estimate_sentences<S: AsRef<str>>(sentences: &[S]) -> usize {
    sentences.iter().map(|s| estimate_tokens(s.as_ref())).sum()
}
