use regex::Regex;
use std::sync::OnceLock;

/// Terminal punctuation, a whitespace run, then the first char of the next sentence
fn boundary_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[.!?]\s+[A-Z0-9]").expect("valid boundary regex"))
}

/// Split raw text into sentences.
///
/// A boundary is a run of whitespace preceded by `.`, `!` or `?` and followed by
/// an ASCII uppercase letter or digit. This is a heuristic, not a linguistic
/// parser: "Dr. Smith" is split, "e.g. the" is not.
///
/// Every sentence is trimmed with its interior whitespace collapsed to single
/// spaces. Empty pieces are dropped, so blank input yields an empty vector.
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in boundary_pattern().find_iter(text) {
        // Punctuation and the leading char are single-byte ASCII
        let end = m.start() + 1;
        push_sentence(&mut sentences, &text[start..end]);
        start = m.end() - 1;
    }
    push_sentence(&mut sentences, &text[start..]);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, piece: &str) {
    let collapsed = piece.split_whitespace().collect::<Vec<_>>().join(" ");
    if !collapsed.is_empty() {
        sentences.push(collapsed);
    }
}
