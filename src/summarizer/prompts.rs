/// Instructions for summarizing a single chunk
pub const CHUNK_SUMMARY: &str = "Summarize this section in 4–7 bullet points.
Keep key people (PER), orgs (ORG), places (GPE/geo), dates/times (tim), events (eve), artifacts (art).
Be concise and avoid repetition.";

/// Instructions for merging the chunk summaries
pub const FINAL_SUMMARY: &str = "Combine these bullet summaries into a single cohesive 150–250 word summary.
Merge duplicates, keep structure: Context, Key Points, Dates/Deadlines, Entities.";
