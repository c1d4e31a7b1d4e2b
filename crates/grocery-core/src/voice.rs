//! Voice Transcript Normalization
//!
//! Turns a dictated phrase like "milk and eggs comma bread" into item names.

use std::sync::OnceLock;

use regex::Regex;

fn separator_words() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b(?:and|comma)\b").expect("separator pattern is valid"))
}

/// Lower-case, map spoken separators to commas, split, trim, drop empties
pub fn normalize_transcript(transcript: &str) -> Vec<String> {
    let lowered = transcript.to_lowercase();
    separator_words()
        .replace_all(&lowered, ",")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
