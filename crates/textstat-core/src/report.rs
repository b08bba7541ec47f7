//! The analysis result and its text rendering.
//!
//! [`TextAnalysisResult`] derives `Serialize` so the CLI can emit it as
//! JSON. The human-readable layout is produced by [`format`] and the
//! `Display` impl, which share one implementation.

use std::fmt;

use serde::Serialize;

/// Line terminator used between rendered lines.
#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

const HEADER: &str = "=== Text Analysis Result ===";
const FOOTER: &str = "============================";
const NO_WORD: &str = "(none)";

/// Descriptive statistics for a block of text.
///
/// Built once per call to [`analyze`](crate::analyze) and never mutated.
/// When `word_count` is zero, `average_word_length` is `0.0` and
/// `longest_word` is empty.
///
/// The type serializes but does not deserialize, so parsed input cannot
/// produce a result that breaks that invariant:
///
/// ```compile_fail
/// let result: textstat_core::TextAnalysisResult =
///     serde_json::from_str(r#"{"word_count":0,"sentence_count":0,"average_word_length":3.0,"longest_word":"x"}"#)
///         .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysisResult {
    word_count: usize,
    sentence_count: usize,
    average_word_length: f64,
    longest_word: String,
}

impl TextAnalysisResult {
    /// The result for input with no content.
    pub const EMPTY: Self = Self {
        word_count: 0,
        sentence_count: 0,
        average_word_length: 0.0,
        longest_word: String::new(),
    };

    /// Create a result from its parts.
    ///
    /// Callers outside this crate normally get results from
    /// [`analyze`](crate::analyze); this exists for rendering values that
    /// were computed or stored elsewhere.
    pub const fn new(
        word_count: usize,
        sentence_count: usize,
        average_word_length: f64,
        longest_word: String,
    ) -> Self {
        Self {
            word_count,
            sentence_count,
            average_word_length,
            longest_word,
        }
    }

    /// Number of cleaned, non-empty words.
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of non-empty fragments between `.`, `!` and `?`.
    pub const fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Mean word length in characters.
    pub const fn average_word_length(&self) -> f64 {
        self.average_word_length
    }

    /// The first word of maximal length, or `""` when there are no words.
    pub fn longest_word(&self) -> &str {
        &self.longest_word
    }
}

impl Default for TextAnalysisResult {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for TextAnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let longest = if self.longest_word.is_empty() {
            NO_WORD
        } else {
            self.longest_word.as_str()
        };

        write!(f, "{HEADER}{LINE_ENDING}")?;
        write!(f, "Word Count: {}{LINE_ENDING}", self.word_count)?;
        write!(
            f,
            "Average Word Length: {:.2}{LINE_ENDING}",
            self.average_word_length
        )?;
        write!(f, "Sentence Count: {}{LINE_ENDING}", self.sentence_count)?;
        write!(f, "Longest Word: {longest}{LINE_ENDING}")?;
        f.write_str(FOOTER)
    }
}

/// Render a result as the fixed multi-line report.
///
/// ```
/// use textstat_core::{TextAnalysisResult, format};
///
/// let text = format(&TextAnalysisResult::EMPTY);
/// assert!(text.starts_with("=== Text Analysis Result ==="));
/// assert!(text.contains("Longest Word: (none)"));
/// ```
pub fn format(result: &TextAnalysisResult) -> String {
    result.to_string()
}
