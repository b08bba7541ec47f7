//! Single-pass text statistics.
//!
//! [`analyze`] is total: every input, including empty or punctuation-only
//! text, maps to a [`TextAnalysisResult`].

use tracing::debug;

use crate::report::TextAnalysisResult;
use crate::text;

/// Compute word count, sentence count, average word length, and longest word.
///
/// Empty and whitespace-only input short-circuits to
/// [`TextAnalysisResult::EMPTY`].
///
/// ```
/// use textstat_core::analyze;
///
/// let result = analyze("The quick brown fox.");
/// assert_eq!(result.word_count(), 4);
/// assert_eq!(result.sentence_count(), 1);
/// assert_eq!(result.longest_word(), "quick");
/// ```
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze(text: &str) -> TextAnalysisResult {
    if text.trim().is_empty() {
        debug!("no content, returning empty result");
        return TextAnalysisResult::EMPTY;
    }

    let words = text::extract_words(text);
    let word_count = words.len();
    let sentence_count = text::split_sentences(text).count();
    let average_word_length = average_length(&words);
    let longest_word = longest(&words).to_string();

    debug!(word_count, sentence_count, average_word_length, "text analyzed");

    TextAnalysisResult::new(
        word_count,
        sentence_count,
        average_word_length,
        longest_word,
    )
}

/// [`analyze`] for input that may be absent.
///
/// `None` yields [`TextAnalysisResult::EMPTY`].
pub fn analyze_opt(text: Option<&str>) -> TextAnalysisResult {
    text.map_or(TextAnalysisResult::EMPTY, analyze)
}

fn average_length(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let total: usize = words.iter().map(|w| text::char_len(w)).sum();
    total as f64 / words.len() as f64
}

/// First word of maximal length; ties go to the earliest word.
fn longest(words: &[String]) -> &str {
    words
        .iter()
        .fold(None::<(&str, usize)>, |best, word| {
            let len = text::char_len(word);
            match best {
                Some((_, best_len)) if best_len >= len => best,
                _ => Some((word.as_str(), len)),
            }
        })
        .map_or("", |(word, _)| word)
}
