//! Text processing utilities.
//!
//! Word extraction and sentence splitting used by the analyzer. Both work on
//! fixed delimiter sets; there is no locale or abbreviation awareness.

/// Characters that separate words.
const WORD_DELIMITERS: [char; 4] = [' ', '\t', '\n', '\r'];

/// Characters that terminate sentences.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Extract cleaned words from text, in order of appearance.
///
/// Splits on spaces, tabs, and line breaks, strips every character that is
/// not a letter or digit, and drops fragments left empty.
pub(crate) fn extract_words(text: &str) -> Vec<String> {
    text.split(WORD_DELIMITERS)
        .filter(|fragment| !fragment.is_empty())
        .map(clean_word)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Keep only alphanumeric characters.
///
/// Uses Unicode classification (`char::is_alphanumeric`), so letters and
/// numbers from any script survive, including number characters such as
/// `²` or `Ⅻ`. `"x²"` cleans to a two-character word.
fn clean_word(fragment: &str) -> String {
    fragment.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Split raw text into sentence fragments.
///
/// Fragments are not trimmed: a run like `". ."` yields a single `" "`
/// fragment, which counts as a sentence.
pub(crate) fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(SENTENCE_TERMINATORS)
        .filter(|fragment| !fragment.is_empty())
}

/// Length of a word in characters.
pub(crate) fn char_len(word: &str) -> usize {
    word.chars().count()
}
