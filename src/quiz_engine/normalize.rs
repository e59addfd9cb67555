//! Text canonicalization — the comparison key used by every other module.
//!
//! Two texts are "the same" everywhere in this crate iff their normalized
//! forms are equal. Keyword extraction feeds the theory snippet locator.

use unicode_normalization::UnicodeNormalization;

/// Spanish stop words excluded from keyword extraction. Read-only table,
/// passed explicitly so extraction stays a pure function of its inputs.
pub const STOP_WORDS: &[&str] = &[
    "de", "la", "el", "los", "las", "un", "una", "unos", "unas", "y", "o", "u",
    "que", "como", "cuando", "donde", "para", "por", "con", "sin", "sobre",
    "al", "del", "se", "es", "son", "ser", "su", "sus", "en", "a", "ya", "si",
    "cual", "quien", "quienes", "este", "esta", "estos", "estas",
];

/// Punctuation replaced with spaces during normalization.
const PUNCTUATION: &[char] = &['¿', '?', '.', ',', ';', ':', '(', ')'];

/// True for Unicode combining diacritical marks (U+0300..=U+036F).
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Canonicalize `text` for comparison: lowercase, NFD-decompose and strip
/// diacritics, replace the fixed punctuation set with spaces, collapse
/// whitespace runs, trim.
///
/// `"¿Qué es   el EPP?"` becomes `"que es el epp"`.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract up to 8 keyword tokens from `text`, in original order.
///
/// Tokens come from the normalized form split on whitespace; anything
/// shorter than 5 characters or present in `stop_words` is dropped.
pub fn extract_keywords(text: &str, stop_words: &[&str]) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|word| word.chars().count() >= 5 && !stop_words.contains(word))
        .take(8)
        .map(str::to_string)
        .collect()
}
