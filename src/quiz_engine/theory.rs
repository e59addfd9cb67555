//! Theory snippet retrieval — literal substring lookup, not semantic search.
//!
//! For each question a ranked list of candidate needles is tried against the
//! lowercased theory text; the first hit wins and its surrounding line in
//! the *original* text becomes the explanation. The search corpus is only
//! lowercased (not fully normalized) so that match offsets stay valid inside
//! the original text for line extraction.

use tracing::debug;

use crate::quiz_engine::normalize::{extract_keywords, normalize};

/// Explanation used when no candidate matches the theory text.
pub const THEORY_FALLBACK: &str = "Consulta el material del Nivel II para este tema.";

/// Snippets longer than this are truncated with a trailing `"..."`.
const SNIPPET_MAX_CHARS: usize = 700;

/// Snippets shorter than this are extended with the following line.
const SNIPPET_MIN_CHARS: usize = 40;

/// Needles shorter than this (normalized) are too unreliable to search for.
const NEEDLE_MIN_CHARS: usize = 5;

/// Lowercase `text` while keeping every byte offset aligned with the
/// original. Characters whose lowercase form would change byte length are
/// kept as-is; for the Spanish prose this corpus holds that never happens.
pub fn lowercase_preserving_offsets(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) if l.len_utf8() == c.len_utf8() => out.push(l),
            _ => out.push(c),
        }
    }
    out
}

/// Find the theory passage that best justifies a question's correct answer.
///
/// Candidates, in priority order: the correct answer text (unless empty or
/// the synthetic `"Respuesta ..."` placeholder), the question text, keywords
/// from the question, keywords from the answer. The first candidate whose
/// normalized form (≥ 5 chars) occurs in `theory_lower` wins; later
/// candidates are never tried. Returns [`THEORY_FALLBACK`] when nothing hits.
///
/// `theory_lower` must be `lowercase_preserving_offsets(theory_text)`,
/// precomputed once per bank build.
pub fn find_theory_snippet(
    question_text: &str,
    correct_answer_text: &str,
    theory_text: &str,
    theory_lower: &str,
    stop_words: &[&str],
) -> String {
    let mut candidates: Vec<String> = Vec::new();
    if !correct_answer_text.is_empty() && !correct_answer_text.starts_with("Respuesta") {
        candidates.push(correct_answer_text.to_string());
    }
    candidates.push(question_text.to_string());
    candidates.extend(extract_keywords(question_text, stop_words));
    candidates.extend(extract_keywords(correct_answer_text, stop_words));

    for candidate in candidates {
        let needle = normalize(&candidate);
        if needle.chars().count() < NEEDLE_MIN_CHARS {
            continue;
        }
        if let Some(idx) = theory_lower.find(&needle) {
            return extract_snippet(theory_text, idx);
        }
    }

    debug!(question = question_text, "no theory match, using fallback snippet");
    THEORY_FALLBACK.to_string()
}

/// Cut the line containing byte offset `idx` out of `text`, extending by one
/// line when too short and truncating when too long.
fn extract_snippet(text: &str, idx: usize) -> String {
    let start = text[..idx].rfind('\n').map_or(0, |pos| pos + 1);
    let end = text[idx..].find('\n').map_or(text.len(), |pos| idx + pos);

    let mut snippet = text[start..end].trim();
    if snippet.chars().count() < SNIPPET_MIN_CHARS && end < text.len() {
        if let Some(pos) = text[end + 1..].find('\n') {
            snippet = text[start..end + 1 + pos].trim();
        }
    }

    if snippet.chars().count() > SNIPPET_MAX_CHARS {
        let truncated: String = snippet.chars().take(SNIPPET_MAX_CHARS).collect();
        return format!("{}...", truncated.trim());
    }
    snippet.to_string()
}
