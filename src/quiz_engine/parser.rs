//! Question bank parsing — splits raw bank text into structured questions.
//!
//! The bank is a noisy plain-text document: each question starts at a `¿`
//! and runs up to the next `ANSWER: <letter>` line. Parsing is deliberately
//! permissive — a block with no recognizable option markers is dropped with
//! a warning instead of failing the whole bank.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::quiz_engine::models::{AnswerOption, Question};
use crate::quiz_engine::normalize::STOP_WORDS;
use crate::quiz_engine::rules::{categorize, MODULE_RULES};
use crate::quiz_engine::theory::{find_theory_snippet, lowercase_preserving_offsets};

/// Marker that opens every question block.
const QUESTION_START: char = '¿';

static ANSWER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"ANSWER:\s*([A-D])").unwrap());
static OPTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-F])\)\s*").unwrap());

/// Parse the raw bank text into questions, annotating each with its category
/// and a theory snippet.
///
/// Scans for `¿ ... ANSWER: <letter>` block pairs; blocks without option
/// markers are discarded silently. Returns an empty vec when the start
/// marker never appears — the caller decides whether that is a failure
/// (see [`prepare_quiz`](crate::prepare_quiz)).
pub fn build_question_bank(raw_text: &str, theory_text: &str) -> Vec<Question> {
    let mut questions = Vec::new();

    let mut start = match raw_text.find(QUESTION_START) {
        Some(idx) => idx,
        None => return questions,
    };

    // Lowercased once per bank build; offsets stay valid in the original.
    let theory_lower = lowercase_preserving_offsets(theory_text);

    while let Some(caps) = ANSWER_RE.captures_at(raw_text, start) {
        let answer_match = caps.get(0).unwrap();
        let answer_letter = caps.get(1).unwrap().as_str();
        let block = raw_text[start..answer_match.start()].trim();

        if let Some(question) = parse_question_block(
            block,
            answer_letter,
            questions.len(),
            theory_text,
            &theory_lower,
        ) {
            questions.push(question);
        }

        start = match raw_text[answer_match.end()..].find(QUESTION_START) {
            Some(offset) => answer_match.end() + offset,
            None => break,
        };
    }

    questions
}

/// Parse one `¿ ... ` block into a question, or `None` when the block has
/// no lettered option markers.
///
/// `index` is the zero-based position among successfully parsed questions
/// and becomes the id `q-<index>`.
fn parse_question_block(
    block: &str,
    answer_letter: &str,
    index: usize,
    theory_text: &str,
    theory_lower: &str,
) -> Option<Question> {
    // Whitespace inside a block is insignificant; collapse before splitting.
    let condensed = block.split_whitespace().collect::<Vec<_>>().join(" ");

    let markers: Vec<(String, usize, usize)> = OPTION_RE
        .captures_iter(&condensed)
        .map(|caps| {
            let full = caps.get(0).unwrap();
            (caps[1].to_string(), full.start(), full.end())
        })
        .collect();

    if markers.is_empty() {
        warn!(index, "discarding question block with no option markers");
        return None;
    }

    let question_text = condensed[..markers[0].1].trim().to_string();

    let mut options = Vec::with_capacity(markers.len());
    for (i, (letter, _, text_start)) in markers.iter().enumerate() {
        let text_end = markers.get(i + 1).map_or(condensed.len(), |next| next.1);
        options.push(AnswerOption {
            id: letter.clone(),
            text: condensed[*text_start..text_end].trim().to_string(),
            is_correct: letter.as_str() == answer_letter,
        });
    }

    let correct = options.iter().find(|opt| opt.is_correct);
    let correct_answer_text = match correct {
        Some(opt) => opt.text.clone(),
        None => {
            warn!(index, answer_letter, "answer letter has no matching option");
            format!("Respuesta {answer_letter}")
        }
    };

    let category = categorize(&question_text, MODULE_RULES);
    let explanation = find_theory_snippet(
        &question_text,
        correct.map_or("", |opt| opt.text.as_str()),
        theory_text,
        theory_lower,
        STOP_WORDS,
    );

    Some(Question {
        id: format!("q-{index}"),
        text: question_text,
        options,
        correct_answer_text,
        category,
        explanation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const THEORY: &str = "Sin relación con las preguntas.";

    #[test]
    fn parses_single_block() {
        let raw = "¿Qué es EPP? A) Equipo de protección personal B) Arma C) Radio D) Casco\nANSWER: A";
        let bank = build_question_bank(raw, THEORY);
        assert_eq!(bank.len(), 1);

        let q = &bank[0];
        assert_eq!(q.id, "q-0");
        assert_eq!(q.text, "¿Qué es EPP?");
        assert_eq!(q.options.len(), 4);
        assert_eq!(q.options[0].text, "Equipo de protección personal");
        assert!(q.options[0].is_correct);
        assert!(q.options[1..].iter().all(|opt| !opt.is_correct));
        assert_eq!(q.correct_answer_text, "Equipo de protección personal");
    }

    #[test]
    fn parses_multiple_blocks_with_sequential_ids() {
        let raw = "\
            ¿Primera pregunta? A) uno B) dos\nANSWER: B\n\
            ruido entre bloques\n\
            ¿Segunda pregunta? A) tres B) cuatro C) cinco\nANSWER: C";
        let bank = build_question_bank(raw, THEORY);
        assert_eq!(bank.len(), 2);
        assert_eq!(bank[0].id, "q-0");
        assert_eq!(bank[1].id, "q-1");
        assert_eq!(bank[0].correct_answer_text, "dos");
        assert_eq!(bank[1].correct_answer_text, "cinco");
        assert_eq!(bank[1].options.len(), 3);
    }

    #[test]
    fn block_without_option_markers_is_discarded() {
        let raw = "\
            ¿Bloque sin opciones, solo texto corrido\nANSWER: A\n\
            ¿Bloque válido? A) sí B) no\nANSWER: A";
        let bank = build_question_bank(raw, THEORY);
        assert_eq!(bank.len(), 1);
        // The discarded block does not consume an id.
        assert_eq!(bank[0].id, "q-0");
        assert_eq!(bank[0].text, "¿Bloque válido?");
    }

    #[test]
    fn missing_start_marker_yields_empty_bank() {
        let raw = "Texto cualquiera sin marcador de inicio.\nANSWER: A";
        assert!(build_question_bank(raw, THEORY).is_empty());
        assert!(build_question_bank("", THEORY).is_empty());
    }

    #[test]
    fn answer_letter_without_option_degrades_to_placeholder() {
        // Options only reach B, but the answer names D.
        let raw = "¿Pregunta rara? A) uno B) dos\nANSWER: D";
        let bank = build_question_bank(raw, THEORY);
        assert_eq!(bank.len(), 1);
        let q = &bank[0];
        assert!(q.options.iter().all(|opt| !opt.is_correct));
        assert_eq!(q.correct_answer_text, "Respuesta D");
    }

    #[test]
    fn internal_whitespace_is_collapsed() {
        let raw = "¿Pregunta   con\n\n saltos? A) opción\n  larga B) otra\nANSWER: A";
        let bank = build_question_bank(raw, THEORY);
        assert_eq!(bank[0].text, "¿Pregunta con saltos?");
        assert_eq!(bank[0].options[0].text, "opción larga");
    }

    #[test]
    fn option_letters_beyond_d_are_parsed() {
        let raw = "¿Con seis opciones? A) a B) b C) c D) d E) e F) f\nANSWER: C";
        let bank = build_question_bank(raw, THEORY);
        assert_eq!(bank[0].options.len(), 6);
        assert_eq!(bank[0].options[5].id, "F");
        assert_eq!(bank[0].correct_answer_text, "c");
    }

    #[test]
    fn answer_marker_before_first_question_is_ignored() {
        // Scanning starts at the first `¿`, so a stray leading ANSWER line
        // never terminates anything.
        let raw = "ANSWER: B\n¿Pregunta? A) uno B) dos\nANSWER: A";
        let bank = build_question_bank(raw, THEORY);
        assert_eq!(bank.len(), 1);
        assert_eq!(bank[0].correct_answer_text, "uno");
    }

    #[test]
    fn categorizes_and_annotates_each_question() {
        let raw = "¿Qué es un arma de fuego? A) Una herramienta B) Un vehículo\nANSWER: A";
        let bank = build_question_bank(raw, THEORY);
        // The category is derived from the question text; both must survive
        // into the parsed record intact.
        assert_eq!(bank[0].text, "¿Qué es un arma de fuego?");
        assert_eq!(bank[0].category, "Módulo VIII: Práctica de Tiro");
        assert!(!bank[0].explanation.is_empty());
    }
}
