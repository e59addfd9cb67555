//! Single entry point `prepare_quiz()` — bank build plus pool derivation.

use crate::quiz_engine::distractors::build_distractor_pool;
use crate::quiz_engine::models::{PreparedQuiz, QuizError};
use crate::quiz_engine::parser::build_question_bank;

/// Compile the two source texts into the immutable quiz structures.
///
/// Pure function of its inputs: the same pair of texts always produces the
/// same bank and pool. The one escalated failure is a bank that parses to
/// zero questions — every other anomaly degrades in place (see the parser
/// and theory modules).
pub fn prepare_quiz(raw_bank_text: &str, theory_text: &str) -> Result<PreparedQuiz, QuizError> {
    let bank = build_question_bank(raw_bank_text, theory_text);
    if bank.is_empty() {
        return Err(QuizError::EmptyBank);
    }
    let distractor_pool = build_distractor_pool(&bank);
    Ok(PreparedQuiz { bank, distractor_pool })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_quiz_builds_bank_and_pool() {
        let raw = "¿Qué es EPP? A) Equipo de protección personal B) Arma C) Radio D) Casco\nANSWER: A";
        let prepared = prepare_quiz(raw, "teoría sin coincidencias").unwrap();
        assert_eq!(prepared.bank.len(), 1);
        assert_eq!(
            prepared.distractor_pool,
            vec!["Equipo de protección personal", "Arma", "Radio", "Casco"]
        );
    }

    #[test]
    fn empty_bank_is_an_error() {
        assert_eq!(prepare_quiz("sin marcador de inicio", ""), Err(QuizError::EmptyBank));
        // A lone malformed block also counts as empty.
        assert_eq!(
            prepare_quiz("¿Bloque sin opciones\nANSWER: A", ""),
            Err(QuizError::EmptyBank)
        );
    }

    #[test]
    fn identical_inputs_produce_identical_output() {
        let raw = "¿Pregunta de radio? A) uno B) dos\nANSWER: B\n¿Otra de ley? A) tres B) cuatro\nANSWER: A";
        let theory = "la radio exige disciplina en el canal.\nla ley regula el porte.";
        let a = prepare_quiz(raw, theory).unwrap();
        let b = prepare_quiz(raw, theory).unwrap();
        assert_eq!(a.bank, b.bank);
        assert_eq!(a.distractor_pool, b.distractor_pool);
    }
}
