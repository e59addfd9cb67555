//! Distractor pool — every option text seen across the bank, deduplicated.
//!
//! The pool feeds session-time option padding: questions with fewer than 4
//! options borrow wrong answers from here.

use std::collections::HashSet;

use crate::quiz_engine::models::Question;
use crate::quiz_engine::normalize::normalize;

/// Collect the unique option texts of `questions`, in first-seen bank order.
///
/// The dedup key is the normalized text, so `"Casco"` and `"casco "` count
/// as one entry; the *original* spelling of the first occurrence is what
/// goes into the pool. Texts that normalize to empty are skipped.
pub fn build_distractor_pool(questions: &[Question]) -> Vec<String> {
    let mut pool = Vec::new();
    let mut seen = HashSet::new();
    for question in questions {
        for option in &question.options {
            let key = normalize(&option.text);
            if key.is_empty() || !seen.insert(key) {
                continue;
            }
            pool.push(option.text.clone());
        }
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::AnswerOption;

    fn question(id: &str, option_texts: &[&str]) -> Question {
        Question {
            id: id.to_string(),
            text: format!("pregunta {id}"),
            options: option_texts
                .iter()
                .enumerate()
                .map(|(i, text)| AnswerOption {
                    id: ((b'A' + i as u8) as char).to_string(),
                    text: text.to_string(),
                    is_correct: i == 0,
                })
                .collect(),
            correct_answer_text: option_texts[0].to_string(),
            category: "Banco Nivel II".to_string(),
            explanation: String::new(),
        }
    }

    #[test]
    fn pool_preserves_first_seen_order() {
        let bank = [
            question("q-0", &["Casco", "Chaleco"]),
            question("q-1", &["Radio", "Cinto"]),
        ];
        assert_eq!(build_distractor_pool(&bank), vec!["Casco", "Chaleco", "Radio", "Cinto"]);
    }

    #[test]
    fn duplicates_dedup_on_normalized_text() {
        let bank = [
            question("q-0", &["Casco", "CHALECO Balístico"]),
            question("q-1", &["chaleco balistico", "Radio"]),
        ];
        let pool = build_distractor_pool(&bank);
        // The first-seen original spelling survives.
        assert_eq!(pool, vec!["Casco", "CHALECO Balístico", "Radio"]);
    }

    #[test]
    fn texts_normalizing_to_empty_are_skipped() {
        let bank = [question("q-0", &["¿?", "Casco", "  "])];
        assert_eq!(build_distractor_pool(&bank), vec!["Casco"]);
    }

    #[test]
    fn pool_has_no_duplicate_normalized_entries() {
        let bank = [
            question("q-0", &["uno", "Dos", "tres"]),
            question("q-1", &["DOS", "tres", "cuatro"]),
        ];
        let pool = build_distractor_pool(&bank);
        let keys: Vec<String> = pool.iter().map(|t| normalize(t)).collect();
        let unique: HashSet<&String> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
    }
}
