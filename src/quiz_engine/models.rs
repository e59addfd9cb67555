use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Question primitives
// ---------------------------------------------------------------------------

/// One answer option of a multiple-choice question.
///
/// `id` is unique within its question: parsed options carry their source
/// letter (`"A"`..`"F"`), padded distractors get `"X<n>"`, placeholder
/// fillers get `"F<n>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

/// A parsed, annotated question from the bank.
///
/// `options` holds whatever the source block declared (1–6 entries); the
/// padding to exactly 4 happens per session, never on the bank itself.
/// `correct_answer_text` is the text of the option flagged correct, or the
/// synthetic `"Respuesta <letter>"` placeholder when the answer letter had
/// no matching option in the block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
    pub correct_answer_text: String,
    pub category: String,
    pub explanation: String,
}

/// A per-session copy of a question: options cloned, padded to exactly 4
/// (still exactly one correct) and shuffled for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionQuestion {
    pub id: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
    pub correct_answer_text: String,
    pub category: String,
    pub explanation: String,
}

// ---------------------------------------------------------------------------
// Configuration tables
// ---------------------------------------------------------------------------

/// One topic-classification rule: a module name plus the keyword set whose
/// presence (as a normalized substring) assigns a question to that module.
/// Rules live in a fixed-order read-only table; first match wins.
#[derive(Debug, Clone, Copy)]
pub struct ModuleRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Pipeline output / errors
// ---------------------------------------------------------------------------

/// Output of [`prepare_quiz`](crate::prepare_quiz): the immutable question
/// bank plus the reusable distractor pool derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedQuiz {
    pub bank: Vec<Question>,
    pub distractor_pool: Vec<String>,
}

/// The one pipeline condition escalated to the caller. Malformed blocks,
/// missing theory matches, and exhausted distractor pools all degrade to
/// best-effort structural results instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// The bank text produced zero questions — either the question start
    /// marker never appears or every block was discarded as malformed.
    #[error("question bank is empty: no usable question blocks in source text")]
    EmptyBank,
}
