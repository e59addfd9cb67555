//! # quiz_bank_gen
//!
//! A fully offline, deterministic quiz-bank compiler and session generator.
//!
//! The library turns two plain-text documents — a raw question bank and a
//! theory reference — into a validated collection of multiple-choice
//! questions, each tagged with a topic category and an explanatory theory
//! excerpt, plus a pool of reusable wrong-answer texts. From that static
//! collection it derives randomized playable sessions: shuffled question
//! order, options padded to exactly four, shuffled option order.
//!
//! ## How it works
//!
//! 1. Call [`prepare_quiz`] with the raw bank text and the theory text. The
//!    parser scans `¿ ... ANSWER: <letter>` blocks, splits out the lettered
//!    options, categorizes each question against the fixed module table, and
//!    attaches the closest theory line as its explanation. A derived
//!    distractor pool collects every distinct option text seen in the bank.
//! 2. Call [`start_session`] with the bank, the pool, and a [`RandomSource`]
//!    — each call yields an independent permutation with freshly padded and
//!    shuffled options.
//! 3. [`min_score`] gives the passing threshold (80%, rounded up) for the
//!    results screen.
//!
//! ## Key features
//!
//! - **Pure and deterministic**: the bank and pool are a pure function of
//!   the two source texts; the only nondeterminism is the injected RNG, and
//!   [`SeededRandom`] makes sessions reproducible for tests.
//! - **Permissive parsing**: malformed blocks are dropped, never fatal; only
//!   a bank with zero questions is escalated as [`QuizError::EmptyBank`].
//! - **Unbiased randomness**: both RNG backends produce integers below N via
//!   rejection sampling, never plain modulo.
//!
//! ## Quick start
//!
//! ```rust
//! use quiz_bank_gen::{min_score, prepare_quiz, start_session, OsRandom};
//!
//! let bank_text = "¿Qué es EPP? A) Equipo de protección personal B) Arma C) Radio D) Casco\nANSWER: A";
//! let theory_text = "El equipo de proteccion personal resguarda al guardia.";
//!
//! let prepared = prepare_quiz(bank_text, theory_text).expect("bank has questions");
//! let session = start_session(&prepared.bank, &prepared.distractor_pool, &mut OsRandom);
//!
//! for sq in &session {
//!     println!("[{}] {}", sq.category, sq.text);
//!     for opt in &sq.options {
//!         println!("  {}) {}", opt.id, opt.text);
//!     }
//! }
//! println!("passing score: {}/{}", min_score(session.len()), session.len());
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `quiz_bank_gen::prepare_quiz`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    build_distractor_pool, build_question_bank, categorize, extract_keywords,
    find_theory_snippet, lowercase_preserving_offsets, min_score, normalize,
    prepare_quiz, start_session, AnswerOption, ModuleRule, OsRandom,
    PreparedQuiz, Question, QuizError, RandomSource, SeededRandom,
    SessionQuestion, FALLBACK_CATEGORY, MODULE_RULES, SESSION_OPTION_COUNT,
    STOP_WORDS, THEORY_FALLBACK,
};
