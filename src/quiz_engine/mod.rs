//! Core quiz engine — bank parsing, annotation, and session randomization.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | All shared types: options, questions, rules, pipeline output |
//! | `normalize`   | Text canonicalization and keyword extraction |
//! | `parser`      | Splits raw bank text into structured questions |
//! | `rules`       | Topic module table and first-match categorization |
//! | `theory`      | Snippet lookup in the theory text for explanations |
//! | `distractors` | Deduplicated pool of reusable wrong-answer texts |
//! | `rng`         | `RandomSource` trait with OS-crypto and seeded backends |
//! | `session`     | Per-session shuffle, option padding, passing score |
//! | `pipeline`    | Single entry point `prepare_quiz()` |

pub mod distractors;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod pipeline;
pub mod rng;
pub mod rules;
pub mod session;
pub mod theory;

// Re-export the public API surface so callers can use
// `quiz_engine::prepare_quiz` without reaching into sub-modules.
pub use distractors::build_distractor_pool;
pub use models::{AnswerOption, ModuleRule, PreparedQuiz, Question, QuizError, SessionQuestion};
pub use normalize::{extract_keywords, normalize, STOP_WORDS};
pub use parser::build_question_bank;
pub use pipeline::prepare_quiz;
pub use rng::{OsRandom, RandomSource, SeededRandom};
pub use rules::{categorize, FALLBACK_CATEGORY, MODULE_RULES};
pub use session::{min_score, start_session, SESSION_OPTION_COUNT};
pub use theory::{find_theory_snippet, lowercase_preserving_offsets, THEORY_FALLBACK};
