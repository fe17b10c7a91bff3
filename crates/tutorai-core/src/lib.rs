//! TutorAI Core - deterministic rules behind the TutorAI service
//!
//! This crate holds the request/response types and the pure functions that
//! the HTTP layer exposes:
//! - Short-answer grading against rubric keywords
//! - Next-lesson recommendation from a mastery map
//! - Templated practice-question generation keyed by skill tag
//!
//! Nothing here performs I/O or keeps state between calls.

pub mod grading;
pub mod questions;
pub mod recommend;

// Re-export commonly used types
pub use grading::{grade_short_answer, GradeResult, ShortAnswerPayload};
pub use questions::{
    generate_questions, GeneratedQuestion, QuestionGenerationPayload, QuestionGenerationResult,
    QuestionKind, SkillTag,
};
pub use recommend::{recommend_next, RecommendPayload, RecommendResult};
