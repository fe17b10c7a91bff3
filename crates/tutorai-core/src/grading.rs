//! Short-answer grading
//!
//! Scores a free-text answer by counting how many rubric keywords appear in
//! it. Matching is a case-insensitive substring test, so partial words count
//! ("add" matches "addition").

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Score returned when no rubric keywords are supplied
pub const DEFAULT_SCORE: f64 = 0.5;

const FEEDBACK_PREFIX: &str = "Good start.";

/// Short-answer grading request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortAnswerPayload {
    /// Question shown to the student
    pub prompt: String,

    /// Student's answer text
    pub answer: String,

    /// Keywords a complete answer should mention
    #[serde(default)]
    pub rubric_keywords: Vec<String>,
}

/// Grading outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    /// Fraction of keywords found, in [0, 1], two decimals
    pub score: f64,

    /// Human-readable feedback
    pub feedback: String,
}

/// Grade a short answer against its rubric keywords.
pub fn grade_short_answer(payload: &ShortAnswerPayload) -> GradeResult {
    let keywords = &payload.rubric_keywords;

    if keywords.is_empty() {
        debug!("No rubric keywords supplied, using default score");
        return GradeResult {
            score: DEFAULT_SCORE,
            feedback: FEEDBACK_PREFIX.to_string(),
        };
    }

    let hits = count_hits(&payload.answer, keywords);
    let ratio = (hits as f64 / keywords.len() as f64).min(1.0);

    debug!(hits, total = keywords.len(), "Graded short answer");

    GradeResult {
        score: round_to_hundredths(ratio),
        feedback: format!("{} Mention: {}", FEEDBACK_PREFIX, keywords.join(", ")),
    }
}

/// Number of keywords whose lower-cased form occurs in the lower-cased answer
pub fn count_hits(answer: &str, keywords: &[String]) -> usize {
    let answer = answer.to_lowercase();
    keywords
        .iter()
        .filter(|kw| answer.contains(&kw.to_lowercase()))
        .count()
}

/// Round to two decimals on the exact binary value (1/40 becomes 0.03)
fn round_to_hundredths(value: f64) -> f64 {
    // `{:.2}` rounds the exact decimal expansion of the binary value
    format!("{:.2}", value).parse().unwrap_or(value)
}
