//! Next-lesson recommendation
//!
//! A single-threshold rule on the student's fractions mastery.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Skill that gates the recommendation
pub const GATING_SKILL: &str = "fractions";

/// Mastery percentage at or above which enrichment is recommended
pub const MASTERY_THRESHOLD: f64 = 70.0;

/// Fractions mastery assumed when the request carries no mastery data
pub const DEFAULT_FRACTIONS_MASTERY: f64 = 62.0;

/// Lesson "Fraction Addition"
pub const REMEDIATION_LESSON_ID: i64 = 2;

/// Lesson "Fraction Comparison"
pub const ENRICHMENT_LESSON_ID: i64 = 3;

const REMEDIATION_REASON: &str =
    "Fractions mastery below 70% → recommend remediation: Fraction Addition";
const ENRICHMENT_REASON: &str = "Mastery high → recommend enrichment: Fraction Comparison";

/// Recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendPayload {
    pub student_id: i64,

    /// Skill name to mastery percentage
    #[serde(default)]
    pub mastery: Option<HashMap<String, f64>>,
}

/// Recommended lesson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendResult {
    pub next_lesson_id: i64,
    pub reason: String,
}

/// Pick the next lesson for a student.
///
/// An absent or empty mastery map falls back to `{fractions: 62}`. Within a
/// supplied map, a missing `fractions` entry reads as 0.
pub fn recommend_next(payload: &RecommendPayload) -> RecommendResult {
    let fractions = match payload.mastery.as_ref().filter(|m| !m.is_empty()) {
        Some(mastery) => mastery.get(GATING_SKILL).copied().unwrap_or(0.0),
        None => DEFAULT_FRACTIONS_MASTERY,
    };

    debug!(
        student_id = payload.student_id,
        fractions, "Evaluating next lesson"
    );

    if fractions < MASTERY_THRESHOLD {
        RecommendResult {
            next_lesson_id: REMEDIATION_LESSON_ID,
            reason: REMEDIATION_REASON.to_string(),
        }
    } else {
        RecommendResult {
            next_lesson_id: ENRICHMENT_LESSON_ID,
            reason: ENRICHMENT_REASON.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_mastery(entries: &[(&str, f64)]) -> RecommendPayload {
        RecommendPayload {
            student_id: 1,
            mastery: Some(
                entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), *v))
                    .collect(),
            ),
        }
    }

    #[test]
    fn test_missing_mastery_defaults_to_remediation() {
        let result = recommend_next(&RecommendPayload {
            student_id: 7,
            mastery: None,
        });
        assert_eq!(result.next_lesson_id, REMEDIATION_LESSON_ID);
        assert_eq!(result.reason, REMEDIATION_REASON);
    }

    #[test]
    fn test_high_mastery_enrichment() {
        let result = recommend_next(&with_mastery(&[("fractions", 85.0)]));
        assert_eq!(result.next_lesson_id, ENRICHMENT_LESSON_ID);
        assert_eq!(result.reason, ENRICHMENT_REASON);
    }

    #[test]
    fn test_threshold_is_inclusive_for_enrichment() {
        assert_eq!(recommend_next(&with_mastery(&[("fractions", 70.0)])).next_lesson_id, 3);
        assert_eq!(recommend_next(&with_mastery(&[("fractions", 69.99)])).next_lesson_id, 2);
    }

    #[test]
    fn test_other_skills_are_ignored() {
        let result = recommend_next(&with_mastery(&[("algebra", 99.0), ("geometry", 95.0)]));
        assert_eq!(result.next_lesson_id, REMEDIATION_LESSON_ID);
    }

    #[test]
    fn test_empty_mastery_behaves_like_missing() {
        let result = recommend_next(&with_mastery(&[]));
        assert_eq!(result.next_lesson_id, REMEDIATION_LESSON_ID);
    }
}
