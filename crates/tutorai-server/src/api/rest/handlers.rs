//! API endpoint handlers
//!
//! Each handler decodes its payload through `JsonExtractor`, applies the
//! matching rule from `tutorai_core` and returns the result as JSON.

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, http::Uri, Json};
use tracing::info;
use tutorai_core::{
    generate_questions as generate, grade_short_answer as grade, recommend_next as recommend,
    GradeResult, QuestionGenerationPayload, QuestionGenerationResult, RecommendPayload,
    RecommendResult, ShortAnswerPayload,
};

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Service metadata endpoint
pub(super) async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        name: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Short-answer grading endpoint
pub(super) async fn grade_short_answer(
    JsonExtractor(payload): JsonExtractor<ShortAnswerPayload>,
) -> Json<GradeResult> {
    info!(
        "Grading short answer ({} chars) against {} rubric keywords",
        payload.answer.chars().count(),
        payload.rubric_keywords.len()
    );

    Json(grade(&payload))
}

/// Next-lesson recommendation endpoint
pub(super) async fn recommend_next(
    JsonExtractor(payload): JsonExtractor<RecommendPayload>,
) -> Json<RecommendResult> {
    let result = recommend(&payload);

    info!(
        "Recommended lesson {} for student {}",
        result.next_lesson_id, payload.student_id
    );

    Json(result)
}

/// Question generation endpoint
#[axum::debug_handler]
pub(super) async fn generate_questions(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<QuestionGenerationPayload>,
) -> Result<Json<QuestionGenerationResult>, ServerError> {
    if let Some(limit) = state.max_questions {
        if exceeds_limit(payload.num_questions, limit) {
            return Err(ServerError::Validation(format!(
                "num_questions must not exceed {}, got {}",
                limit, payload.num_questions
            )));
        }
    }

    let result = generate(&payload);

    info!(
        "Generated {} questions for topic '{}' (skill_tag={})",
        result.total_generated(),
        payload.topic,
        payload.skill_tag
    );

    Ok(Json(result))
}

/// Whether `num_questions` is above `limit`; limits past `i64::MAX` saturate
pub(super) fn exceeds_limit(num_questions: i64, limit: usize) -> bool {
    num_questions > i64::try_from(limit).unwrap_or(i64::MAX)
}

/// Fallback for unmatched routes
pub(super) async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}
