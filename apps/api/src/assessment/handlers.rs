//! Axum route handlers for the Assessment API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::assessment::evaluator::EvaluationRequest;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AssessmentStart {
    pub career_goal: String,
}

#[derive(Debug, Serialize)]
pub struct AssessmentStartResponse {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct AssessmentMessage {
    pub message: String,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct AssessmentReply {
    pub response: String,
    pub skill_scores: SkillScores,
}

#[derive(Debug, Serialize)]
pub struct SkillScores {
    pub interview: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /assessment/start
///
/// Opens an assessment with a canned greeting. Sessions are not stored.
pub async fn handle_start(Json(data): Json<AssessmentStart>) -> Json<AssessmentStartResponse> {
    let session_id = format!("session-{}", Uuid::new_v4());
    info!(%session_id, career_goal = %data.career_goal, "Assessment started");

    Json(AssessmentStartResponse {
        session_id,
        message: format!(
            "Hi! Let's start your career assessment. Tell me about your experience with {}",
            data.career_goal
        ),
    })
}

/// POST /assessment/message
///
/// Scores one candidate answer. Always 200: evaluator failures come back as the
/// fallback feedback/score rather than an error.
pub async fn handle_message(
    State(state): State<AppState>,
    Json(data): Json<AssessmentMessage>,
) -> Json<AssessmentReply> {
    info!(session_id = %data.session_id, "Evaluating assessment answer");

    let result = state
        .evaluator
        .evaluate(EvaluationRequest::from(data.message.as_str()))
        .await;

    Json(AssessmentReply {
        response: result.feedback,
        skill_scores: SkillScores {
            interview: result.skill_score,
        },
    })
}
