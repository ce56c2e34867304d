//! Answer Evaluator: turns a free-text interview answer into feedback and a normalized skill score.
//!
//! Pipeline: build prompt → one completion call → line-marker parse → normalize.
//! `evaluate` never fails: a failed completion call yields `EvaluationResult::fallback()`,
//! and a completion missing a field falls back per field (first line / default score).

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::assessment::prompts::build_evaluation_prompt;
use crate::llm_client::{CompletionClient, SamplingParams};

pub const FALLBACK_FEEDBACK: &str =
    "(Fallback) Good answer! For a deeper score breakdown, connect to OpenAI.";

/// Raw 0–10 score used when the completion has no usable score line.
pub const DEFAULT_RAW_SCORE: f64 = 7.0;

const FEEDBACK_MARKER: &str = "Feedback:";
const SCORE_MARKERS: [&str; 2] = ["Skill Score:", "Skill score:"];

/// A single candidate answer to evaluate. Lives for one request.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationRequest<'a> {
    pub answer_text: &'a str,
}

impl<'a> From<&'a str> for EvaluationRequest<'a> {
    fn from(answer_text: &'a str) -> Self {
        Self { answer_text }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub feedback: String,
    /// Nominally 0.0–1.0. Not clamped: a model answering outside 0–10 leaks through.
    pub skill_score: f64,
}

impl EvaluationResult {
    pub fn fallback() -> Self {
        Self {
            feedback: FALLBACK_FEEDBACK.to_string(),
            skill_score: normalize_score(DEFAULT_RAW_SCORE),
        }
    }

    fn from_raw(feedback: String, raw_score: f64) -> Self {
        Self {
            feedback,
            skill_score: normalize_score(raw_score),
        }
    }
}

/// Why a field of the completion was defaulted instead of read from the text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldFallback {
    #[error("no 'Feedback:' line; using the first line as feedback")]
    MissingFeedbackMarker,

    #[error("no 'Skill Score:' line; using the default score")]
    MissingScoreMarker,

    #[error("score text {0:?} is not a finite number; using the default score")]
    InvalidScore(String),
}

/// Outcome of decoding raw completion text.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedCompletion {
    /// Both markers found and the score parsed.
    Parsed { feedback: String, raw_score: f64 },
    /// At least one field had to be defaulted.
    PartialDefault {
        feedback: String,
        raw_score: f64,
        fallbacks: Vec<FieldFallback>,
    },
    /// Nothing but whitespace.
    Unparseable,
}

/// Decodes the `Feedback:` / `Skill Score:` lines out of a completion.
///
/// The first line containing `Feedback:` supplies the feedback (marker removed, trimmed);
/// without one, the first line of the text is used. The first line containing
/// `Skill Score:` or `Skill score:` supplies the score: the text after its last `:`,
/// trimmed and parsed as a float. A missing line, unparsable text, or a non-finite
/// value all default to `DEFAULT_RAW_SCORE`.
pub fn parse_completion(raw: &str) -> ParsedCompletion {
    if raw.trim().is_empty() {
        return ParsedCompletion::Unparseable;
    }

    let mut fallbacks = Vec::new();

    let feedback = match raw.lines().find(|line| line.contains(FEEDBACK_MARKER)) {
        Some(line) => line.replace(FEEDBACK_MARKER, "").trim().to_string(),
        None => {
            fallbacks.push(FieldFallback::MissingFeedbackMarker);
            raw.lines().next().unwrap_or_default().trim().to_string()
        }
    };

    let score_line = raw
        .lines()
        .find(|line| SCORE_MARKERS.iter().any(|marker| line.contains(marker)));

    let raw_score = match score_line {
        Some(line) => {
            let segment = line.rsplit(':').next().unwrap_or_default().trim();
            match segment.parse::<f64>() {
                Ok(score) if score.is_finite() => score,
                _ => {
                    fallbacks.push(FieldFallback::InvalidScore(segment.to_string()));
                    DEFAULT_RAW_SCORE
                }
            }
        }
        None => {
            fallbacks.push(FieldFallback::MissingScoreMarker);
            DEFAULT_RAW_SCORE
        }
    };

    if fallbacks.is_empty() {
        ParsedCompletion::Parsed {
            feedback,
            raw_score,
        }
    } else {
        ParsedCompletion::PartialDefault {
            feedback,
            raw_score,
            fallbacks,
        }
    }
}

/// Maps a raw 0–10 score onto 0.0–1.0.
pub fn normalize_score(raw_score: f64) -> f64 {
    raw_score / 10.0
}

/// Scores interview answers through a completion backend.
///
/// Holds only immutable configuration, so one instance is shared across
/// concurrent requests behind an `Arc`.
pub struct AnswerEvaluator {
    completion: Arc<dyn CompletionClient>,
    params: SamplingParams,
}

impl AnswerEvaluator {
    pub fn new(completion: Arc<dyn CompletionClient>, params: SamplingParams) -> Self {
        Self { completion, params }
    }

    pub async fn evaluate(&self, request: EvaluationRequest<'_>) -> EvaluationResult {
        let prompt = build_evaluation_prompt(request.answer_text);

        let raw = match self.completion.complete(&prompt, &self.params).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Completion call failed, returning fallback evaluation: {e}");
                return EvaluationResult::fallback();
            }
        };

        match parse_completion(&raw) {
            ParsedCompletion::Parsed {
                feedback,
                raw_score,
            } => {
                debug!("Parsed evaluation: raw_score={raw_score}");
                EvaluationResult::from_raw(feedback, raw_score)
            }
            ParsedCompletion::PartialDefault {
                feedback,
                raw_score,
                fallbacks,
            } => {
                for fallback in &fallbacks {
                    warn!("Evaluation field defaulted: {fallback}");
                }
                EvaluationResult::from_raw(feedback, raw_score)
            }
            ParsedCompletion::Unparseable => {
                warn!("Completion text was blank, returning fallback evaluation");
                EvaluationResult::fallback()
            }
        }
    }
}
