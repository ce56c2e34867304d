use std::sync::Arc;

use crate::assessment::evaluator::AnswerEvaluator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Stateless across calls; one instance serves every request.
    pub evaluator: Arc<AnswerEvaluator>,
}
