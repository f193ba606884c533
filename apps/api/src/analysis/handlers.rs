//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{debug, info, warn};

use crate::analysis::models::{AnalysisRequest, AnalysisResponse};
use crate::analysis::prompt::build_prompt;
use crate::errors::{AppError, MSG_INVALID_BODY, MSG_JOB_DESCRIPTION_REQUIRED};
use crate::llm_client::ChatCompletion;
use crate::state::AppState;

/// Unwraps a JSON body, turning extractor rejections into a 400 `{error}`.
pub fn accept_body(
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<AnalysisRequest, AppError> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            warn!("Rejected analysis body: {}", rejection.body_text());
            Err(AppError::Validation(MSG_INVALID_BODY.to_string()))
        }
    }
}

/// Validates, builds the prompt and makes exactly one provider call.
/// Shared by the API route and the page route.
pub async fn run_analysis(
    provider: &dyn ChatCompletion,
    request: &AnalysisRequest,
) -> Result<String, AppError> {
    if request.job_description().is_none() {
        return Err(AppError::Validation(
            MSG_JOB_DESCRIPTION_REQUIRED.to_string(),
        ));
    }

    let prompt = build_prompt(request);
    debug!("Prompt built ({} chars), calling {}", prompt.len(), provider.model());

    let analysis = provider.complete(&prompt).await?;
    info!("Analysis completed ({} chars)", analysis.len());

    Ok(analysis)
}

/// POST /api/analyze
///
/// Returns `{analysis}` with the first completion choice's content.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let request = accept_body(payload)?;
    let analysis = run_analysis(state.provider.as_ref(), &request).await?;
    Ok(Json(AnalysisResponse { analysis }))
}

/// Fallback for every method other than POST on analysis routes.
pub async fn method_not_allowed() -> Result<(), AppError> {
    Err(AppError::MethodNotAllowed)
}
