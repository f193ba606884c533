use anyhow::Context;
use askama::Template;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Redirect,
    Json,
};
use serde::Serialize;

use crate::analysis::handlers::{accept_body, run_analysis};
use crate::analysis::models::AnalysisRequest;
use crate::errors::AppError;
use crate::page::markdown::render_markdown;
use crate::page::view::{AnalysisPage, ResultPlaceholder};
use crate::state::AppState;

/// What the page receives: the raw analysis plus the HTML for the result pane.
#[derive(Debug, Serialize)]
pub struct PageAnalysisResponse {
    pub analysis: String,
    pub html: String,
}

/// GET /
pub async fn handle_root() -> Redirect {
    Redirect::to("/analysis")
}

/// GET /analysis
pub async fn handle_page() -> Result<AnalysisPage, AppError> {
    let page = AnalysisPage::new().context("building analysis page")?;
    Ok(page)
}

/// POST /analysis
///
/// Same body and failure modes as `POST /api/analyze`; the success body
/// additionally carries the result pane HTML. Blank text gets the placeholder.
pub async fn handle_page_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<PageAnalysisResponse>, AppError> {
    let request = accept_body(payload)?;
    let analysis = run_analysis(state.provider.as_ref(), &request).await?;

    let html = if analysis.trim().is_empty() {
        ResultPlaceholder
            .render()
            .context("rendering result placeholder")?
    } else {
        render_markdown(&analysis)
    };

    Ok(Json(PageAnalysisResponse { analysis, html }))
}
