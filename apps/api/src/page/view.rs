//! Askama views for the analysis page.

use askama::Template;

use crate::analysis::models::{CurrentLevel, SUGGESTED_TECHNOLOGIES};
use crate::errors::MSG_JOB_DESCRIPTION_REQUIRED;
use crate::page::tour;

/// Full page: form, result pane, loading overlay and tour.
#[derive(Template)]
#[template(path = "analysis.html")]
pub struct AnalysisPage {
    levels: &'static [CurrentLevel],
    suggestions: &'static [&'static str],
    /// Already safe for a `<script>` element; rendered unescaped.
    tour_steps_json: String,
    msg_job_description_required: &'static str,
}

impl AnalysisPage {
    pub fn new() -> Result<Self, serde_json::Error> {
        Ok(Self {
            levels: &CurrentLevel::ALL,
            suggestions: SUGGESTED_TECHNOLOGIES,
            tour_steps_json: tour::steps_json()?,
            msg_job_description_required: MSG_JOB_DESCRIPTION_REQUIRED,
        })
    }
}

/// What the result pane shows while there is no analysis text.
#[derive(Template)]
#[template(path = "partials/result_placeholder.html")]
pub struct ResultPlaceholder;
