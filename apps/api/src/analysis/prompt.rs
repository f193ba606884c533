//! Prompt assembly — a pure function from the request to the prompt string.

use crate::analysis::models::{AnalysisRequest, CurrentLevel};
use crate::llm_client::prompts::{
    CLOSING_INSTRUCTION, CURRENT_LEVEL_CLAUSE, CURRENT_STACK_CLAUSE, JOB_DESCRIPTION_CLAUSE,
    LIST_SEPARATOR, ROLE_STATEMENT, TECHNOLOGIES_CLAUSE,
};

/// Builds the single instruction sent to the provider.
///
/// Clause order is fixed: role, job description, level, current stack,
/// technologies, closing instruction. Optional clauses whose field is absent
/// or empty are dropped, and the rest are joined by single spaces.
pub fn build_prompt(request: &AnalysisRequest) -> String {
    let job_description = request.job_description.as_deref().unwrap_or_default();

    let clauses = [
        Some(ROLE_STATEMENT.to_string()),
        Some(JOB_DESCRIPTION_CLAUSE.replace("{job_description}", job_description)),
        level_text(request.current_level.as_deref())
            .map(|level| CURRENT_LEVEL_CLAUSE.replace("{current_level}", &level)),
        join_tags(request.current_stack.as_deref())
            .map(|stack| CURRENT_STACK_CLAUSE.replace("{current_stack}", &stack)),
        join_tags(request.technologies.as_deref())
            .map(|techs| TECHNOLOGIES_CLAUSE.replace("{technologies}", &techs)),
        Some(CLOSING_INSTRUCTION.to_string()),
    ];

    clauses.into_iter().flatten().collect::<Vec<_>>().join(" ")
}

/// Known levels render with their label; anything else passes through verbatim.
fn level_text(raw: Option<&str>) -> Option<String> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    Some(match CurrentLevel::parse(raw) {
        Some(level) => level.label().to_string(),
        None => raw.to_string(),
    })
}

/// Comma-joined tags in their original order, skipping blanks. `None` when nothing is left.
fn join_tags(tags: Option<&[String]>) -> Option<String> {
    let tags: Vec<&str> = tags
        .unwrap_or_default()
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();

    if tags.is_empty() {
        None
    } else {
        Some(tags.join(LIST_SEPARATOR))
    }
}
