//! Guided walkthrough: an explicit table from step index to element id.
//!
//! The page resolves each `target` with `document.getElementById` when the
//! step is shown. If the element is not mounted, the step is shown as a
//! centered popover with no anchor.

use serde::Serialize;

pub const CURRENT_LEVEL_ID: &str = "current-level";
pub const CURRENT_STACK_ID: &str = "current-stack";
pub const TECHNOLOGIES_ID: &str = "technologies";
pub const JOB_DESCRIPTION_ID: &str = "job-description";
pub const ANALYZE_BUTTON_ID: &str = "analyze-button";
pub const ANALYSIS_RESULT_ID: &str = "analysis-result";

const NEXT: &str = "Próximo";
const PREV: &str = "Anterior";
const FINISH: &str = "Finalizar";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TourStep {
    pub target: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub next_label: &'static str,
    /// `None` on the first step.
    pub prev_label: Option<&'static str>,
}

pub const TOUR_STEPS: [TourStep; 6] = [
    TourStep {
        target: CURRENT_LEVEL_ID,
        title: "Nível Atual",
        description: "Selecione seu nível atual.",
        next_label: NEXT,
        prev_label: None,
    },
    TourStep {
        target: CURRENT_STACK_ID,
        title: "Stack Atual",
        description: "Escolha ou insira suas tecnologias.",
        next_label: NEXT,
        prev_label: Some(PREV),
    },
    TourStep {
        target: TECHNOLOGIES_ID,
        title: "Tecnologias Dominadas",
        description: "Liste as tecnologias que você domina.",
        next_label: NEXT,
        prev_label: Some(PREV),
    },
    TourStep {
        target: JOB_DESCRIPTION_ID,
        title: "Descrição da Vaga",
        description: "Cole a descrição da vaga aqui.",
        next_label: NEXT,
        prev_label: Some(PREV),
    },
    TourStep {
        target: ANALYZE_BUTTON_ID,
        title: "Botão Analisar Vaga",
        description: "Clique aqui para analisar a vaga.",
        next_label: NEXT,
        prev_label: Some(PREV),
    },
    TourStep {
        target: ANALYSIS_RESULT_ID,
        title: "Resultado da Análise",
        description: "Aqui será exibida a análise detalhada.",
        next_label: FINISH,
        prev_label: Some(PREV),
    },
];

/// Steps as a JSON array, safe to embed inside a `<script>` element.
pub fn steps_json() -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(&TOUR_STEPS)?;
    Ok(json.replace("</", "<\\/"))
}
