use serde::{Deserialize, Serialize};

/// Seniority options offered by the page's level selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentLevel {
    Junior,
    Mid,
    Senior,
}

impl CurrentLevel {
    pub const ALL: [CurrentLevel; 3] = [
        CurrentLevel::Junior,
        CurrentLevel::Mid,
        CurrentLevel::Senior,
    ];

    /// Wire value sent by the page.
    pub fn value(self) -> &'static str {
        match self {
            CurrentLevel::Junior => "junior",
            CurrentLevel::Mid => "mid",
            CurrentLevel::Senior => "senior",
        }
    }

    /// pt-BR label, used in the selector and in the prompt.
    pub fn label(self) -> &'static str {
        match self {
            CurrentLevel::Junior => "Júnior",
            CurrentLevel::Mid => "Pleno",
            CurrentLevel::Senior => "Sênior",
        }
    }

    /// Case-insensitive lookup by wire value (including the `pleno` alias).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "junior" => Some(CurrentLevel::Junior),
            "mid" | "pleno" => Some(CurrentLevel::Mid),
            "senior" => Some(CurrentLevel::Senior),
            _ => None,
        }
    }
}

/// Tags the page suggests for both the current stack and the technologies fields.
pub const SUGGESTED_TECHNOLOGIES: &[&str] = &[
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "TypeScript",
    "JavaScript",
    "Python",
    "Java",
];

/// Body of `POST /api/analyze`.
///
/// Every field is optional at the wire level so `null` and absent values
/// deserialize cleanly; the job description presence check happens in the handler.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub job_description: Option<String>,
    /// Free-form; known levels are rendered with their label.
    pub current_level: Option<String>,
    pub current_stack: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
}

impl AnalysisRequest {
    /// The job description, or `None` when absent or blank.
    pub fn job_description(&self) -> Option<&str> {
        self.job_description
            .as_deref()
            .filter(|jd| !jd.trim().is_empty())
    }
}

/// Body of a successful `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}
