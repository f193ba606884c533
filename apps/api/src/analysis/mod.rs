// Development-plan analysis: request model, prompt assembly, HTTP handler.
// All provider calls go through llm_client — no direct HTTP calls here.

pub mod handlers;
pub mod models;
pub mod prompt;
