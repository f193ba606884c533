// Fixed prompt fragments for the development-plan analysis.
// The clause templates are filled by `analysis::prompt::build_prompt`.

/// Opening role/purpose statement.
pub const ROLE_STATEMENT: &str = "Você é um assistente útil com o intuito de ajudar \
    desenvolvedores a traçar um plano de desenvolvimento com base em descrições de vagas.";

/// Replace `{job_description}` before sending.
pub const JOB_DESCRIPTION_CLAUSE: &str = "Aqui está a descrição da vaga: {job_description}.";

/// Replace `{current_level}` before sending.
pub const CURRENT_LEVEL_CLAUSE: &str = "O nível atual do candidato é: {current_level}.";

/// Replace `{current_stack}` before sending.
pub const CURRENT_STACK_CLAUSE: &str = "O stack atual do candidato é: {current_stack}.";

/// Replace `{technologies}` before sending.
pub const TECHNOLOGIES_CLAUSE: &str = "Tecnologias dominadas pelo candidato: {technologies}.";

/// Closing instruction. Pins the response language.
pub const CLOSING_INSTRUCTION: &str = "Com base nessas informações, forneça um plano de \
    desenvolvimento detalhado para o candidato. Responda sempre em Português do Brasil";

/// Separator for tag lists inside a clause.
pub const LIST_SEPARATOR: &str = ", ";
