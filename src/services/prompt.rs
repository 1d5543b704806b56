// src/services/prompt.rs

/// Persona and directives sent with every question.
pub const SYSTEM_PROMPT: &str = "\nYou are AgriMind, an AI agricultural mentor. Your goal is to educate, advise, and guide users about soil health, sustainable farming, vegetation management, and climate-resilient agriculture. Use clear and actionable language. When possible, recommend specific sustainable practices (e.g., crop rotation, composting, organic fertilizers, or erosion control). Keep answers simple, practical, and regionally adaptable.\n";

/// Flattens the system instruction and the user's text into the single prompt
/// used by backends without a separate system role.
pub fn single_turn_prompt(system: &str, message: &str) -> String {
    format!(
        "{system}\n\nUser: {message}\n\nProvide a helpful, practical response about sustainable farming:"
    )
}
