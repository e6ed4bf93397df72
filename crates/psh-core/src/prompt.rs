//! Prompt text derivation.
//!
//! The prompt reflects the interpreter language currently active in the
//! remote session (`js> `, `ruby> `, `R> `). The service reports language
//! switches in its replies and the client recomputes the prompt from them.

/// Prompt shown before any reply has named a language.
pub const DEFAULT_PROMPT: &str = "js> ";

/// Banner shown once the terminal comes up.
pub const GREETING: &str = "Polyglot Shell (type 'js', 'ruby' or 'R' to switch languages)";

/// Build the prompt for an interpreter language: `"<language>> "`.
pub fn prompt_for_language(language: &str) -> String {
    format!("{language}> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_language_plus_marker() {
        assert_eq!(prompt_for_language("ruby"), "ruby> ");
        assert_eq!(prompt_for_language("R"), "R> ");
    }

    #[test]
    fn default_prompt_is_the_js_prompt() {
        assert_eq!(DEFAULT_PROMPT, prompt_for_language("js"));
    }
}
