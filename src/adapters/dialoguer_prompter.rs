use dialoguer::Input;
use dialoguer::console::Term;

use crate::domain::{AppError, meets_minimum_length, minimum_length_message};
use crate::ports::Prompter;

/// Terminal prompter backed by dialoguer's line editor.
///
/// Only usable when both stdin and stdout are terminals. Questions and
/// diagnostics are drawn on stdout.
#[derive(Debug)]
pub struct DialoguerPrompter {
    term: Term,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn ask_with_minimum_length(
        &mut self,
        question: &str,
        min_length: usize,
    ) -> Result<String, AppError> {
        // dialoguer's theme appends its own separator.
        let prompt = question.trim_end().trim_end_matches(':');

        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(move |input: &String| -> Result<(), String> {
                if meets_minimum_length(input, min_length) {
                    Ok(())
                } else {
                    Err(minimum_length_message(min_length))
                }
            })
            .interact_text_on(&self.term)
            .map_err(|e| AppError::prompt_error(format!("Failed to read answer: {}", e)))?;

        Ok(answer.trim().to_string())
    }
}
