use crate::domain::AppError;

/// Port for asking the user questions.
pub trait Prompter {
    /// Ask `question` until the trimmed answer has at least `min_length` characters.
    ///
    /// Returns the trimmed answer. Short answers are reported to the user and
    /// the question is asked again; they never surface as errors.
    fn ask_with_minimum_length(&mut self, question: &str, min_length: usize)
    -> Result<String, AppError>;
}
