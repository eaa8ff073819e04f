use std::io::{self, BufRead, Write};

use crate::domain::{AppError, meets_minimum_length, minimum_length_message};
use crate::ports::Prompter;

/// Line-oriented prompter over any reader/writer pair.
///
/// Used for piped stdin and in tests; the question and the length diagnostic
/// are written to `output`, answers are read one line at a time from `input`.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter and return the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self, question: &str) -> Result<String, AppError> {
        write!(self.output, "{}", question)
            .and_then(|_| self.output.flush())
            .map_err(|e| AppError::prompt_error(format!("Failed to write prompt: {}", e)))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| AppError::prompt_error(format!("Failed to read answer: {}", e)))?;

        if read == 0 {
            return Err(AppError::prompt_error(format!(
                "input ended before an answer was given to '{}'",
                question.trim_end().trim_end_matches(':')
            )));
        }

        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask_with_minimum_length(
        &mut self,
        question: &str,
        min_length: usize,
    ) -> Result<String, AppError> {
        loop {
            let answer = self.read_answer(question)?;
            if meets_minimum_length(&answer, min_length) {
                return Ok(answer);
            }
            writeln!(self.output, "{}", minimum_length_message(min_length))
                .map_err(|e| AppError::prompt_error(format!("Failed to write prompt: {}", e)))?;
        }
    }
}
