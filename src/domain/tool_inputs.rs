use super::slug::slugify;

/// A question asked once during scaffolding, with its acceptance threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputField {
    /// Placeholder key substituted in the config file.
    pub key: &'static str,
    pub question: &'static str,
    /// Minimum length of the trimmed answer, in characters.
    pub min_length: usize,
}

pub const TOOL_DISPLAY_NAME: InputField = InputField {
    key: "TOOL_DISPLAY_NAME",
    question: "Tool Display Name (user-facing, min length: 5): ",
    min_length: 5,
};

pub const SHORT_TOOL_DESCRIPTION: InputField = InputField {
    key: "SHORT_TOOL_DESCRIPTION",
    question: "Short Tool Description (user-facing, min length: 30): ",
    min_length: 30,
};

pub const LONG_TOOL_DESCRIPTION: InputField = InputField {
    key: "LONG_TOOL_DESCRIPTION",
    question: "Long Tool Description (llm-facing, min length: 30): ",
    min_length: 30,
};

impl InputField {
    /// Fields in the order they are asked.
    pub const ALL: [InputField; 3] =
        [TOOL_DISPLAY_NAME, SHORT_TOOL_DESCRIPTION, LONG_TOOL_DESCRIPTION];
}

/// Count characters the same way for every prompt implementation.
pub fn meets_minimum_length(answer: &str, min_length: usize) -> bool {
    answer.trim().chars().count() >= min_length
}

pub fn minimum_length_message(min_length: usize) -> String {
    format!("Input must be at least {} characters.", min_length)
}

/// Answers collected from the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolInputs {
    display_name: String,
    short_description: String,
    long_description: String,
}

impl ToolInputs {
    pub fn new(
        display_name: impl Into<String>,
        short_description: impl Into<String>,
        long_description: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            short_description: short_description.into(),
            long_description: long_description.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    pub fn long_description(&self) -> &str {
        &self.long_description
    }

    pub fn slug(&self) -> String {
        slugify(&self.display_name)
    }

    /// Placeholder substitutions in the order they are applied.
    pub fn placeholders(&self) -> [(&'static str, &str); 3] {
        [
            (TOOL_DISPLAY_NAME.key, self.display_name()),
            (SHORT_TOOL_DESCRIPTION.key, self.short_description()),
            (LONG_TOOL_DESCRIPTION.key, self.long_description()),
        ]
    }
}
