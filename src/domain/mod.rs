pub mod error;
pub mod interpolation;
pub mod scaffold_config;
pub mod slug;
pub mod tool_inputs;

pub use error::AppError;
pub use interpolation::interpolate;
pub use scaffold_config::{ARCHIVE_FILE_NAME, CONFIG_FILE_NAME, DEFAULT_TEMPLATE_URL, ScaffoldConfig};
pub use slug::slugify;
pub use tool_inputs::{
    InputField, LONG_TOOL_DESCRIPTION, SHORT_TOOL_DESCRIPTION, TOOL_DISPLAY_NAME, ToolInputs,
    meets_minimum_length, minimum_length_message,
};
