//! create-mosaia-tool: scaffold a new Mosaia tool project from the starter template.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod logging;
pub mod ports;


use std::io::IsTerminal;
use std::path::PathBuf;

use adapters::{DialoguerPrompter, HttpArchiveFetcher, LinePrompter, TarGzExtractor};
use app::{AppContext, commands::create};
use ports::Prompter;

pub use app::commands::create::{CreateOptions, CreateOutcome};
pub use domain::{AppError, ScaffoldConfig, ToolInputs, interpolate, slugify};

/// Create a new tool project, asking for its metadata on the terminal.
///
/// `target` overrides the directory name derived from the display name.
pub fn create(target: Option<PathBuf>) -> Result<CreateOutcome, AppError> {
    let options = CreateOptions::from_current_dir(target)?;

    let outcome = if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
        create_with(DialoguerPrompter::new(), ScaffoldConfig::default(), options)?
    } else {
        create_with(LinePrompter::stdio(), ScaffoldConfig::default(), options)?
    };

    println!("✅ Project initialized in {}", outcome.target.display());
    Ok(outcome)
}

/// Create a new tool project with an explicit prompter and template source.
pub fn create_with<P: Prompter>(
    prompter: P,
    config: ScaffoldConfig,
    options: CreateOptions,
) -> Result<CreateOutcome, AppError> {
    let mut ctx =
        AppContext::with_config(prompter, HttpArchiveFetcher::new()?, TarGzExtractor::new(), config);
    create::execute(&mut ctx, options)
}
