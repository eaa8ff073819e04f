use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{AppError, InputField, ToolInputs, interpolate};
use crate::ports::{ArchiveExtractor, ArchiveFetcher, Prompter};

/// Options for the create command.
#[derive(Clone, Debug)]
pub struct CreateOptions {
    /// Explicit target directory; defaults to the slug of the display name.
    pub target: Option<PathBuf>,
    /// Directory relative targets are resolved against.
    pub working_dir: PathBuf,
}

impl CreateOptions {
    /// Resolve against the process working directory.
    pub fn from_current_dir(target: Option<PathBuf>) -> Result<Self, AppError> {
        Ok(Self { target, working_dir: std::env::current_dir()? })
    }
}

/// Result of a successful create run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateOutcome {
    /// Absolute path of the new project.
    pub target: PathBuf,
    pub slug: String,
    pub inputs: ToolInputs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    CollectInputs,
    ResolveTarget,
    CheckPrecondition,
    CreateDirectory,
    Download,
    Extract,
    Cleanup,
    PatchConfig,
    Done,
}

fn enter(stage: Stage) {
    tracing::debug!(?stage, "create: entering stage");
}

/// Execute the create command.
///
/// Prompts for the tool metadata, creates the target directory, downloads
/// and unpacks the starter template into it, then fills in the config file
/// placeholders. Nothing is rolled back on failure.
pub fn execute<P, F, X>(
    ctx: &mut AppContext<P, F, X>,
    options: CreateOptions,
) -> Result<CreateOutcome, AppError>
where
    P: Prompter,
    F: ArchiveFetcher,
    X: ArchiveExtractor,
{
    enter(Stage::CollectInputs);
    let inputs = collect_inputs(ctx.prompter())?;

    enter(Stage::ResolveTarget);
    let slug = inputs.slug();
    let target = resolve_target(&options.working_dir, options.target.as_deref(), &slug);
    tracing::info!(dir = %target.display(), %slug, "resolved target directory");

    enter(Stage::CheckPrecondition);
    if target.exists() {
        return Err(AppError::DirectoryExists(target));
    }

    enter(Stage::CreateDirectory);
    fs::create_dir_all(&target).map_err(|e| AppError::file_system(&target, e))?;

    let config = ctx.config();
    let archive = target.join(&config.archive_file_name);

    enter(Stage::Download);
    ctx.fetcher().fetch(&config.template_url, &archive)?;

    enter(Stage::Extract);
    ctx.extractor().extract(&archive, &target, config.strip_components)?;

    enter(Stage::Cleanup);
    remove_archive(&archive);

    enter(Stage::PatchConfig);
    patch_config(&target.join(&config.config_file_name), &inputs)?;

    enter(Stage::Done);
    Ok(CreateOutcome { target, slug, inputs })
}

fn collect_inputs<P: Prompter>(prompter: &mut P) -> Result<ToolInputs, AppError> {
    let [name, short, long] = InputField::ALL;
    let display_name = prompter.ask_with_minimum_length(name.question, name.min_length)?;
    let short_description = prompter.ask_with_minimum_length(short.question, short.min_length)?;
    let long_description = prompter.ask_with_minimum_length(long.question, long.min_length)?;
    Ok(ToolInputs::new(display_name, short_description, long_description))
}

/// Absolute, lexically normalized target path.
///
/// An empty explicit target falls back to the slug.
fn resolve_target(working_dir: &Path, explicit: Option<&Path>, slug: &str) -> PathBuf {
    let requested =
        explicit.filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new(slug));
    let joined = if requested.is_absolute() {
        requested.to_path_buf()
    } else {
        working_dir.join(requested)
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() {
                    resolved.push(component);
                }
            }
            other => resolved.push(other),
        }
    }
    resolved
}

fn remove_archive(archive: &Path) {
    match fs::remove_file(archive) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(path = %archive.display(), error = %e, "could not remove template archive");
        }
    }
}

fn patch_config(path: &Path, inputs: &ToolInputs) -> Result<(), AppError> {
    let content = fs::read_to_string(path).map_err(|e| AppError::file_system(path, e))?;
    let patched = interpolate(&content, &inputs.placeholders());
    fs::write(path, patched).map_err(|e| AppError::file_system(path, e))?;
    tracing::debug!(path = %path.display(), "config placeholders filled");
    Ok(())
}
