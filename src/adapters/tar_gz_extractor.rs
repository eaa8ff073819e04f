use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use tar::{Archive, EntryType};

use crate::domain::AppError;
use crate::ports::ArchiveExtractor;

/// Unpacks `.tar.gz` archives with `flate2` and `tar`.
///
/// Entry paths are joined onto the output directory without traversal
/// checks; the archive source is fixed and trusted.
#[derive(Debug, Default, Clone, Copy)]
pub struct TarGzExtractor;

impl TarGzExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveExtractor for TarGzExtractor {
    fn extract(
        &self,
        archive: &Path,
        output_dir: &Path,
        strip_components: usize,
    ) -> Result<(), AppError> {
        let file = File::open(archive).map_err(|e| AppError::file_system(archive, e))?;
        let extraction_error =
            |message: String| AppError::Extraction { archive: archive.to_path_buf(), message };

        let mut tar = Archive::new(GzDecoder::new(BufReader::new(file)));
        let entries = tar.entries().map_err(|e| extraction_error(e.to_string()))?;

        let mut unpacked = 0usize;
        for entry in entries {
            let mut entry = entry.map_err(|e| extraction_error(e.to_string()))?;
            if entry.header().entry_type() == EntryType::XGlobalHeader {
                continue;
            }

            let path = entry.path().map_err(|e| extraction_error(e.to_string()))?;
            let Some(relative) = strip_leading(&path, strip_components) else {
                continue;
            };

            let dest = output_dir.join(&relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(|e| AppError::file_system(parent, e))?;
            }
            if entry.header().entry_type() == EntryType::Link {
                // Hard link targets carry the same leading segments as entry paths.
                let link = entry
                    .link_name()
                    .map_err(|e| extraction_error(e.to_string()))?
                    .and_then(|name| strip_leading(&name, strip_components))
                    .ok_or_else(|| {
                        extraction_error(format!("hard link {} has no target", relative.display()))
                    })?;
                fs::hard_link(output_dir.join(&link), &dest).map_err(|e| {
                    extraction_error(format!("failed to link {}: {}", relative.display(), e))
                })?;
            } else {
                entry.unpack(&dest).map_err(|e| {
                    extraction_error(format!("failed to unpack {}: {}", relative.display(), e))
                })?;
            }
            unpacked += 1;
        }

        tracing::debug!(entries = unpacked, dir = %output_dir.display(), "archive extracted");
        Ok(())
    }
}

/// Drop the first `count` normal segments of `path`.
///
/// Returns `None` when nothing is left, as for the wrapper directory itself.
fn strip_leading(path: &Path, count: usize) -> Option<PathBuf> {
    let stripped: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .skip(count)
        .collect();

    if stripped.as_os_str().is_empty() { None } else { Some(stripped) }
}
