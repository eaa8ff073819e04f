use std::path::Path;

use crate::domain::AppError;

/// Port for unpacking the downloaded archive.
pub trait ArchiveExtractor {
    /// Unpack `archive` into `output_dir`, dropping `strip_components` leading
    /// path segments from every entry.
    fn extract(
        &self,
        archive: &Path,
        output_dir: &Path,
        strip_components: usize,
    ) -> Result<(), AppError>;
}
