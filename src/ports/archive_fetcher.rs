use std::path::Path;

use url::Url;

use crate::domain::AppError;

/// Port for downloading the template archive.
pub trait ArchiveFetcher {
    /// Stream the body of `url` into a new file at `destination`.
    ///
    /// Fails with `AppError::Network` when no response arrives and with
    /// `AppError::HttpStatus` for any status other than 200.
    fn fetch(&self, url: &Url, destination: &Path) -> Result<(), AppError>;
}
