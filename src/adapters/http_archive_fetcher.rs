//! Template archive download using reqwest.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::ArchiveFetcher;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for the template archive.
///
/// One GET per call, no retries and no request timeout. Redirects are
/// followed by reqwest's default policy.
#[derive(Clone, Debug)]
pub struct HttpArchiveFetcher {
    client: Client,
}

impl HttpArchiveFetcher {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None)
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self { client })
    }
}

impl ArchiveFetcher for HttpArchiveFetcher {
    fn fetch(&self, url: &Url, destination: &Path) -> Result<(), AppError> {
        tracing::debug!(%url, "requesting template archive");

        let mut response = self.client.get(url.clone()).send().map_err(|e| {
            AppError::Network { url: url.to_string(), message: e.to_string() }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(%url, status = status.as_u16(), "template download rejected");
            return Err(AppError::HttpStatus { url: url.to_string(), status: status.as_u16() });
        }

        let file =
            File::create(destination).map_err(|e| AppError::file_system(destination, e))?;
        let mut writer = BufWriter::new(file);

        let bytes = response.copy_to(&mut writer).map_err(|e| AppError::Network {
            url: url.to_string(),
            message: format!("Failed while streaming response body: {}", e),
        })?;

        writer
            .into_inner()
            .map_err(|e| AppError::file_system(destination, e.into_error()))?
            .sync_all()
            .map_err(|e| AppError::file_system(destination, e))?;

        tracing::debug!(bytes, path = %destination.display(), "template archive saved");
        Ok(())
    }
}
