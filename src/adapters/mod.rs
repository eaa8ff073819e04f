pub mod dialoguer_prompter;
pub mod http_archive_fetcher;
pub mod line_prompter;
pub mod tar_gz_extractor;

pub use dialoguer_prompter::DialoguerPrompter;
pub use http_archive_fetcher::HttpArchiveFetcher;
pub use line_prompter::LinePrompter;
pub use tar_gz_extractor::TarGzExtractor;
