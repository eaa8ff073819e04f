mod archive_extractor;
mod archive_fetcher;
mod prompter;

pub use archive_extractor::ArchiveExtractor;
pub use archive_fetcher::ArchiveFetcher;
pub use prompter::Prompter;
