use crate::domain::ScaffoldConfig;
use crate::ports::{ArchiveExtractor, ArchiveFetcher, Prompter};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: Prompter, F: ArchiveFetcher, X: ArchiveExtractor> {
    prompter: P,
    fetcher: F,
    extractor: X,
    config: ScaffoldConfig,
}

impl<P: Prompter, F: ArchiveFetcher, X: ArchiveExtractor> AppContext<P, F, X> {
    /// Create a new application context with the fixed scaffold layout.
    pub fn new(prompter: P, fetcher: F, extractor: X) -> Self {
        Self::with_config(prompter, fetcher, extractor, ScaffoldConfig::default())
    }

    pub fn with_config(prompter: P, fetcher: F, extractor: X, config: ScaffoldConfig) -> Self {
        Self { prompter, fetcher, extractor, config }
    }

    /// Get a mutable reference to the prompter.
    pub fn prompter(&mut self) -> &mut P {
        &mut self.prompter
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn extractor(&self) -> &X {
        &self.extractor
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Release the context, returning the prompter.
    pub fn into_prompter(self) -> P {
        self.prompter
    }
}
