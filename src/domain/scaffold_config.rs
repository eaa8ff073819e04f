use url::Url;

pub const DEFAULT_TEMPLATE_URL: &str =
    "https://codeload.github.com/mosaia-development/mosaia-tools-starter/tar.gz/refs/heads/main";

/// Name of the downloaded archive inside the target directory.
pub const ARCHIVE_FILE_NAME: &str = "repo.tar.gz";

/// Config file rewritten after extraction, relative to the target directory.
pub const CONFIG_FILE_NAME: &str = ".mosaia";

/// Fixed locations used by the create command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub template_url: Url,
    pub archive_file_name: String,
    pub config_file_name: String,
    /// Leading path segments dropped from every archive entry.
    pub strip_components: usize,
}

impl ScaffoldConfig {
    /// Same fixed layout, different template source.
    pub fn with_template_url(template_url: Url) -> Self {
        Self { template_url, ..Self::default() }
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            template_url: Url::parse(DEFAULT_TEMPLATE_URL).expect("default template URL is valid"),
            archive_file_name: ARCHIVE_FILE_NAME.to_string(),
            config_file_name: CONFIG_FILE_NAME.to_string(),
            strip_components: 1,
        }
    }
}
