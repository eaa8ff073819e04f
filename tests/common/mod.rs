//! Shared testing utilities for create-mosaia-tool tests.

#![allow(dead_code)]

use assert_cmd::Command;
use create_mosaia_tool::adapters::LinePrompter;
use create_mosaia_tool::{CreateOptions, ScaffoldConfig};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use url::Url;

pub const DISPLAY_NAME: &str = "My Tool";
/// 35 characters.
pub const SHORT_DESCRIPTION: &str = "Looks up current weather for a city";
/// 40 characters.
pub const LONG_DESCRIPTION: &str = "Returns the weather forecast for a place";

pub const MOSAIA_TEMPLATE: &str = r#"{
    "name": "TOOL_DISPLAY_NAME",
    "description": "SHORT_TOOL_DESCRIPTION",
    "llm_description": "LONG_TOOL_DESCRIPTION",
    "schema": {
        "type": "object",
        "properties": { "city": { "type": "string" } }
    },
    "envVars": ["WEATHER_API_KEY"]
}
"#;

pub type TestPrompter = LinePrompter<Cursor<Vec<u8>>, Vec<u8>>;

/// Testing harness providing an isolated working directory.
pub struct TestContext {
    _root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { _root: root, work_dir }
    }

    /// Directory used as the invocation working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("create-mosaia-tool")
            .expect("Failed to locate create-mosaia-tool binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Create options resolving relative targets against the work directory.
    pub fn options(&self, target: Option<&str>) -> CreateOptions {
        CreateOptions { target: target.map(PathBuf::from), working_dir: self.work_dir.clone() }
    }
}

/// Line prompter fed with one answer per line.
pub fn prompter(answers: &[&str]) -> TestPrompter {
    let mut input = answers.join("\n");
    input.push('\n');
    LinePrompter::new(Cursor::new(input.into_bytes()), Vec::new())
}

/// Standard valid answers, newline separated, for piping into the binary.
pub fn valid_stdin(display_name: &str) -> String {
    format!("{}\n{}\n{}\n", display_name, SHORT_DESCRIPTION, LONG_DESCRIPTION)
}

/// Scaffold config downloading from `path` on the mock server.
pub fn mock_config(server: &mockito::Server, path: &str) -> ScaffoldConfig {
    let url = Url::parse(&format!("{}{}", server.url(), path)).expect("mock server URL");
    ScaffoldConfig::with_template_url(url)
}

const WRAPPER: &str = "mosaia-tools-starter-main";

/// Gzip tarball with every file under a `mosaia-tools-starter-main/` wrapper.
///
/// Same shape as a codeload export: a directory entry for the wrapper, then
/// the files beneath it.
pub fn starter_archive(files: &[(&str, &str)]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let mut dir = tar::Header::new_gnu();
    dir.set_entry_type(tar::EntryType::Directory);
    dir.set_mode(0o755);
    dir.set_size(0);
    builder
        .append_data(&mut dir, format!("{}/", WRAPPER), std::io::empty())
        .expect("append wrapper directory to in-memory archive");

    for (name, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_mode(0o644);
        header.set_size(content.len() as u64);
        builder
            .append_data(&mut header, format!("{}/{}", WRAPPER, name), content.as_bytes())
            .expect("append entry to in-memory archive");
    }

    builder
        .into_inner()
        .and_then(|encoder| encoder.finish())
        .expect("finish in-memory archive")
}
