//! # Runner Configuration

use std::path::{Path, PathBuf};

/// Configuration for a lesson run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Run only the lesson with exactly this name
    pub filter: Option<String>,

    /// Text file read by lessons that iterate over file lines
    pub example_file: PathBuf,
}

impl RunnerConfig {
    /// Run every lesson against the bundled example file
    pub fn new() -> Self {
        Self {
            filter: None,
            example_file: Self::default_example_file(),
        }
    }

    /// Run a single lesson
    pub fn with_filter(mut self, name: impl Into<String>) -> Self {
        self.filter = Some(name.into());
        self
    }

    /// Read lines from a different file
    pub fn with_example_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.example_file = path.into();
        self
    }

    /// `data/example_file.txt` under the crate root
    pub fn default_example_file() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("example_file.txt")
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new()
    }
}
