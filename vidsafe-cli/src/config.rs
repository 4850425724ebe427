use std::{fmt::Display, path::PathBuf};

use safe_name::VIDEO_EXTENSIONS;

/// Configuration for a rename batch
#[derive(Debug, Clone)]
pub struct RenameConfig {
    /// Directory whose entries are renamed (not recursive)
    pub dir: PathBuf,

    /// Extensions (without the dot) of the files to rename
    pub extensions: Vec<String>,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            extensions: VIDEO_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

impl Display for RenameConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RenameConfig {{ dir: {}, extensions: [{}] }}",
            self.dir.display(),
            self.extensions.join(", ")
        )
    }
}

impl RenameConfig {
    pub fn builder() -> RenameConfigBuilder {
        RenameConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenameConfigBuilder {
    config: RenameConfig,
}

impl RenameConfigBuilder {
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.dir = dir.into();
        self
    }

    pub fn extensions<S: Into<String>>(mut self, extensions: impl IntoIterator<Item = S>) -> Self {
        self.config.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> RenameConfig {
        self.config
    }
}
