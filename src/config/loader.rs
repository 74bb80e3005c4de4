use super::TransformLimits;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves [`TransformLimits`] from an optional TOML file and the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    read_env: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            path: None,
            read_env: true,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Skip environment overrides
    pub fn without_env(mut self) -> Self {
        self.read_env = false;
        self
    }

    pub fn load(&self) -> Result<TransformLimits> {
        let mut limits = match &self.path {
            Some(path) => Self::load_file(path)?,
            None => TransformLimits::default(),
        };

        if self.read_env {
            limits.merge_env_vars();
        }

        debug!("Resolved transform limits: {:?}", limits);
        Ok(limits)
    }

    fn load_file(path: &Path) -> Result<TransformLimits> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        parse_limits(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse limits from TOML; missing keys keep their defaults
pub fn parse_limits(content: &str) -> Result<TransformLimits> {
    Ok(toml::from_str(content)?)
}

/// Load limits from an optional file, then apply environment overrides
pub fn load_limits(path: Option<&Path>) -> Result<TransformLimits> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}
