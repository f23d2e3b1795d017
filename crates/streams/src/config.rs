//! Sort configuration via `lambdava.toml`
//!
//! Decides what `FunctionalStream::sort_partial` does with elements that
//! have no defined ordering (a `NaN` among doubles, for instance).

use lambdava_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Config file name looked up by callers that keep one on disk.
pub const CONFIG_FILE_NAME: &str = "lambdava.toml";

/// What to do with an element that cannot be ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
    /// Move such elements to the end, keeping their relative order
    #[default]
    Permissive,
    /// Fail with `Error::IncomparableElements`
    Strict,
}

/// Sort configuration loaded from `lambdava.toml`.
///
/// # Example
///
/// ```toml
/// # "permissive" (default) or "strict"
/// incomparable = "permissive"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Incomparable element handling: `"permissive"` or `"strict"`.
    #[serde(default = "default_incomparable_str")]
    pub incomparable: String,
}

fn default_incomparable_str() -> String {
    "permissive".to_string()
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            incomparable: default_incomparable_str(),
        }
    }
}

impl SortConfig {
    /// Config that rejects incomparable elements
    pub fn strict() -> Self {
        Self {
            incomparable: "strict".to_string(),
        }
    }

    /// Config that moves incomparable elements to the end
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Parse the `incomparable` string into a `SortPolicy`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"permissive"` or `"strict"`.
    pub fn policy(&self) -> Result<SortPolicy> {
        match self.incomparable.as_str() {
            "permissive" => Ok(SortPolicy::Permissive),
            "strict" => Ok(SortPolicy::Strict),
            other => Err(Error::InvalidConfig(format!(
                "Invalid incomparable policy '{}'. Expected \"permissive\" or \"strict\".",
                other
            ))),
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Lambdava configuration
#
# Handling of elements without a defined ordering in partial-order sorts:
#   "permissive" = move them to the end in their original order (default)
#   "strict"     = fail the sort
incomparable = "permissive"
"#
    }

    /// Parse config from TOML text, validating the policy eagerly.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SortConfig = toml::from_str(content)
            .map_err(|e| Error::InvalidConfig(format!("Failed to parse config: {}", e)))?;
        config.policy()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            Error::InvalidConfig(msg) => {
                Error::InvalidConfig(format!("{} (in '{}')", msg, path.display()))
            }
            other => other,
        })?;
        debug!(target: "lambdava::config", path = %path.display(), incomparable = %config.incomparable, "Loaded config");
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
            debug!(target: "lambdava::config", path = %path.display(), "Wrote default config");
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
