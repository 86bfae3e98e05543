//! `suitegen.toml` configuration.

mod order;
mod target;

use std::{path::Path, str::FromStr};

pub use order::SortOrder;
pub use target::Target;
use serde::Deserialize;

use crate::{Error, Result, SourceContext};

/// Generator settings read from `suitegen.toml`.
///
/// Every field is optional; command line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory prefix for fixture paths in generated code.
    pub fixtures: Option<String>,

    /// Test framework to render for.
    pub target: Option<Target>,

    /// Ordering within each section.
    pub ordering: Option<SortOrder>,

    #[serde(default)]
    pub junit: JUnitConfig,

    #[serde(default)]
    pub rust: RustConfig,
}

/// Settings for the JUnit target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JUnitConfig {
    /// Static method invoked with the fixture text.
    pub parser: String,
    /// Exception type the parser throws on rejection.
    pub exception: String,
}

impl Default for JUnitConfig {
    fn default() -> Self {
        Self {
            parser: "JustJson.parseValue".to_string(),
            exception: "IllegalArgumentException".to_string(),
        }
    }
}

/// Settings for the Rust target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RustConfig {
    /// Path of a `fn(&str) -> Result<_, _>` invoked with the fixture text.
    pub parser: String,
}

impl Default for RustConfig {
    fn default() -> Self {
        Self {
            parser: "parse".to_string(),
        }
    }
}

impl Config {
    /// Default config file name looked up in the working directory.
    pub const FILE_NAME: &'static str = "suitegen.toml";

    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse config text with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SourceContext::new(content, filename).config_error(e))
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_str_with_filename(s, Self::FILE_NAME)
    }
}
