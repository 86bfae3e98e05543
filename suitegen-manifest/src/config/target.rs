//! Test framework targets for rendering.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported test frameworks for generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// JUnit 4 test methods (Java)
    #[default]
    JUnit,
    /// Rust `#[test]` functions
    Rust,
}

impl Target {
    /// Returns the target identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::JUnit => "junit",
            Target::Rust => "rust",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "junit" | "java" => Ok(Target::JUnit),
            "rust" | "rs" => Ok(Target::Rust),
            _ => Err(format!("unknown target '{}', expected 'junit' or 'rust'", s)),
        }
    }
}
