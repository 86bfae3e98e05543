//! Ordering of generated tests within each section.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How tests are ordered inside the supported and unsupported sections.
///
/// Supported tests always come first. `Manifest` keeps manifest order
/// inside each section, which is the layout earlier generated suites were
/// produced with. `Identifier` sorts by identifier, then occurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Manifest,
    Identifier,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Manifest => "manifest",
            SortOrder::Identifier => "identifier",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manifest" => Ok(SortOrder::Manifest),
            "identifier" | "name" => Ok(SortOrder::Identifier),
            _ => Err(format!(
                "unknown ordering '{}', expected 'manifest' or 'identifier'",
                s
            )),
        }
    }
}
