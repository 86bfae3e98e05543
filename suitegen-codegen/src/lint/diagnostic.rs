//! Diagnostic types produced by lints.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A problem that makes the manifest unusable.
    Error,
    /// A problem that doesn't prevent generation but should be addressed.
    Warning,
    /// Informational message.
    Info,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message about a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The lint that produced this diagnostic.
    pub lint: String,
    /// The diagnostic message.
    pub message: String,
    /// Optional location in the manifest (e.g., "line 12").
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, lint, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, lint, message)
    }

    /// Create a new info diagnostic.
    pub fn info(lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, lint, message)
    }

    fn new(severity: Severity, lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            lint: lint.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Locate this diagnostic at a 1-based manifest line.
    pub fn at_line(self, line: usize) -> Self {
        self.at(format!("line {}", line))
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}
