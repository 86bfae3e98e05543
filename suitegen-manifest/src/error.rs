use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the text being parsed and its display name so that errors can
/// point at the offending line.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a missing filename error for a data line.
    pub fn missing_filename_error(&self, line: usize, span: impl Into<SourceSpan>) -> Box<Error> {
        Box::new(Error::MissingFilename {
            src: self.named_source(),
            span: span.into(),
            line,
        })
    }

    /// Create an invalid polarity error for a fixture filename.
    pub fn invalid_polarity_error(
        &self,
        line: usize,
        filename: impl Into<String>,
        found: char,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidPolarity {
            src: self.named_source(),
            span: span.into(),
            line,
            filename: filename.into(),
            found,
        })
    }

    /// Create a config error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            source,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(suitegen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: missing fixture filename")]
    #[diagnostic(
        code(suitegen::missing_filename),
        help("data lines look like 'PASS: y_array_empty.json'")
    )]
    MissingFilename {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected '<status>: <filename>'")]
        span: SourceSpan,
        line: usize,
    },

    #[error("line {line}: unrecognized polarity '{found}' in '{filename}'")]
    #[diagnostic(
        code(suitegen::invalid_polarity),
        help("fixture filenames start with 'y' (valid JSON) or 'n' (invalid JSON)")
    )]
    InvalidPolarity {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected 'y' or 'n' here")]
        span: SourceSpan,
        line: usize,
        filename: String,
        found: char,
    },

    #[error("failed to parse config")]
    #[diagnostic(code(suitegen::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("config error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// The 1-based manifest line this error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MissingFilename { line, .. } | Error::InvalidPolarity { line, .. } => {
                Some(*line)
            }
            Error::Io { .. } | Error::Config { .. } => None,
        }
    }
}
