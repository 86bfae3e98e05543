//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Test targets describe a test method as fragments; the [`CodeBuilder`]
//! turns them into indented text.
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// A Javadoc comment spanning three lines (`/**`, ` * text`, ` */`).
    JavaDoc(String),
    /// A Rust doc comment.
    RustDoc(String),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a block closed by `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some("}".to_string()),
        }
    }

    /// Create a sequence of fragments.
    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }

    /// Create a Javadoc comment fragment.
    pub fn java_doc(s: impl Into<String>) -> Self {
        Self::JavaDoc(s.into())
    }

    /// Create a Rust doc comment fragment.
    pub fn rust_doc(s: impl Into<String>) -> Self {
        Self::RustDoc(s.into())
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
