//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Mutable API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use suitegen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::java();
/// builder
///     .push_line("public void yesArrayEmpty() {")
///     .push_indent()
///     .push_line("assertNull(problem);")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(
///     builder.build(),
///     "public void yesArrayEmpty() {\n    assertNull(problem);\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (Rust default).
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Create a new CodeBuilder with 4-space indentation (Java default).
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a three-line Javadoc comment.
    pub fn push_java_doc(&mut self, text: &str) -> &mut Self {
        self.push_line("/**");
        self.push_line(&format!(" * {}", text));
        self.push_line(" */")
    }

    /// Add a Rust doc comment.
    pub fn push_rust_doc(&mut self, text: &str) -> &mut Self {
        self.push_line(&format!("/// {}", text))
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        self.extend(node.to_fragments())
    }

    /// Apply a sequence of fragments in order.
    pub fn extend(&mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> &mut Self {
        for fragment in fragments {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                self.extend(body);
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                self.extend(fragments);
            }
            CodeFragment::JavaDoc(text) => {
                self.push_java_doc(&text);
            }
            CodeFragment::RustDoc(text) => {
                self.push_rust_doc(&text);
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}
