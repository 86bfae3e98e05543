//! Rust `#[test]` functions.

use suitegen_core::{escape_string_literal, to_snake_case};
use suitegen_manifest::RustConfig;

use super::{TestCase, TestTarget};
use crate::builder::{CodeFragment, Indent, Renderable};

/// Reason attached to `#[ignore]` on disabled tests.
const IGNORE_REASON: &str = "implementation is known not to pass this case";

/// Renders `#[test]` functions that call a `fn(&str) -> Result<_, _>` parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RustTest {
    parser: String,
}

impl RustTest {
    pub fn new(parser: impl Into<String>) -> Self {
        Self {
            parser: parser.into(),
        }
    }

    pub fn from_config(config: &RustConfig) -> Self {
        Self::new(&config.parser)
    }
}

impl Default for RustTest {
    fn default() -> Self {
        Self::from_config(&RustConfig::default())
    }
}

impl TestTarget for RustTest {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn indent(&self) -> Indent {
        Indent::RUST
    }

    fn render_case(&self, case: &TestCase<'_>) -> Vec<CodeFragment> {
        RustTestFn { target: self, case }.to_fragments()
    }
}

/// Snake-case function name: `yesFoo_2` becomes `yes_foo_2`.
fn fn_name(case: &TestCase<'_>) -> String {
    let entry = case.entry;
    let stem = format!("{}{}", entry.polarity.verb(), entry.identifier);
    format!("{}{}", to_snake_case(&stem), entry.suffix())
}

struct RustTestFn<'a> {
    target: &'a RustTest,
    case: &'a TestCase<'a>,
}

impl Renderable for RustTestFn<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let entry = self.case.entry;

        let mut fragments = vec![
            CodeFragment::rust_doc(&entry.filename),
            CodeFragment::line("#[test]"),
        ];
        if !entry.supported {
            fragments.push(CodeFragment::line(format!("#[ignore = \"{}\"]", IGNORE_REASON)));
        }

        let mut body = self.case.disabled_comments();
        body.extend([
            CodeFragment::line(format!(
                "let bytes = std::fs::read(\"{}\").expect(\"failed to read fixture\");",
                escape_string_literal(&self.case.fixture_path)
            )),
            CodeFragment::line("let text = String::from_utf8_lossy(&bytes);"),
            CodeFragment::line(format!("let problem = {}(&text).err();", self.target.parser)),
            CodeFragment::blank(),
            CodeFragment::line(if entry.polarity.is_accept() {
                "assert!(problem.is_none());"
            } else {
                "assert!(problem.is_some());"
            }),
        ]);

        fragments.push(CodeFragment::braced(
            format!("fn {}() {{", fn_name(self.case)),
            body,
        ));
        fragments.push(CodeFragment::blank());
        fragments
    }
}
