//! JUnit 4 test methods.

use suitegen_core::escape_string_literal;
use suitegen_manifest::JUnitConfig;

use super::{TestCase, TestTarget};
use crate::builder::{CodeFragment, Indent, Renderable};

/// Renders JUnit 4 `@Test` methods that call a static parser method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JUnit {
    parser: String,
    exception: String,
}

impl JUnit {
    /// `parser` is a static method taking the fixture text, `exception` the
    /// type it throws on invalid input.
    pub fn new(parser: impl Into<String>, exception: impl Into<String>) -> Self {
        Self {
            parser: parser.into(),
            exception: exception.into(),
        }
    }

    pub fn from_config(config: &JUnitConfig) -> Self {
        Self::new(&config.parser, &config.exception)
    }
}

impl Default for JUnit {
    fn default() -> Self {
        Self::from_config(&JUnitConfig::default())
    }
}

impl TestTarget for JUnit {
    fn name(&self) -> &'static str {
        "junit"
    }

    fn indent(&self) -> Indent {
        Indent::JAVA
    }

    fn render_case(&self, case: &TestCase<'_>) -> Vec<CodeFragment> {
        JUnitMethod { target: self, case }.to_fragments()
    }
}

struct JUnitMethod<'a> {
    target: &'a JUnit,
    case: &'a TestCase<'a>,
}

impl Renderable for JUnitMethod<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let entry = self.case.entry;
        let exception = &self.target.exception;

        let mut fragments = vec![
            CodeFragment::java_doc(&entry.filename),
            CodeFragment::line("@Test"),
        ];
        if !entry.supported {
            fragments.push(CodeFragment::line("@Ignore"));
        }

        let mut body = self.case.disabled_comments();
        body.extend([
            CodeFragment::line(format!("{} problem;", exception)),
            CodeFragment::braced(
                "try {",
                vec![
                    CodeFragment::line(format!(
                        "{}(new String(Files.readAllBytes(new File(\"{}\").toPath())));",
                        self.target.parser,
                        escape_string_literal(&self.case.fixture_path)
                    )),
                    CodeFragment::line("problem = null;"),
                ],
            ),
            CodeFragment::braced(
                format!("catch({} e) {{", exception),
                vec![CodeFragment::line("problem = e;")],
            ),
            CodeFragment::blank(),
            CodeFragment::line(if entry.polarity.is_accept() {
                "assertNull(problem);"
            } else {
                "assertNotNull(problem);"
            }),
        ]);

        fragments.push(CodeFragment::braced(
            format!("public void {}() throws IOException {{", entry.method_name()),
            body,
        ));
        fragments.push(CodeFragment::blank());
        fragments
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use suitegen_manifest::Manifest;

    use super::*;
    use crate::builder::CodeBuilder;

    fn render(manifest: &str, target: &JUnit) -> String {
        let manifest = Manifest::from_str(manifest).unwrap();
        let case = TestCase::new(&manifest.entries()[0], "src/test/resources/test_parsing");
        let mut builder = CodeBuilder::new(target.indent());
        builder.extend(target.render_case(&case));
        builder.build()
    }

    #[test]
    fn test_supported_accept_method() {
        let code = render("PASS: y_array_empty.json\n", &JUnit::default());
        assert_eq!(
            code,
            r#"/**
 * y_array_empty.json
 */
@Test
public void yesArrayEmpty() throws IOException {
    IllegalArgumentException problem;
    try {
        JustJson.parseValue(new String(Files.readAllBytes(new File("src/test/resources/test_parsing/y_array_empty.json").toPath())));
        problem = null;
    }
    catch(IllegalArgumentException e) {
        problem = e;
    }

    assertNull(problem);
}

"#
        );
    }

    #[test]
    fn test_unsupported_reject_method() {
        let code = render(
            "FAIL (expected failure, but succeeded): n_object_trailing_comma.json\n",
            &JUnit::default(),
        );

        assert!(code.contains("@Test\n@Ignore\npublic void noObjectTrailingComma() throws IOException {\n"));
        assert!(code.contains(
            "    // This test is currently DISABLED because the implementation is known not to pass it.\n"
        ));
        assert!(code.contains("    // This is a \"n\" test, so the file contains invalid JSON.\n"));
        assert!(code.contains("    assertNotNull(problem);\n"));
        assert!(!code.contains("assertNull("));
    }

    #[test]
    fn test_configured_parser_and_exception() {
        let code = render("PASS: y_x.json\n", &JUnit::new("Json.read", "JsonException"));
        assert!(code.contains("    JsonException problem;\n"));
        assert!(code.contains("        Json.read(new String("));
        assert!(code.contains("    catch(JsonException e) {\n"));
        assert!(!code.contains("@Ignore"));
    }

    #[test]
    fn test_fixture_path_is_escaped() {
        let manifest = Manifest::from_str("PASS: y_x.json\n").unwrap();
        let case = TestCase::new(&manifest.entries()[0], r"C:\suite");
        let mut builder = CodeBuilder::java();
        builder.extend(JUnit::default().render_case(&case));
        assert!(builder.build().contains(r#"new File("C:\\suite/y_x.json")"#));
    }
}
