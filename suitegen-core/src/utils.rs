//! Shared string utilities for naming generated tests.

/// Convert a fixture subject to a PascalCase identifier
/// (e.g., "object_trailing-comma" -> "ObjectTrailingComma").
///
/// Every run of characters that are not ASCII letters or digits separates
/// two words and is discarded. Each word keeps its first character
/// upper-cased and the rest lower-cased, so the result does not depend on
/// the case or punctuation of the input.
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
            }
        })
        .collect()
}

/// Convert a camelCase or PascalCase name to snake_case
/// (e.g., "yesArrayEmpty" -> "yes_array_empty").
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

/// Escape a value for use inside a double-quoted string literal.
///
/// Java and Rust share the escapes needed here, so the same output is valid
/// in both targets.
pub fn escape_string_literal(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("array_empty"), "ArrayEmpty");
        assert_eq!(to_pascal_case("object_trailing_comma"), "ObjectTrailingComma");
        assert_eq!(to_pascal_case("x"), "X");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_pascal_case_ignores_case_and_punctuation() {
        assert_eq!(to_pascal_case("foo-bar"), "FooBar");
        assert_eq!(to_pascal_case("FOO_BAR"), "FooBar");
        assert_eq!(to_pascal_case("__foo..bar!!"), "FooBar");
        assert_eq!(to_pascal_case("FOO!"), "Foo");
    }

    #[test]
    fn test_to_pascal_case_digits_and_non_ascii() {
        assert_eq!(to_pascal_case("number_1.0"), "Number10");
        assert_eq!(to_pascal_case("number_1e+2"), "Number1e2");
        // Non-ASCII letters are delimiters, not word characters.
        assert_eq!(to_pascal_case("string_utf8_é_x"), "StringUtf8X");
        assert_eq!(to_pascal_case("-_-"), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("yesArrayEmpty"), "yes_array_empty");
        assert_eq!(to_snake_case("noObjectTrailingComma"), "no_object_trailing_comma");
        assert_eq!(to_snake_case("yesNumber1e2"), "yes_number1e2");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_escape_string_literal() {
        assert_eq!(escape_string_literal("plain/dir"), "plain/dir");
        assert_eq!(escape_string_literal(r"C:\tests"), r"C:\\tests");
        assert_eq!(escape_string_literal("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_string_literal("a\tb\n"), "a\\tb\\n");
    }
}
