//! Snapshot tests for rendered conformance suites.
//!
//! These tests verify that generated test code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use suitegen_codegen::{
    GenerateOptions, Generator,
    targets::{JUnit, RustTest, TestTarget},
};
use suitegen_manifest::{Manifest, SortOrder};

const MANIFEST: &str = "\
# DO NOT EDIT! This file is automatically generated by JsonTestSuiteRunner.
PASS: y_array_empty.json
FAIL (expected failure, but succeeded): n_object_trailing_comma.json
PASS: y_foo.json

PASS: y-FOO!.json
FAIL (expected success, but failed): y_number_huge_exp.json
PASS: n_array_1_true_without_comma.json
";

/// Render the shared manifest for a target.
fn render(target: &dyn TestTarget, fixtures: &str, order: SortOrder) -> String {
    let manifest = Manifest::from_str(MANIFEST).expect("Failed to parse manifest");
    let options = GenerateOptions::new(fixtures).order(order);
    Generator::new(&manifest, options).render(target)
}

#[test]
fn test_junit_manifest_order() {
    let output = render(
        &JUnit::default(),
        "src/test/resources/test_parsing",
        SortOrder::Manifest,
    );
    insta::assert_snapshot!("junit_manifest_order", output);
}

#[test]
fn test_rust_identifier_order() {
    let output = render(
        &RustTest::new("json_parser::parse"),
        "tests/JSONTestSuite/test_parsing",
        SortOrder::Identifier,
    );
    insta::assert_snapshot!("rust_identifier_order", output);
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let first = render(&JUnit::default(), "fixtures", SortOrder::Manifest);
    let second = render(&JUnit::default(), "fixtures", SortOrder::Manifest);
    assert_eq!(first, second);
}

#[test]
fn test_method_count_matches_manifest() {
    let output = render(&JUnit::default(), "fixtures", SortOrder::Manifest);
    assert_eq!(output.matches("@Test\n").count(), 6);
    assert_eq!(output.matches("@Ignore\n").count(), 2);

    let output = render(&RustTest::default(), "fixtures", SortOrder::Manifest);
    assert_eq!(output.matches("#[test]\n").count(), 6);
    assert_eq!(output.matches("#[ignore = ").count(), 2);
}
