//! Unified target dispatch.

use suitegen_codegen::targets::{JUnit, RustTest, TestTarget};
use suitegen_manifest::{Config, Target};

/// Create the renderer for `target`, configured from `config`.
pub fn test_target(target: Target, config: &Config) -> Box<dyn TestTarget> {
    match target {
        Target::JUnit => Box::new(JUnit::from_config(&config.junit)),
        Target::Rust => Box::new(RustTest::from_config(&config.rust)),
    }
}
