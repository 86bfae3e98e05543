//! Built-in lints for manifest validation.

mod duplicate_fixture;
mod fixture_extension;
mod identifier_collision;

pub use duplicate_fixture::DuplicateFixtureLint;
pub use fixture_extension::FixtureExtensionLint;
pub use identifier_collision::IdentifierCollisionLint;
