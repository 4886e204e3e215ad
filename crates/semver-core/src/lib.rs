//! Semantic version value type
//!
//! This crate parses `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` strings into a
//! [`Version`], renders them back to canonical text and compares versions by
//! semantic-versioning precedence.

mod comparator;
mod identifier;
mod semver;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use identifier::Identifier;
pub use semver::Semver;
pub use version::Version;
pub use version_parser::{parse_version, VersionParser, VersionParserError};
