//! Version string parsing

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::version::Version;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("Empty version string")]
    Empty,
    #[error("Invalid version string \"{0}\", expected MAJOR.MINOR.PATCH")]
    InvalidVersion(String),
    #[error("Invalid version string \"{version}\": \"{component}\" is not a valid number")]
    InvalidNumber { version: String, component: String },
    #[error("Invalid pre-release in version string \"{0}\"")]
    InvalidPreRelease(String),
    #[error("Invalid build metadata in version string \"{0}\"")]
    InvalidBuild(String),
}

lazy_static! {
    // One or more dot-separated identifiers, none of them empty
    static ref IDENTIFIERS_RE: Regex = Regex::new(r"^[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*$").unwrap();

    static ref NUMBER_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Parse a version string with the strict grammar
pub fn parse_version(version: &str) -> Result<Version, VersionParserError> {
    VersionParser::new().parse(version)
}

/// Version parser for `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` strings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionParser {
    lenient: bool,
}

impl VersionParser {
    /// Create a parser that accepts only the exact grammar
    pub fn new() -> Self {
        VersionParser { lenient: false }
    }

    /// Create a parser that also trims whitespace and accepts a `v` prefix
    pub fn lenient() -> Self {
        VersionParser { lenient: true }
    }

    /// Check if the parser is lenient
    pub fn is_lenient(&self) -> bool {
        self.lenient
    }

    /// Check if a version string is valid
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parse a version string into a [`Version`]
    pub fn parse(&self, version: &str) -> Result<Version, VersionParserError> {
        let input = if self.lenient {
            strip_lenient(version)
        } else {
            version
        };

        let result = parse_strict(input);
        if let Err(err) = &result {
            log::trace!("Rejected version {:?}: {}", version, err);
        }
        result
    }
}

fn strip_lenient(version: &str) -> &str {
    let trimmed = version.trim();
    let stripped = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);
    if stripped.len() != version.len() {
        log::trace!("Normalized version {:?} to {:?}", version, stripped);
    }
    stripped
}

fn parse_strict(version: &str) -> Result<Version, VersionParserError> {
    if version.is_empty() {
        return Err(VersionParserError::Empty);
    }

    // Build metadata starts at the first '+', the pre-release at the first
    // '-' before it. Hyphens after the '+' belong to the build label.
    let (rest, build) = match version.split_once('+') {
        Some((rest, build)) => {
            if !IDENTIFIERS_RE.is_match(build) {
                return Err(VersionParserError::InvalidBuild(version.to_string()));
            }
            (rest, build)
        }
        None => (version, ""),
    };

    let (core, pre_release) = match rest.split_once('-') {
        Some((core, pre_release)) => {
            if !IDENTIFIERS_RE.is_match(pre_release) {
                return Err(VersionParserError::InvalidPreRelease(version.to_string()));
            }
            (core, pre_release)
        }
        None => (rest, ""),
    };

    let parts: Vec<&str> = core.split('.').collect();
    let [major, minor, patch] = parts.as_slice() else {
        return Err(VersionParserError::InvalidVersion(version.to_string()));
    };
    if parts.iter().any(|part| part.is_empty()) {
        return Err(VersionParserError::InvalidVersion(version.to_string()));
    }

    Ok(Version {
        major: parse_number(version, major)?,
        minor: parse_number(version, minor)?,
        patch: parse_number(version, patch)?,
        pre_release: pre_release.to_string(),
        build: build.to_string(),
    })
}

fn parse_number(version: &str, component: &str) -> Result<u64, VersionParserError> {
    let invalid = || VersionParserError::InvalidNumber {
        version: version.to_string(),
        component: component.to_string(),
    };
    if !NUMBER_RE.is_match(component) {
        return Err(invalid());
    }
    component.parse::<u64>().map_err(|_| invalid())
}
