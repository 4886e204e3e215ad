//! Semver facade providing high-level version operations

use crate::version::Version;
use crate::version_parser::VersionParser;

/// Main facade for semantic versioning operations on strings
pub struct Semver;

impl Semver {
    /// Check if a version string parses with the lenient parser
    pub fn is_valid(version: &str) -> bool {
        VersionParser::lenient().is_valid(version)
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let parser = VersionParser::lenient();

        // Parsed versions with their original index; unparsable entries are dropped
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match parser.parse(v) {
                Ok(version) => Some((version, i)),
                Err(err) => {
                    log::debug!("Skipping version {:?}: {}", v, err);
                    None
                }
            })
            .collect();

        // Stable sort keeps input order among versions of equal precedence
        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.cmp_precedence(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        // Return original versions in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
