//! Version comparison utilities

use crate::version::Version;
use crate::version_parser::VersionParser;

/// Comparator for comparing version strings.
///
/// Both sides are parsed with the lenient parser. A side that fails to
/// parse makes every comparison false, `!=` included.
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">", version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">=", version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<", version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<=", version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "==", version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "!=", version2)
    }

    /// Compare version1 to version2 using the given operator.
    ///
    /// Supported operators: `<`, `<=`, `>`, `>=`, `==` (or `=`) and `!=`
    /// (or `<>`). Unknown operators compare false.
    pub fn compare(version1: &str, operator: &str, version2: &str) -> bool {
        let parser = VersionParser::lenient();
        let (Ok(a), Ok(b)) = (parser.parse(version1), parser.parse(version2)) else {
            return false;
        };
        Self::compare_versions(&a, operator, &b)
    }

    /// Compare two parsed versions using the given operator
    pub fn compare_versions(a: &Version, operator: &str, b: &Version) -> bool {
        match operator {
            "<" => a.less(b),
            "<=" => a.less(b) || a.equal(b),
            ">" => b.less(a),
            ">=" => b.less(a) || a.equal(b),
            "=" | "==" => a.equal(b),
            "!=" | "<>" => !a.equal(b),
            _ => false,
        }
    }
}
