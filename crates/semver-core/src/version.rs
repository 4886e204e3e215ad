//! Semantic version value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::identifier::compare_pre_release;
use crate::version_parser::{VersionParser, VersionParserError};

/// A semantic version: `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
///
/// An empty `pre_release` or `build` string means the label is absent.
///
/// Equality covers all five fields, so two versions that differ only in
/// build metadata are *not* equal. Precedence (`less`, `cmp_precedence`)
/// ignores build metadata entirely.
#[derive(Debug, Clone, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: String,
    pub build: String,
}

impl Version {
    /// Create a release version with no labels
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: String::new(),
            build: String::new(),
        }
    }

    /// Replace the pre-release label
    pub fn with_pre_release(mut self, pre_release: impl Into<String>) -> Self {
        self.pre_release = pre_release.into();
        self
    }

    /// Replace the build label
    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = build.into();
        self
    }

    /// Get the pre-release label, if any
    pub fn pre_release(&self) -> Option<&str> {
        non_empty(&self.pre_release)
    }

    /// Get the build label, if any
    pub fn build(&self) -> Option<&str> {
        non_empty(&self.build)
    }

    /// Check if this is a pre-release version
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Check if every field, build included, matches `other`
    pub fn equal(&self, other: &Version) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
            && self.build == other.build
    }

    /// Check if `self` strictly precedes `other`
    pub fn less(&self, other: &Version) -> bool {
        self.cmp_precedence(other) == Ordering::Less
    }

    /// Compare by semantic-versioning precedence, ignoring build metadata
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| match (self.pre_release(), other.pre_release()) {
                (None, None) => Ordering::Equal,
                // A pre-release sorts before its release
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => compare_pre_release(a, b),
            })
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre_release) = self.pre_release() {
            write!(f, "-{}", pre_release)?;
        }
        if let Some(build) = self.build() {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionParser::new().parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
        self.build.hash(state);
    }
}

/// Precedence first, then build text, so that `Ord` agrees with `Eq`.
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct VersionVisitor;

        impl serde::de::Visitor<'_> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a semantic version string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Version, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(major: u64, minor: u64, patch: u64, pre_release: &str, build: &str) -> Version {
        Version {
            major,
            minor,
            patch,
            pre_release: pre_release.to_string(),
            build: build.to_string(),
        }
    }

    #[test]
    fn test_to_string() {
        let cases = [
            (v(1, 0, 0, "", ""), "1.0.0"),
            (v(1, 0, 0, "alpha", ""), "1.0.0-alpha"),
            (v(1, 0, 0, "", "0001"), "1.0.0+0001"),
            (v(1, 0, 0, "beta", "0002"), "1.0.0-beta+0002"),
            (v(10, 20, 30, "", ""), "10.20.30"),
            (v(u64::MAX, 0, 0, "", ""), "18446744073709551615.0.0"),
        ];
        for (version, expected) in cases {
            assert_eq!(version.to_string(), expected);
        }
    }

    #[test]
    fn test_builders() {
        let version = Version::new(2, 4, 0).with_pre_release("rc.1").with_build("sha.5114f85");
        assert_eq!(version, v(2, 4, 0, "rc.1", "sha.5114f85"));
        assert_eq!(version.pre_release(), Some("rc.1"));
        assert_eq!(version.build(), Some("sha.5114f85"));
        assert!(version.is_pre_release());

        let release = Version::new(2, 4, 0);
        assert_eq!(release.pre_release(), None);
        assert_eq!(release.build(), None);
        assert!(!release.is_pre_release());
        assert_eq!(Version::default(), Version::new(0, 0, 0));
    }

    #[test]
    fn test_equal() {
        assert!(v(1, 0, 0, "", "").equal(&v(1, 0, 0, "", "")));
        assert!(!v(1, 0, 0, "", "").equal(&v(1, 0, 1, "", "")));
        assert!(!v(1, 0, 0, "", "0001").equal(&v(1, 0, 0, "", "0002")));
        assert!(!v(1, 0, 0, "alpha", "").equal(&v(1, 0, 0, "", "")));
        assert!(v(1, 0, 0, "beta", "0002").equal(&v(1, 0, 0, "beta", "0002")));
    }

    #[test]
    fn test_equal_is_symmetric_and_transitive() {
        let a = v(3, 1, 4, "rc.1", "b7");
        let b = a.clone();
        let c = b.clone();
        assert!(a.equal(&a));
        assert!(a.equal(&b) && b.equal(&a));
        assert!(a.equal(&b) && b.equal(&c) && a.equal(&c));
    }

    #[test]
    fn test_less() {
        assert!(!v(1, 0, 0, "", "").less(&v(1, 0, 0, "", "")));
        assert!(v(1, 0, 0, "", "").less(&v(1, 0, 1, "", "")));
        assert!(!v(1, 1, 0, "", "").less(&v(1, 0, 1, "", "")));
        assert!(v(1, 0, 0, "alpha", "").less(&v(1, 0, 0, "beta", "")));
        assert!(v(0, 9, 9, "", "").less(&v(1, 0, 0, "", "")));
        assert!(v(1, 9, 0, "", "").less(&v(1, 10, 0, "", "")));
    }

    #[test]
    fn test_pre_release_precedes_release() {
        let pre = v(1, 0, 0, "alpha", "");
        let release = v(1, 0, 0, "", "");
        assert!(pre.less(&release));
        assert!(!release.less(&pre));
        // The core still wins over the pre-release label
        assert!(v(1, 0, 0, "", "").less(&v(1, 0, 1, "alpha", "")));
    }

    #[test]
    fn test_less_ignores_build() {
        let a = v(1, 0, 0, "", "0001");
        let b = v(1, 0, 0, "", "0002");
        assert!(!a.less(&b));
        assert!(!b.less(&a));
        assert_eq!(a.cmp_precedence(&b), Ordering::Equal);
        assert!(!a.equal(&b));
    }

    #[test]
    fn test_less_is_irreflexive() {
        for version in [
            v(0, 0, 0, "", ""),
            v(1, 0, 0, "alpha", ""),
            v(1, 0, 0, "", "0001"),
            v(1, 0, 0, "beta.11", "exp.sha"),
        ] {
            assert!(!version.less(&version));
        }
    }

    #[test]
    fn test_pre_release_identifier_precedence() {
        let ordered = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        let versions: Vec<Version> = ordered.iter().map(|s| s.parse().unwrap()).collect();
        for pair in versions.windows(2) {
            assert!(pair[0].less(&pair[1]), "{} < {}", pair[0], pair[1]);
            assert!(!pair[1].less(&pair[0]), "{} !< {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn test_ord_breaks_ties_on_build() {
        let mut versions = vec![
            v(1, 0, 0, "", "b"),
            v(1, 0, 0, "", "a"),
            v(1, 0, 0, "rc.1", ""),
            v(0, 1, 0, "", ""),
        ];
        versions.sort();
        let rendered: Vec<String> = versions.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["0.1.0", "1.0.0-rc.1", "1.0.0+a", "1.0.0+b"]);
        assert_eq!(v(1, 0, 0, "", "a").cmp(&v(1, 0, 0, "", "a")), Ordering::Equal);
    }

    #[test]
    fn test_hash_matches_eq() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(v(1, 0, 0, "", "0001"));
        set.insert(v(1, 0, 0, "", "0001"));
        set.insert(v(1, 0, 0, "", "0002"));
        assert_eq!(set.len(), 2);
    }
}
