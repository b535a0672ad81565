use crate::error::{Result, VersionError};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// SemVer 2.0.0 grammar, anchored at both ends.
///
/// Groups: 1 major, 2 minor, 3 patch, 4 pre-release, 5 build metadata.
const SEMVER_PATTERN: &str = concat!(
    r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)",
    r"(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
    r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
    r"(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
);

const PRE_RELEASE_PATTERN: &str = concat!(
    r"^(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
    r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*$",
);

const BUILD_PATTERN: &str = r"^[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*$";

fn compiled(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).ok()).as_ref()
}

fn semver_regex() -> Option<&'static Regex> {
    static CELL: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(&CELL, SEMVER_PATTERN)
}

fn pre_release_regex() -> Option<&'static Regex> {
    static CELL: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(&CELL, PRE_RELEASE_PATTERN)
}

fn build_regex() -> Option<&'static Regex> {
    static CELL: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(&CELL, BUILD_PATTERN)
}

/// A SemVer 2.0.0 version value.
///
/// Only constructible from text that matches the grammar (or from the
/// validated builders below), so every `Version` formats back to valid SemVer.
/// Bumping never mutates a version; it returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<String>,
    build_metadata: Option<String>,
}

impl Version {
    /// Create a final-release version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: None,
            build_metadata: None,
        }
    }

    /// Parse a version string against the full SemVer 2.0.0 grammar.
    ///
    /// No prefix (`v`) and no surrounding whitespace are accepted. Callers
    /// reading stored lines trim them first.
    ///
    /// # Example
    /// ```
    /// use skill_version::domain::Version;
    ///
    /// let v = Version::parse("1.2.3-beta.2+build.7").unwrap();
    /// assert_eq!(v.major(), 1);
    /// assert_eq!(v.pre_release(), Some("beta.2"));
    /// assert_eq!(v.build_metadata(), Some("build.7"));
    /// assert!(Version::parse("01.2.3").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let captures = semver_regex()
            .and_then(|re| re.captures(text))
            .ok_or_else(|| VersionError::invalid_version(text, diagnose(text)))?;

        let numeric = |index: usize, name: &str| -> Result<u64> {
            let digits = captures.get(index).map(|m| m.as_str()).unwrap_or_default();
            digits.parse::<u64>().map_err(|_| {
                VersionError::invalid_version(
                    text,
                    format!("{} component '{}' is out of range", name, digits),
                )
            })
        };

        let major = numeric(1, "major")?;
        let minor = numeric(2, "minor")?;
        let patch = numeric(3, "patch")?;
        let pre_release = captures.get(4).map(|m| m.as_str().to_string());
        let build_metadata = captures.get(5).map(|m| m.as_str().to_string());

        Ok(Version {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        })
    }

    /// Attach a pre-release, validated against the identifier grammar
    pub fn with_pre_release(mut self, pre_release: &str) -> Result<Self> {
        if !pre_release_regex().is_some_and(|re| re.is_match(pre_release)) {
            return Err(VersionError::invalid_version(
                format!("{}-{}", self.core(), pre_release),
                "malformed pre-release identifiers",
            ));
        }
        self.pre_release = Some(pre_release.to_string());
        Ok(self)
    }

    /// Attach build metadata, validated against the identifier grammar
    pub fn with_build_metadata(mut self, build: &str) -> Result<Self> {
        if !build_regex().is_some_and(|re| re.is_match(build)) {
            return Err(VersionError::invalid_version(
                format!("{}+{}", self.core(), build),
                "malformed build metadata identifiers",
            ));
        }
        self.build_metadata = Some(build.to_string());
        Ok(self)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Raw dot-joined pre-release text, `None` for a final release
    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    /// Raw dot-joined build metadata text
    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    /// Pre-release split into its dot-separated identifiers
    pub fn pre_release_identifiers(&self) -> Vec<&str> {
        self.pre_release()
            .map(|pre| pre.split('.').collect())
            .unwrap_or_default()
    }

    /// Build metadata split into its dot-separated identifiers
    pub fn build_identifiers(&self) -> Vec<&str> {
        self.build_metadata()
            .map(|build| build.split('.').collect())
            .unwrap_or_default()
    }

    /// True when the version carries no pre-release
    pub fn is_final_release(&self) -> bool {
        self.pre_release.is_none()
    }

    /// Compare by SemVer release precedence. Build metadata is ignored.
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| self.semver_pre().cmp(&other.semver_pre()))
    }

    /// Convert to the `semver` crate's representation
    pub fn to_semver(&self) -> semver::Version {
        semver::Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            pre: self.semver_pre(),
            build: self
                .build_metadata()
                .and_then(|build| semver::BuildMetadata::new(build).ok())
                .unwrap_or(semver::BuildMetadata::EMPTY),
        }
    }

    // Fields are grammar-checked on construction, so the fallback is unreachable.
    fn semver_pre(&self) -> semver::Prerelease {
        self.pre_release()
            .and_then(|pre| semver::Prerelease::new(pre).ok())
            .unwrap_or(semver::Prerelease::EMPTY)
    }

    fn core(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<String>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release,
            build_metadata: None,
        }
    }
}

/// Best-effort explanation of why `text` failed the grammar
fn diagnose(text: &str) -> String {
    if text.is_empty() {
        return "empty version string".to_string();
    }
    if text.trim() != text {
        return "surrounding whitespace is not allowed".to_string();
    }
    if text.starts_with('v') || text.starts_with('V') {
        return "a 'v' prefix is not part of SemVer".to_string();
    }

    let core = text.split(['-', '+']).next().unwrap_or_default();
    let parts: Vec<&str> = core.split('.').collect();
    if parts.len() != 3 {
        return format!("expected MAJOR.MINOR.PATCH, found {} component(s)", parts.len());
    }
    if parts.iter().any(|p| p.len() > 1 && p.starts_with('0')) {
        return "numeric components must not have leading zeros".to_string();
    }
    if text.ends_with('-') || text.ends_with('+') || text.contains("..") {
        return "empty pre-release or build identifier".to_string();
    }
    "does not match the SemVer 2.0.0 grammar".to_string()
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build_metadata {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// Serialize a version to its canonical SemVer text
pub fn format_version(version: &Version) -> String {
    version.to_string()
}
