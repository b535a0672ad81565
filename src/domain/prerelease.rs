//! Pre-release labels and counter sequencing
//!
//! A label (alpha, beta, rc, or anything the configuration allows) becomes the
//! leading identifier of a pre-release, followed by a numeric counter:
//! `alpha.1`, `alpha.2`, ... According to semver.org: https://semver.org/#spec-item-9

use crate::error::{Result, VersionError};
use std::fmt;

/// Labels accepted when no configuration overrides them
pub const DEFAULT_LABELS: [&str; 3] = ["alpha", "beta", "rc"];

/// A single validated pre-release identifier used as a label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreReleaseLabel(String);

impl PreReleaseLabel {
    /// Validate a label against the SemVer identifier rule
    ///
    /// The label must be one non-empty identifier: `[0-9A-Za-z-]+`, no dots,
    /// and no leading zero if it is purely numeric.
    pub fn parse(label: &str) -> Result<Self> {
        if label.is_empty() {
            return Err(VersionError::invalid_label(label, "label is empty"));
        }
        if let Some(bad) = label
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
        {
            return Err(VersionError::invalid_label(
                label,
                format!("character '{}' is not allowed, use [0-9A-Za-z-]", bad),
            ));
        }
        if label.len() > 1 && label.starts_with('0') && label.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VersionError::invalid_label(
                label,
                "numeric label must not have leading zeros",
            ));
        }
        Ok(PreReleaseLabel(label.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compute the pre-release that follows `prior` under this label.
    ///
    /// When `prior` starts with the label and ends in a numeric identifier,
    /// the counter continues from it; otherwise a fresh `label.1` is started.
    /// The counter is incremented as decimal text, so it has no upper bound.
    ///
    /// # Examples
    /// ```
    /// use skill_version::domain::PreReleaseLabel;
    ///
    /// let alpha = PreReleaseLabel::parse("alpha").unwrap();
    /// assert_eq!(alpha.next_after(Some("alpha.1")), "alpha.2");
    /// assert_eq!(alpha.next_after(Some("beta.4")), "alpha.1");
    /// assert_eq!(alpha.next_after(None), "alpha.1");
    /// ```
    pub fn next_after(&self, prior: Option<&str>) -> String {
        match prior.and_then(|pre| self.continued_counter(pre)) {
            Some(counter) => format!("{}.{}", self.0, increment_decimal(counter)),
            None => format!("{}.1", self.0),
        }
    }

    /// Trailing counter of `prior` if it continues this label's sequence
    fn continued_counter<'a>(&self, prior: &'a str) -> Option<&'a str> {
        if !prior.starts_with(self.0.as_str()) {
            return None;
        }
        let (_, last) = prior.rsplit_once('.')?;
        if last.is_empty() || !last.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(last)
    }
}

/// Add one to a string of ASCII digits
fn increment_decimal(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    for digit in out.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return String::from_utf8_lossy(&out).into_owned();
        }
    }
    out.insert(0, b'1');
    String::from_utf8_lossy(&out).into_owned()
}

impl fmt::Display for PreReleaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allow-list of labels a bump may use
///
/// An empty list accepts any well-formed label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelAllowList {
    labels: Vec<String>,
}

impl LabelAllowList {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LabelAllowList {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Accept any label that satisfies the identifier rule
    pub fn any() -> Self {
        LabelAllowList { labels: Vec::new() }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Validate `label` and check it against the allow-list
    pub fn resolve(&self, label: &str) -> Result<PreReleaseLabel> {
        let parsed = PreReleaseLabel::parse(label)?;
        if !self.labels.is_empty() && !self.labels.iter().any(|l| l == label) {
            return Err(VersionError::invalid_label(
                label,
                format!("expected one of: {}", self.labels.join(", ")),
            ));
        }
        Ok(parsed)
    }
}

impl Default for LabelAllowList {
    fn default() -> Self {
        LabelAllowList::new(DEFAULT_LABELS)
    }
}
