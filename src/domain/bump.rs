use crate::domain::prerelease::{LabelAllowList, PreReleaseLabel};
use crate::domain::version::Version;
use crate::error::{Result, VersionError};
use std::fmt;
use std::str::FromStr;

/// Version bump level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl VersionBump {
    pub const ALL: [VersionBump; 3] = [VersionBump::Major, VersionBump::Minor, VersionBump::Patch];

    pub fn as_str(&self) -> &'static str {
        match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        }
    }
}

impl FromStr for VersionBump {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(VersionBump::Major),
            "minor" => Ok(VersionBump::Minor),
            "patch" => Ok(VersionBump::Patch),
            other => Err(VersionError::invalid_level(other)),
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Version {
    /// Bump version according to level and optional pre-release label.
    ///
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    ///
    /// With no label the result is a final release. With a label, the counter
    /// continues if the prior pre-release was of the same label, otherwise
    /// restarts at 1. Build metadata is always dropped.
    ///
    /// The numeric bump applies even when continuing a counter, so two patch
    /// bumps with `alpha` from `1.0.0` give `1.0.2-alpha.2`.
    pub fn bump(&self, level: VersionBump, label: Option<&PreReleaseLabel>) -> Result<Version> {
        let prior_pre_release = self.pre_release();

        let overflow = |component: &str| {
            VersionError::invalid_version(
                self.to_string(),
                format!("{} component overflows", component),
            )
        };

        let (major, minor, patch) = match level {
            VersionBump::Major => (
                self.major().checked_add(1).ok_or_else(|| overflow("major"))?,
                0,
                0,
            ),
            VersionBump::Minor => (
                self.major(),
                self.minor().checked_add(1).ok_or_else(|| overflow("minor"))?,
                0,
            ),
            VersionBump::Patch => (
                self.major(),
                self.minor(),
                self.patch().checked_add(1).ok_or_else(|| overflow("patch"))?,
            ),
        };

        let pre_release = match label {
            Some(label) => Some(label.next_after(prior_pre_release)),
            None => None,
        };

        Ok(Version::from_parts(major, minor, patch, pre_release))
    }
}

/// Applies bumps with pre-release labels checked against an allow-list
#[derive(Debug, Clone, Default)]
pub struct VersionBumper {
    labels: LabelAllowList,
}

impl VersionBumper {
    pub fn new(labels: LabelAllowList) -> Self {
        VersionBumper { labels }
    }

    /// Bump `version`, validating the label before anything is computed
    pub fn bump(
        &self,
        version: &Version,
        level: VersionBump,
        pre_release_label: Option<&str>,
    ) -> Result<Version> {
        let label = pre_release_label
            .map(|l| self.labels.resolve(l))
            .transpose()?;
        version.bump(level, label.as_ref())
    }

    /// Same as [`VersionBumper::bump`] with the level given as text
    pub fn bump_str(
        &self,
        version: &Version,
        level: &str,
        pre_release_label: Option<&str>,
    ) -> Result<Version> {
        let level = level.parse::<VersionBump>()?;
        self.bump(version, level, pre_release_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn bumper() -> VersionBumper {
        VersionBumper::default()
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("major".parse::<VersionBump>().unwrap(), VersionBump::Major);
        assert_eq!("minor".parse::<VersionBump>().unwrap(), VersionBump::Minor);
        assert_eq!("patch".parse::<VersionBump>().unwrap(), VersionBump::Patch);
    }

    #[test]
    fn test_level_parse_invalid() {
        for bad in ["Major", "huge", "", " patch"] {
            let err = bad.parse::<VersionBump>().unwrap_err();
            assert!(matches!(err, VersionError::InvalidLevel { ref level } if level == bad));
        }
    }

    #[test]
    fn test_level_display() {
        for level in VersionBump::ALL {
            assert_eq!(level.to_string().parse::<VersionBump>().unwrap(), level);
        }
    }

    #[test]
    fn test_version_bump_major() {
        assert_eq!(bumper().bump(&v("1.2.3"), VersionBump::Major, None).unwrap(), v("2.0.0"));
    }

    #[test]
    fn test_version_bump_minor() {
        assert_eq!(bumper().bump(&v("2.0.0"), VersionBump::Minor, None).unwrap(), v("2.1.0"));
        assert_eq!(bumper().bump(&v("1.2.3"), VersionBump::Minor, None).unwrap(), v("1.3.0"));
    }

    #[test]
    fn test_version_bump_patch() {
        assert_eq!(bumper().bump(&v("1.2.3"), VersionBump::Patch, None).unwrap(), v("1.2.4"));
    }

    #[test]
    fn test_bump_with_label_starts_counter() {
        assert_eq!(
            bumper().bump(&v("1.0.0"), VersionBump::Patch, Some("alpha")).unwrap(),
            v("1.0.1-alpha.1")
        );
    }

    #[test]
    fn test_repeated_label_bumps_compound() {
        let first = bumper().bump(&v("1.0.0"), VersionBump::Patch, Some("alpha")).unwrap();
        let second = bumper().bump(&first, VersionBump::Patch, Some("alpha")).unwrap();
        assert_eq!(second.to_string(), "1.0.2-alpha.2");
    }

    #[test]
    fn test_different_label_resets_counter() {
        assert_eq!(
            bumper().bump(&v("1.0.1-alpha.1"), VersionBump::Patch, Some("beta")).unwrap(),
            v("1.0.2-beta.1")
        );
    }

    #[test]
    fn test_bump_without_label_strips_pre_release() {
        assert_eq!(bumper().bump(&v("1.2.3-alpha.1"), VersionBump::Major, None).unwrap(), v("2.0.0"));
    }

    #[test]
    fn test_bump_clears_build_metadata() {
        for level in VersionBump::ALL {
            let bumped = bumper().bump(&v("1.2.3-rc.1+build.5"), level, None).unwrap();
            assert_eq!(bumped.build_metadata(), None);
            let bumped = bumper().bump(&v("1.2.3+build.5"), level, Some("rc")).unwrap();
            assert_eq!(bumped.build_metadata(), None);
        }
    }

    #[test]
    fn test_bump_does_not_touch_input() {
        let original = v("1.2.3-beta.4+meta");
        let _ = bumper().bump(&original, VersionBump::Minor, Some("beta")).unwrap();
        assert_eq!(original.to_string(), "1.2.3-beta.4+meta");
    }

    #[test]
    fn test_minor_bump_continues_counter() {
        assert_eq!(
            bumper().bump(&v("1.2.3-rc.2"), VersionBump::Minor, Some("rc")).unwrap(),
            v("1.3.0-rc.3")
        );
    }

    #[test]
    fn test_bump_rejects_label_outside_allow_list() {
        let err = bumper().bump(&v("1.0.0"), VersionBump::Patch, Some("gamma")).unwrap_err();
        assert!(matches!(err, VersionError::InvalidPreReleaseLabel { ref label, .. } if label == "gamma"));
    }

    #[test]
    fn test_bump_rejects_malformed_label() {
        let open = VersionBumper::new(LabelAllowList::any());
        let err = open.bump(&v("1.0.0"), VersionBump::Patch, Some("al.pha")).unwrap_err();
        assert!(matches!(err, VersionError::InvalidPreReleaseLabel { .. }));
        assert!(open.bump(&v("1.0.0"), VersionBump::Patch, Some("nightly")).is_ok());
    }

    #[test]
    fn test_bump_str_rejects_unknown_level() {
        let err = bumper().bump_str(&v("1.0.0"), "mega", None).unwrap_err();
        assert!(matches!(err, VersionError::InvalidLevel { ref level } if level == "mega"));
        assert_eq!(bumper().bump_str(&v("1.0.0"), "minor", None).unwrap(), v("1.1.0"));
    }

    #[test]
    fn test_bump_continues_counter_beyond_u64() {
        let big = v("1.0.0-rc.18446744073709551616");
        let bumped = bumper().bump(&big, VersionBump::Patch, Some("rc")).unwrap();
        assert_eq!(bumped.to_string(), "1.0.1-rc.18446744073709551617");
        assert_eq!(Version::parse(&bumped.to_string()).unwrap(), bumped);
    }

    #[test]
    fn test_bump_overflow() {
        let max = Version::new(u64::MAX, 0, 0);
        let err = bumper().bump(&max, VersionBump::Major, None).unwrap_err();
        assert!(matches!(err, VersionError::InvalidVersion { .. }));
        assert!(err.to_string().contains("major component overflows"));
    }
}
