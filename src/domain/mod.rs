//! Domain logic - the version value and its transitions, free of I/O

pub mod bump;
pub mod prerelease;
pub mod version;

pub use bump::{VersionBump, VersionBumper};
pub use prerelease::{LabelAllowList, PreReleaseLabel, DEFAULT_LABELS};
pub use version::{format_version, Version};
