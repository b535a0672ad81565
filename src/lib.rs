pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod store;
pub mod ui;

pub use domain::{format_version, Version, VersionBump, VersionBumper};
pub use error::{Result, VersionError};
