//! Workflow orchestration
//!
//! Ties the version store to the pure bump logic. Kept separate from
//! `main.rs` so the workflows can be driven without clap.

use std::fmt;

use crate::domain::{Version, VersionBump, VersionBumper};
use crate::error::{Result, VersionError};
use crate::store::VersionStore;

/// Which stored version a bump applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpTarget {
    Root,
    Component(String),
}

impl fmt::Display for BumpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpTarget::Root => write!(f, "Root"),
            BumpTarget::Component(name) => write!(f, "{}", name),
        }
    }
}

/// Arguments for the bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpRequest {
    pub target: BumpTarget,
    pub level: VersionBump,
    pub pre_release: Option<String>,
    /// Compute the new version without writing it
    pub dry_run: bool,
}

impl BumpRequest {
    /// Build a request from CLI positionals: `<level>` or `<component> <level>`
    pub fn from_positionals(
        first: &str,
        second: Option<&str>,
        pre_release: Option<String>,
        dry_run: bool,
    ) -> Result<Self> {
        let (target, level) = match second {
            Some(level) => (BumpTarget::Component(first.to_string()), level),
            None => (BumpTarget::Root, first),
        };
        Ok(BumpRequest {
            target,
            level: level.parse()?,
            pre_release,
            dry_run,
        })
    }
}

/// Result of a bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    pub target: BumpTarget,
    pub previous: Version,
    pub current: Version,
    /// Whether the new version was persisted
    pub written: bool,
}

/// Root and component versions at a glance
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub root: Version,
    pub components: Vec<(String, Version)>,
}

/// Collect the root version and every component version
pub fn run_status<S: VersionStore + ?Sized>(store: &S) -> Result<StatusReport> {
    Ok(StatusReport {
        root: store.read_root()?,
        components: store.list_components()?,
    })
}

/// List components with their versions
pub fn run_list<S: VersionStore + ?Sized>(store: &S) -> Result<Vec<(String, Version)>> {
    store.list_components()
}

/// Bump workflow
///
/// 1. Resolve the target (root or an existing component)
/// 2. Read and parse its stored version
/// 3. Bump with the requested level and label
/// 4. Persist the formatted result unless `dry_run`
///
/// Nothing is written if any step fails.
pub fn run_bump<S: VersionStore + ?Sized>(
    store: &S,
    bumper: &VersionBumper,
    request: &BumpRequest,
) -> Result<BumpOutcome> {
    let previous = match &request.target {
        BumpTarget::Root => store.read_root()?,
        BumpTarget::Component(name) => {
            if !store.has_component(name)? {
                return Err(VersionError::store(format!("Unknown component: '{}'", name)));
            }
            store.read_component(name)?
        }
    };

    let current = bumper.bump(&previous, request.level, request.pre_release.as_deref())?;

    if request.dry_run {
        tracing::debug!(target_name = %request.target, %current, "dry run, not writing");
    } else {
        match &request.target {
            BumpTarget::Root => store.write_root(&current)?,
            BumpTarget::Component(name) => store.write_component(name, &current)?,
        }
        tracing::info!(
            target_name = %request.target,
            level = %request.level,
            from = %previous,
            to = %current,
            "bumped version"
        );
    }

    Ok(BumpOutcome {
        target: request.target.clone(),
        previous,
        current,
        written: !request.dry_run,
    })
}
