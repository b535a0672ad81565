//! Version store abstraction layer
//!
//! Stored versions are single text lines: one for the root project and one per
//! named component. The [VersionStore] trait is the boundary between the pure
//! version logic in [crate::domain] and wherever those lines live.
//!
//! - [file::FileVersionStore]: `VERSION` files on disk
//! - [memory::MemoryVersionStore]: in-memory lines for tests
//!
//! ```rust
//! # use skill_version::store::VersionStore;
//! # fn example<S: VersionStore>(store: &S) -> skill_version::Result<()> {
//! let root = store.read_root()?;
//! for (name, version) in store.list_components()? {
//!     println!("{}: {} (root {})", name, version, root);
//! }
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod memory;

pub use file::FileVersionStore;
pub use memory::MemoryVersionStore;

use crate::domain::Version;
use crate::error::{Result, VersionError};

/// Parse one stored line, ignoring surrounding whitespace
pub fn parse_line(line: &str) -> Result<Version> {
    Version::parse(line.trim())
}

/// Render a version as a stored line with its trailing newline
pub fn format_line(version: &Version) -> String {
    format!("{}\n", version)
}

/// Reject component names that could escape the components directory
pub fn validate_component_name(name: &str) -> Result<()> {
    if name.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\'])
        || name.chars().any(char::is_control)
    {
        return Err(VersionError::store(format!(
            "Invalid component name: '{}'",
            name
        )));
    }
    Ok(())
}

/// Key→version mapping for the root project and named components
///
/// Implementors must be `Send + Sync`. Reads return parsed versions, so a
/// malformed stored line surfaces as [VersionError::InvalidVersion].
pub trait VersionStore: Send + Sync {
    /// Read the root project's version
    fn read_root(&self) -> Result<Version>;

    /// Persist the root project's version
    fn write_root(&self, version: &Version) -> Result<()>;

    /// Read a named component's version
    ///
    /// # Returns
    /// * `Err(VersionError::Store)` - If the component does not exist
    fn read_component(&self, name: &str) -> Result<Version>;

    /// Persist a named component's version
    fn write_component(&self, name: &str, version: &Version) -> Result<()>;

    /// List all components with their versions, sorted by name
    fn list_components(&self) -> Result<Vec<(String, Version)>>;

    /// Whether a component with this name exists
    fn has_component(&self, name: &str) -> Result<bool>;
}
