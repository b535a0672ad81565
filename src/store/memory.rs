use crate::domain::Version;
use crate::error::{Result, VersionError};
use crate::store::{format_line, parse_line, validate_component_name, VersionStore};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Lines {
    root: Option<String>,
    components: BTreeMap<String, String>,
}

/// In-memory store holding raw version lines, for tests
#[derive(Debug, Default)]
pub struct MemoryVersionStore {
    lines: Mutex<Lines>,
}

impl MemoryVersionStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw root line
    pub fn set_root_line(&self, line: impl Into<String>) {
        self.lock().root = Some(line.into());
    }

    /// Set a component's raw line, creating the component
    pub fn set_component_line(&self, name: impl Into<String>, line: impl Into<String>) {
        self.lock().components.insert(name.into(), line.into());
    }

    /// Raw root line as it would be persisted
    pub fn root_line(&self) -> Option<String> {
        self.lock().root.clone()
    }

    /// Raw component line as it would be persisted
    pub fn component_line(&self, name: &str) -> Option<String> {
        self.lock().components.get(name).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Lines> {
        // A poisoned lock only means a panicking test; the lines are still usable.
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl VersionStore for MemoryVersionStore {
    fn read_root(&self) -> Result<Version> {
        let line = self
            .lock()
            .root
            .clone()
            .ok_or_else(|| VersionError::store("Root version not set"))?;
        parse_line(&line)
    }

    fn write_root(&self, version: &Version) -> Result<()> {
        self.lock().root = Some(format_line(version));
        Ok(())
    }

    fn read_component(&self, name: &str) -> Result<Version> {
        validate_component_name(name)?;
        let line = self
            .component_line(name)
            .ok_or_else(|| VersionError::store(format!("Unknown component: '{}'", name)))?;
        parse_line(&line)
    }

    fn write_component(&self, name: &str, version: &Version) -> Result<()> {
        validate_component_name(name)?;
        let mut lines = self.lock();
        match lines.components.get_mut(name) {
            Some(line) => {
                *line = format_line(version);
                Ok(())
            }
            None => Err(VersionError::store(format!("Unknown component: '{}'", name))),
        }
    }

    fn list_components(&self) -> Result<Vec<(String, Version)>> {
        self.lock()
            .components
            .iter()
            .map(|(name, line)| Ok((name.clone(), parse_line(line)?)))
            .collect()
    }

    fn has_component(&self, name: &str) -> Result<bool> {
        validate_component_name(name)?;
        Ok(self.lock().components.contains_key(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_root() {
        let store = MemoryVersionStore::new();
        assert!(store.read_root().is_err());
        store.set_root_line("1.2.3\n");
        assert_eq!(store.read_root().unwrap(), Version::new(1, 2, 3));
        store.write_root(&Version::new(1, 2, 4)).unwrap();
        assert_eq!(store.root_line().as_deref(), Some("1.2.4\n"));
    }

    #[test]
    fn test_memory_store_components_sorted() {
        let store = MemoryVersionStore::new();
        store.set_component_line("zeta", "0.1.0");
        store.set_component_line("alpha", "2.0.0");
        let listed = store.list_components().unwrap();
        assert_eq!(listed[0].0, "alpha");
        assert_eq!(listed[1].0, "zeta");
    }

    #[test]
    fn test_memory_store_unknown_component() {
        let store = MemoryVersionStore::new();
        assert!(!store.has_component("nope").unwrap());
        assert!(store.read_component("nope").is_err());
        assert!(store.write_component("nope", &Version::new(1, 0, 0)).is_err());
    }
}
