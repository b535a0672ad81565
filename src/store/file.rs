use crate::config::StoreConfig;
use crate::domain::Version;
use crate::error::{Result, VersionError};
use crate::store::{format_line, parse_line, validate_component_name, VersionStore};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Version store backed by `VERSION` files
///
/// Layout, with the default names:
/// - `<root>/VERSION`
/// - `<root>/skills/<name>/VERSION`
#[derive(Debug, Clone)]
pub struct FileVersionStore {
    root: PathBuf,
    version_file: String,
    components_dir: String,
}

impl FileVersionStore {
    /// Open a store rooted at `root` with the default layout
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_layout(root, &StoreConfig::default())
    }

    /// Open a store rooted at `root` using the configured file names
    pub fn with_layout(root: impl Into<PathBuf>, layout: &StoreConfig) -> Self {
        FileVersionStore {
            root: root.into(),
            version_file: layout.version_file.clone(),
            components_dir: layout.components_dir.clone(),
        }
    }

    fn root_file(&self) -> PathBuf {
        self.root.join(&self.version_file)
    }

    fn components_path(&self) -> PathBuf {
        self.root.join(&self.components_dir)
    }

    fn component_file(&self, name: &str) -> Result<PathBuf> {
        validate_component_name(name)?;
        Ok(self.components_path().join(name).join(&self.version_file))
    }

    fn read_file(path: &Path) -> Result<Version> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                VersionError::store(format!("Version file not found: {}", path.display()))
            }
            _ => VersionError::Io(e),
        })?;
        tracing::debug!(path = %path.display(), "read version file");
        parse_line(&content)
    }

    fn write_file(path: &Path, version: &Version) -> Result<()> {
        fs::write(path, format_line(version))?;
        tracing::debug!(path = %path.display(), %version, "wrote version file");
        Ok(())
    }
}

impl VersionStore for FileVersionStore {
    fn read_root(&self) -> Result<Version> {
        Self::read_file(&self.root_file())
    }

    fn write_root(&self, version: &Version) -> Result<()> {
        Self::write_file(&self.root_file(), version)
    }

    fn read_component(&self, name: &str) -> Result<Version> {
        let path = self.component_file(name)?;
        if !path.is_file() {
            return Err(VersionError::store(format!("Unknown component: '{}'", name)));
        }
        Self::read_file(&path)
    }

    fn write_component(&self, name: &str, version: &Version) -> Result<()> {
        let path = self.component_file(name)?;
        if !path.parent().is_some_and(Path::is_dir) {
            return Err(VersionError::store(format!("Unknown component: '{}'", name)));
        }
        Self::write_file(&path, version)
    }

    fn list_components(&self) -> Result<Vec<(String, Version)>> {
        let dir = self.components_path();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %dir.display(), "no components directory");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut components = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            let version_path = entry.path().join(&self.version_file);
            if version_path.is_file() {
                let version = Self::read_file(&version_path).map_err(|e| {
                    VersionError::store(format!(
                        "skill '{}' ({}): {}",
                        name,
                        version_path.display(),
                        e
                    ))
                })?;
                components.push((name, version));
            }
        }

        components.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(components)
    }

    fn has_component(&self, name: &str) -> Result<bool> {
        Ok(self.component_file(name)?.is_file())
    }
}
