//! Backing storage for resource files.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use crate::resources::ResourceError;

/// Read access to a tree of resource files addressed by `/`-separated keys.
///
/// Implementations report a missing key from [`read`](Self::read) as
/// [`ResourceError::NotFound`].
pub trait ResourceBackend {
    /// Whether a file exists at `key`. Never reads the payload.
    fn exists(&self, key: &str) -> bool;

    /// Read the full payload stored at `key`.
    fn read(&self, key: &str) -> Result<Vec<u8>, ResourceError>;

    /// File names stored directly under the directory `dir`, sorted.
    fn list(&self, dir: &str) -> Vec<String>;
}

impl<B: ResourceBackend + ?Sized> ResourceBackend for Arc<B> {
    fn exists(&self, key: &str) -> bool {
        (**self).exists(key)
    }

    fn read(&self, key: &str) -> Result<Vec<u8>, ResourceError> {
        (**self).read(key)
    }

    fn list(&self, dir: &str) -> Vec<String> {
        (**self).list(dir)
    }
}

impl<B: ResourceBackend + ?Sized> ResourceBackend for &B {
    fn exists(&self, key: &str) -> bool {
        (**self).exists(key)
    }

    fn read(&self, key: &str) -> Result<Vec<u8>, ResourceError> {
        (**self).read(key)
    }

    fn list(&self, dir: &str) -> Vec<String> {
        (**self).list(dir)
    }
}

/// Resource files on the local filesystem, below a root directory.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a key below the root.
    ///
    /// Returns `None` for keys that are absolute or contain `..`.
    pub fn absolute_path(&self, key: &str) -> Option<PathBuf> {
        let relative = Path::new(key);
        relative
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
            .then(|| self.root.join(relative))
    }
}

impl ResourceBackend for FsBackend {
    fn exists(&self, key: &str) -> bool {
        self.absolute_path(key).as_deref().is_some_and(Path::is_file)
    }

    fn read(&self, key: &str) -> Result<Vec<u8>, ResourceError> {
        let path = match self.absolute_path(key) {
            Some(path) if path.is_file() => path,
            _ => {
                return Err(ResourceError::NotFound {
                    key: key.to_string(),
                });
            }
        };
        fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ResourceError::NotFound {
                key: key.to_string(),
            },
            _ => ResourceError::Io {
                key: key.to_string(),
                source,
            },
        })
    }

    fn list(&self, dir: &str) -> Vec<String> {
        let Some(Ok(entries)) = self.absolute_path(dir).map(fs::read_dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }
}

/// An in-memory resource tree that can be written at runtime.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    files: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `contents` at `key`, replacing any previous payload.
    pub fn insert(&self, key: impl Into<String>, contents: impl Into<Vec<u8>>) {
        let mut files = self.files.write().unwrap_or_else(PoisonError::into_inner);
        files.insert(key.into(), contents.into());
    }

    /// Remove the payload at `key`, returning it if present.
    pub fn remove(&self, key: &str) -> Option<Vec<u8>> {
        let mut files = self.files.write().unwrap_or_else(PoisonError::into_inner);
        files.remove(key)
    }
}

impl ResourceBackend for MemoryBackend {
    fn exists(&self, key: &str) -> bool {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        files.contains_key(key)
    }

    fn read(&self, key: &str) -> Result<Vec<u8>, ResourceError> {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        files
            .get(key)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound {
                key: key.to_string(),
            })
    }

    fn list(&self, dir: &str) -> Vec<String> {
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        files
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .filter(|rest| !rest.contains('/'))
            .map(str::to_string)
            .collect()
    }
}
