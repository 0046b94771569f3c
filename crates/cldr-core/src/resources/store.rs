//! The memoizing resource store.

use std::path::PathBuf;
use std::sync::Arc;

use bon::Builder;
use cldr_layout::{LOCALES_ROOT, ResourceKind};
use tracing::{debug, trace};

use crate::resources::backend::{FsBackend, ResourceBackend};
use crate::resources::binary::decode_binary;
use crate::resources::cache::MemoCache;
use crate::resources::merge::deep_merge;
use crate::resources::path::{ResourcePath, canonical_locale};
use crate::resources::yaml::decode_structured;
use crate::resources::{ResourceError, ResourceValue};

/// Which resources of a locale to preload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preload {
    /// Every resource stored under the locale directory.
    All,
    /// Only the named resources.
    Only(Vec<String>),
}

impl Preload {
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Preload::Only(names.into_iter().map(Into::into).collect())
    }
}

/// Lazy, memoizing access to a tree of locale and shared resources.
///
/// Each resource is read from the backend and decoded on first access, then
/// served from the cache for the life of the store. Structured resources are
/// deep-merged with their `custom/` mirror when one exists and
/// `merge_custom` is enabled. Failed loads are never cached.
///
/// # Example
///
/// ```
/// use cldr_core::{MemoryBackend, ResourceStore, ResourceValue};
///
/// let backend = MemoryBackend::new();
/// backend.insert("locales/en/numbers.yml", "numbers:\n  symbols:\n    group: ','\n");
///
/// let store = ResourceStore::builder().backend(backend).build();
/// let numbers = store.get_locale_resource("en", "numbers").unwrap();
/// assert_eq!(
///     numbers.lookup(&["numbers", "symbols", "group"]).and_then(ResourceValue::as_str),
///     Some(",")
/// );
/// assert!(store.locale_resource_loaded("en", "numbers"));
/// ```
#[derive(Builder)]
pub struct ResourceStore<B> {
    /// Backing storage the resources are read from.
    backend: B,

    /// Whether structured resources are merged with their `custom/` mirror.
    #[builder(default = true)]
    merge_custom: bool,

    /// Locales considered supported by the bulk preload operations.
    #[builder(default)]
    locales: Vec<String>,

    #[builder(skip)]
    cache: MemoCache<String, ResourceValue>,
}

impl ResourceStore<FsBackend> {
    /// Create a store over a resources directory on disk.
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        ResourceStore::builder().backend(FsBackend::new(root)).build()
    }
}

impl<B: ResourceBackend> ResourceStore<B> {
    /// Create a store with default settings over `backend`.
    pub fn new(backend: B) -> Self {
        ResourceStore::builder().backend(backend).build()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn merges_custom(&self) -> bool {
        self.merge_custom
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Get a resource, loading and caching it on first access.
    ///
    /// Returns [`ResourceError::NotFound`] when the key is absent from the
    /// backend at the time of the call. Errors are not cached, so a later
    /// call succeeds once the data exists.
    pub fn get(&self, path: &ResourcePath) -> Result<Arc<ResourceValue>, ResourceError> {
        let key = path.key().to_string();
        if let Some(value) = self.cache.get(&key) {
            trace!(key = %key, "resource cache hit");
            return Ok(value);
        }
        self.cache.fetch_or_compute(&key, || self.load(path))
    }

    /// Get a resource addressed by naming segments.
    pub fn get_resource<I, S>(&self, segments: I) -> Result<Arc<ResourceValue>, ResourceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.get(&ResourcePath::new(segments))
    }

    /// Whether the backend holds `path`. Never loads it.
    pub fn exists(&self, path: &ResourcePath) -> bool {
        self.backend.exists(path.key())
    }

    /// Whether `path` has been loaded into the cache.
    pub fn is_loaded(&self, path: &ResourcePath) -> bool {
        self.cache.contains(&path.key().to_string())
    }

    // =========================================================================
    // Locale Addressing
    // =========================================================================

    /// The path of a named resource for `locale`.
    pub fn locale_path(&self, locale: &str, name: &str) -> Result<ResourcePath, ResourceError> {
        ResourcePath::for_locale(locale, name)
    }

    /// The path of a locale-independent resource.
    pub fn shared_path(&self, name: &str) -> ResourcePath {
        ResourcePath::shared(name)
    }

    pub fn get_locale_resource(
        &self,
        locale: &str,
        name: &str,
    ) -> Result<Arc<ResourceValue>, ResourceError> {
        self.get(&self.locale_path(locale, name)?)
    }

    pub fn locale_resource_exists(&self, locale: &str, name: &str) -> bool {
        self.locale_path(locale, name)
            .is_ok_and(|path| self.exists(&path))
    }

    pub fn locale_resource_loaded(&self, locale: &str, name: &str) -> bool {
        self.locale_path(locale, name)
            .is_ok_and(|path| self.is_loaded(&path))
    }

    /// Names of the resources stored for `locale`, without extensions.
    pub fn resource_types_for(&self, locale: &str) -> Result<Vec<String>, ResourceError> {
        let locale = canonical_locale(locale)?;
        let mut names: Vec<String> = self
            .backend
            .list(&format!("{LOCALES_ROOT}/{locale}"))
            .into_iter()
            .map(|file| match file.rsplit_once('.') {
                Some((stem, _)) if !stem.is_empty() => stem.to_string(),
                _ => file,
            })
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    // =========================================================================
    // Preloading
    // =========================================================================

    /// Load resources of one locale eagerly.
    pub fn preload_resources_for_locale(
        &self,
        locale: &str,
        resources: &Preload,
    ) -> Result<(), ResourceError> {
        let names = match resources {
            Preload::All => self.resource_types_for(locale)?,
            Preload::Only(names) => names.clone(),
        };
        debug!(locale, count = names.len(), "preloading locale resources");
        for name in &names {
            self.get_locale_resource(locale, name)?;
        }
        Ok(())
    }

    /// Load one named resource for each of `locales`.
    pub fn preload_resource_for_locales(
        &self,
        name: &str,
        locales: &[&str],
    ) -> Result<(), ResourceError> {
        let only = Preload::only([name]);
        for locale in locales {
            self.preload_resources_for_locale(locale, &only)?;
        }
        Ok(())
    }

    /// Load the named resources for every supported locale.
    pub fn preload_resources_for_all_locales(&self, names: &[&str]) -> Result<(), ResourceError> {
        let only = Preload::only(names.iter().copied());
        for locale in &self.locales {
            self.preload_resources_for_locale(locale, &only)?;
        }
        Ok(())
    }

    /// Load every resource of every supported locale.
    pub fn preload_all_resources(&self) -> Result<(), ResourceError> {
        for locale in &self.locales {
            self.preload_resources_for_locale(locale, &Preload::All)?;
        }
        Ok(())
    }

    // =========================================================================
    // Loading
    // =========================================================================

    fn load(&self, path: &ResourcePath) -> Result<ResourceValue, ResourceError> {
        let key = path.key();
        debug!(key, kind = ?path.kind(), "loading resource");
        let bytes = self.backend.read(key)?;
        match path.kind() {
            ResourceKind::Structured => {
                let mut value = decode_structured(key, &bytes)?;
                if self.merge_custom {
                    self.merge_custom_override(path, &mut value)?;
                }
                Ok(value)
            }
            ResourceKind::Binary => decode_binary(key, &bytes),
            ResourceKind::Raw => Ok(ResourceValue::Bytes(bytes)),
        }
    }

    /// Deep-merge the `custom/` mirror of `path` over `base`, if it exists.
    fn merge_custom_override(
        &self,
        path: &ResourcePath,
        base: &mut ResourceValue,
    ) -> Result<(), ResourceError> {
        if !path.kind().merges_custom() {
            return Ok(());
        }
        let custom = path.custom();
        if !self.backend.exists(custom.key()) {
            return Ok(());
        }
        let bytes = self.backend.read(custom.key())?;
        let overlay = decode_structured(custom.key(), &bytes)?;
        debug!(key = path.key(), custom = custom.key(), "merging custom resource");
        deep_merge(base, overlay);
        Ok(())
    }
}
