//! Lock-guarded registry handle.
//!
//! The registry itself is single-threaded. Embedders that share one
//! instance across threads go through [`SharedRegistry`], which holds a
//! single mutex for the duration of each operation: copy reads the source
//! and writes the destination and must observe one consistent snapshot.

use std::sync::Arc;

use parking_lot::Mutex;

use tana_types::{SizeSpec, Stamp};

use crate::error::RegistryResult;
use crate::record::FileRecord;
use crate::registry::Registry;

/// Cloneable, thread-safe handle to a [`Registry`].
#[derive(Clone, Debug, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    /// Create a handle to a fresh, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with the registry locked.
    ///
    /// For multi-step sequences that must be atomic as a whole.
    pub fn with<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// See [`Registry::upload`].
    pub fn upload(&self, name: impl Into<String>, size: SizeSpec) -> RegistryResult<()> {
        self.inner.lock().upload(name, size)
    }

    /// See [`Registry::get`]. Returns an owned clone of the record.
    pub fn get(&self, name: &str) -> Option<FileRecord> {
        self.inner.lock().get(name).cloned()
    }

    /// See [`Registry::copy`].
    pub fn copy(&self, source: &str, dest: impl Into<String>) -> RegistryResult<()> {
        self.inner.lock().copy(source, dest)
    }

    /// See [`Registry::search`].
    pub fn search(&self, prefix: &str) -> Vec<String> {
        self.inner.lock().search(prefix)
    }

    /// See [`Registry::upload_at`].
    pub fn upload_at(
        &self,
        at: Stamp,
        name: impl Into<String>,
        size: SizeSpec,
        ttl_seconds: Option<i64>,
    ) -> RegistryResult<()> {
        self.inner.lock().upload_at(at, name, size, ttl_seconds)
    }

    /// See [`Registry::get_at`]. Returns an owned clone of the record.
    pub fn get_at(&self, at: Stamp, name: &str) -> Option<FileRecord> {
        self.inner.lock().get_at(at, name).cloned()
    }

    /// See [`Registry::copy_at`].
    pub fn copy_at(&self, at: Stamp, source: &str, dest: impl Into<String>) -> RegistryResult<()> {
        self.inner.lock().copy_at(at, source, dest)
    }

    /// See [`Registry::search_at`].
    pub fn search_at(&self, at: Stamp, prefix: &str) -> Vec<String> {
        self.inner.lock().search_at(at, prefix)
    }

    /// See [`Registry::rollback`].
    pub fn rollback(&self, at: Stamp) -> usize {
        self.inner.lock().rollback(at)
    }
}
