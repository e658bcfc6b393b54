//! The registry state machine.

use std::collections::HashMap;

use tracing::debug;

use tana_types::{SizeSpec, Stamp};

use crate::error::{RegistryError, RegistryResult};
use crate::record::FileRecord;

/// Search replies carry at most this many names.
pub const SEARCH_LIMIT: usize = 10;

/// In-memory registry of file names to metadata records.
///
/// Names are unique; a name is never implicitly overwritten except by copy,
/// which replaces the destination. Every operation is an atomic transition;
/// on failure the map is untouched.
#[derive(Debug, Default)]
pub struct Registry {
    files: HashMap<String, FileRecord>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered names, expired records included.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no names are registered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    // ========================================================================
    // Untimed operations
    // ========================================================================

    /// Register a new file name.
    ///
    /// Fails with [`RegistryError::AlreadyExists`] if the name is present.
    pub fn upload(&mut self, name: impl Into<String>, size: SizeSpec) -> RegistryResult<()> {
        let name = name.into();
        if self.files.contains_key(&name) {
            return Err(RegistryError::already_exists(name));
        }
        debug!(name = %name, size = %size, "upload");
        self.files.insert(name, FileRecord::untimed(size));
        Ok(())
    }

    /// Look a file up by name. Absence is a normal negative result.
    pub fn get(&self, name: &str) -> Option<&FileRecord> {
        self.files.get(name)
    }

    /// Duplicate `source`'s record under `dest`, creating or overwriting it.
    ///
    /// The whole record is cloned, creation instant and TTL included, so
    /// an untimed copy of a timed record keeps its expiry.
    pub fn copy(&mut self, source: &str, dest: impl Into<String>) -> RegistryResult<()> {
        let record = self
            .files
            .get(source)
            .cloned()
            .ok_or_else(|| RegistryError::source_not_found(source))?;
        let dest = dest.into();
        debug!(source = %source, dest = %dest, "copy");
        self.files.insert(dest, record);
        Ok(())
    }

    /// Names starting with `prefix`, ranked by descending size magnitude
    /// then ascending name, truncated to [`SEARCH_LIMIT`].
    pub fn search(&self, prefix: &str) -> Vec<String> {
        self.ranked(prefix, None)
    }

    // ========================================================================
    // Timed operations
    // ========================================================================

    /// Register a new file at an explicit instant, optionally with a TTL.
    ///
    /// Uniqueness is decided by presence alone: a name held by an expired
    /// record still collides.
    pub fn upload_at(
        &mut self,
        at: Stamp,
        name: impl Into<String>,
        size: SizeSpec,
        ttl_seconds: Option<i64>,
    ) -> RegistryResult<()> {
        let name = name.into();
        if self.files.contains_key(&name) {
            return Err(RegistryError::already_exists(name));
        }
        debug!(name = %name, size = %size, at = %at, ttl = ?ttl_seconds, "upload_at");
        self.files.insert(name, FileRecord::timed(size, at, ttl_seconds));
        Ok(())
    }

    /// Look a file up as of `at`. Expired records are invisible.
    pub fn get_at(&self, at: Stamp, name: &str) -> Option<&FileRecord> {
        self.files.get(name).filter(|rec| rec.is_live_at(at))
    }

    /// Copy with a fresh creation instant.
    ///
    /// The source must be present and live at `at`. The destination gets
    /// `created_at = at` and inherits the source's size and TTL.
    pub fn copy_at(
        &mut self,
        at: Stamp,
        source: &str,
        dest: impl Into<String>,
    ) -> RegistryResult<()> {
        let record = self
            .files
            .get(source)
            .filter(|rec| rec.is_live_at(at))
            .ok_or_else(|| RegistryError::source_not_found(source))?;
        let copied = FileRecord::timed(record.size.clone(), at, record.ttl_seconds);
        let dest = dest.into();
        debug!(source = %source, dest = %dest, at = %at, "copy_at");
        self.files.insert(dest, copied);
        Ok(())
    }

    /// Prefix search restricted to records live at `at`. Ranking matches
    /// [`Registry::search`].
    pub fn search_at(&self, at: Stamp, prefix: &str) -> Vec<String> {
        self.ranked(prefix, Some(at))
    }

    /// Discard every record created at or after `at`; keep the rest
    /// untouched (TTLs of survivors are not adjusted).
    ///
    /// Records with no creation instant predate every instant and always
    /// survive. Returns the number of records removed.
    ///
    /// When a copy overwrote a destination that predated `at`, the
    /// destination's pre-copy state is gone: rollback removes the copy and
    /// restores nothing in its place.
    pub fn rollback(&mut self, at: Stamp) -> usize {
        let before = self.files.len();
        self.files
            .retain(|_, rec| rec.created_at.is_none_or(|created| created < at));
        let removed = before - self.files.len();
        debug!(at = %at, removed, "rollback");
        removed
    }

    fn ranked(&self, prefix: &str, live_at: Option<Stamp>) -> Vec<String> {
        let mut matches: Vec<(&String, &FileRecord)> = self
            .files
            .iter()
            .filter(|(name, rec)| {
                name.starts_with(prefix) && live_at.is_none_or(|at| rec.is_live_at(at))
            })
            .collect();
        matches.sort_by(|(a_name, a_rec), (b_name, b_rec)| {
            b_rec
                .size
                .magnitude()
                .cmp(&a_rec.size.magnitude())
                .then_with(|| a_name.cmp(b_name))
        });
        matches
            .into_iter()
            .take(SEARCH_LIMIT)
            .map(|(name, _)| name.clone())
            .collect()
    }
}
