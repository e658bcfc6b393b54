//! File metadata records.

use serde::{Deserialize, Serialize};

use tana_types::{SizeSpec, Stamp};

/// Metadata for one registered file name.
///
/// The name itself is the map key, not a field. `created_at` is `None` for
/// records made by the untimed operations; such records have no position
/// on the timeline, so they never expire and survive every rollback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Size in wire form. Assigned at creation, copied to the destination
    /// on copy, never mutated afterwards.
    pub size: SizeSpec,
    /// The instant the record was created, when known.
    pub created_at: Option<Stamp>,
    /// Seconds until expiry, counted from `created_at`. `None` never
    /// expires.
    pub ttl_seconds: Option<i64>,
}

impl FileRecord {
    /// Record for an untimed upload.
    pub fn untimed(size: SizeSpec) -> Self {
        Self {
            size,
            created_at: None,
            ttl_seconds: None,
        }
    }

    /// Record for a timed upload.
    pub fn timed(size: SizeSpec, at: Stamp, ttl_seconds: Option<i64>) -> Self {
        Self {
            size,
            created_at: Some(at),
            ttl_seconds,
        }
    }

    /// The instant this record stops being live, if it has one.
    ///
    /// `None` when there is no TTL, no creation instant to count from, or
    /// the sum leaves the representable date range.
    pub fn expires_at(&self) -> Option<Stamp> {
        let created = self.created_at?;
        let ttl = self.ttl_seconds?;
        created.checked_plus_seconds(ttl)
    }

    /// Whether this record is visible at `at`. The expiry instant itself is
    /// still live.
    pub fn is_live_at(&self, at: Stamp) -> bool {
        match self.expires_at() {
            Some(expiry) => at <= expiry,
            None => true,
        }
    }
}
