//! In-memory file registry state machine.
//!
//! [`Registry`] maps file names to metadata records and answers the command
//! vocabulary from `tana-types` in two modes: untimed (`upload`, `get`,
//! `copy`, `search`) and timed (`upload_at`, `get_at`, `copy_at`,
//! `search_at`, `rollback`), where every operation carries an explicit
//! instant, records may expire, and history can be rewound.
//!
//! Each operation is an atomic transition from one map snapshot to the
//! next; failures leave the map untouched. The registry itself is
//! single-threaded; [`SharedRegistry`] wraps it in a mutex for embedders
//! that need to share one instance across threads.

pub mod error;
pub mod record;
pub mod registry;
pub mod shared;

pub use error::{RegistryError, RegistryResult};
pub use record::FileRecord;
pub use registry::Registry;
pub use shared::SharedRegistry;
