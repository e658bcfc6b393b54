//! Command, reply, and field-encoding vocabulary for the tana registry.
//!
//! This crate is the shared vocabulary: the closed set of commands the
//! registry answers, the replies it produces, and the two field-encoding
//! newtypes those carry. It has **no internal tana dependencies**: a pure
//! leaf crate that the registry and the batch runner build on.
//!
//! # Key Types
//!
//! |------------------|-----------------------------------------------|
//! | Type             | Purpose                                       |
//! |------------------|-----------------------------------------------|
//! | [`Command`]      | One parsed command (typed arguments)          |
//! | [`CommandTag`]   | The closed set of wire operation tags         |
//! | [`Reply`]        | One command's successful result               |
//! | [`SizeSpec`]     | File size: integer magnitude + unit suffix    |
//! | [`Stamp`]        | ISO-8601 date-time, totally ordered           |
//! |------------------|-----------------------------------------------|
//!
//! Commands arrive as tagged string rows (`["FILE_UPLOAD", "a.txt",
//! "10gb"]`). [`Command::parse_row`] turns a row into a typed variant,
//! rejecting unknown tags, wrong arities, and malformed fields up front so
//! the registry itself never sees a half-valid command.

pub mod command;
pub mod reply;
pub mod size;
pub mod stamp;

// Re-export primary types at crate root for convenience.
pub use command::{Command, CommandParseError, CommandTag};
pub use reply::Reply;
pub use size::{SizeSpec, SizeSpecError};
pub use stamp::{Stamp, StampError};
