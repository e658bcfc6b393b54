//! The reply vocabulary.
//!
//! Every executed command produces exactly one reply; `Display` renders the
//! wire string the batch runner emits. Lookup misses are a reply
//! ([`Reply::NotFound`]), not an error. Upload collisions and dead copy
//! sources are the registry's error type, never a reply.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stamp::Stamp;

/// One command's successful result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    /// `uploaded <name>`
    Uploaded { name: String },
    /// `uploaded at <name>`
    UploadedAt { name: String },
    /// `got <name>`
    Got { name: String },
    /// `got at <name>`
    GotAt { name: String },
    /// `file not found`: a normal negative lookup, not a failure.
    NotFound,
    /// `copied <source> to <dest>`
    Copied { source: String, dest: String },
    /// `copied at <source> to <dest>`
    CopiedAt { source: String, dest: String },
    /// `found [<names>]`: ranked prefix matches, at most ten.
    Found { names: Vec<String> },
    /// `found at [<names>]`
    FoundAt { names: Vec<String> },
    /// `rollback to <at>`
    RolledBack { at: Stamp },
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Uploaded { name } => write!(f, "uploaded {name}"),
            Reply::UploadedAt { name } => write!(f, "uploaded at {name}"),
            Reply::Got { name } => write!(f, "got {name}"),
            Reply::GotAt { name } => write!(f, "got at {name}"),
            Reply::NotFound => f.write_str("file not found"),
            Reply::Copied { source, dest } => write!(f, "copied {source} to {dest}"),
            Reply::CopiedAt { source, dest } => write!(f, "copied at {source} to {dest}"),
            Reply::Found { names } => write!(f, "found [{}]", names.join(", ")),
            Reply::FoundAt { names } => write!(f, "found at [{}]", names.join(", ")),
            Reply::RolledBack { at } => write!(f, "rollback to {at}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_renderings() {
        assert_eq!(
            Reply::Uploaded {
                name: "a.txt".into()
            }
            .to_string(),
            "uploaded a.txt"
        );
        assert_eq!(
            Reply::Got {
                name: "a.txt".into()
            }
            .to_string(),
            "got a.txt"
        );
        assert_eq!(Reply::NotFound.to_string(), "file not found");
        assert_eq!(
            Reply::Copied {
                source: "a".into(),
                dest: "b".into()
            }
            .to_string(),
            "copied a to b"
        );
    }

    #[test]
    fn test_timed_renderings() {
        assert_eq!(
            Reply::UploadedAt { name: "f".into() }.to_string(),
            "uploaded at f"
        );
        assert_eq!(Reply::GotAt { name: "f".into() }.to_string(), "got at f");
        assert_eq!(
            Reply::CopiedAt {
                source: "a".into(),
                dest: "b".into()
            }
            .to_string(),
            "copied at a to b"
        );
    }

    #[test]
    fn test_found_list() {
        assert_eq!(
            Reply::Found {
                names: vec!["a".into(), "b".into()]
            }
            .to_string(),
            "found [a, b]"
        );
        assert_eq!(
            Reply::FoundAt {
                names: vec!["a".into()]
            }
            .to_string(),
            "found at [a]"
        );
    }

    #[test]
    fn test_found_empty() {
        assert_eq!(Reply::Found { names: vec![] }.to_string(), "found []");
        assert_eq!(Reply::FoundAt { names: vec![] }.to_string(), "found at []");
    }

    #[test]
    fn test_rollback_echoes_stamp() {
        let at: Stamp = "2023-01-01T00:00:00".parse().unwrap();
        assert_eq!(
            Reply::RolledBack { at }.to_string(),
            "rollback to 2023-01-01T00:00:00"
        );
    }
}
