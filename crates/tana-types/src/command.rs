//! The command vocabulary.
//!
//! A script row is a tagged list of strings: `[TAG, arg1, arg2, ...]`.
//! [`CommandTag`] is the closed set of recognized tags and [`Command`] the
//! typed form a row parses into. Parsing validates the tag, the arity, and
//! every field encoding up front, so execution only ever sees well-formed
//! commands.

use serde::{Deserialize, Serialize};
use strum::EnumString;
use thiserror::Error;

use crate::size::{SizeSpec, SizeSpecError};
use crate::stamp::{Stamp, StampError};

/// The closed set of wire operation tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, strum::Display)]
pub enum CommandTag {
    #[strum(serialize = "FILE_UPLOAD")]
    Upload,
    #[strum(serialize = "FILE_GET")]
    Get,
    #[strum(serialize = "FILE_COPY")]
    Copy,
    #[strum(serialize = "FILE_SEARCH")]
    Search,
    #[strum(serialize = "FILE_UPLOAD_AT")]
    UploadAt,
    #[strum(serialize = "FILE_GET_AT")]
    GetAt,
    #[strum(serialize = "FILE_COPY_AT")]
    CopyAt,
    #[strum(serialize = "FILE_SEARCH_AT")]
    SearchAt,
    #[strum(serialize = "ROLLBACK")]
    Rollback,
}

/// One parsed command, ready to execute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Register a new file name with its size.
    Upload { name: String, size: SizeSpec },
    /// Look a file up by name.
    Get { name: String },
    /// Duplicate `source`'s record under `dest`, creating or overwriting it.
    Copy { source: String, dest: String },
    /// Rank file names matching a prefix.
    Search { prefix: String },
    /// Register a new file at an explicit instant, optionally with a TTL.
    UploadAt {
        at: Stamp,
        name: String,
        size: SizeSpec,
        ttl_seconds: Option<i64>,
    },
    /// Look a file up as of an instant; expired records are invisible.
    GetAt { at: Stamp, name: String },
    /// Copy with a fresh creation instant; the source must be live.
    CopyAt {
        at: Stamp,
        source: String,
        dest: String,
    },
    /// Prefix search restricted to records live at the instant.
    SearchAt { at: Stamp, prefix: String },
    /// Discard every record created at or after the instant.
    Rollback { at: Stamp },
}

/// Error turning a script row into a [`Command`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    /// The row had no tag at all.
    #[error("empty command row")]
    EmptyRow,

    /// The tag is not one of the recognized operations.
    #[error("unknown operation tag: {0:?}")]
    UnknownTag(String),

    /// The tag is known but the argument count doesn't fit it.
    #[error("{tag} expects {expected} arguments, got {got}")]
    BadArity {
        tag: CommandTag,
        expected: &'static str,
        got: usize,
    },

    /// A size field failed its encoding contract.
    #[error(transparent)]
    BadSize(#[from] SizeSpecError),

    /// A timestamp field failed to parse.
    #[error(transparent)]
    BadStamp(#[from] StampError),

    /// A TTL field was not a non-negative integer.
    #[error("invalid ttl (want a non-negative integer): {0:?}")]
    BadTtl(String),
}

impl Command {
    /// Parse one tagged row.
    pub fn parse_row(row: &[String]) -> Result<Self, CommandParseError> {
        let (tag_str, args) = row.split_first().ok_or(CommandParseError::EmptyRow)?;
        let tag: CommandTag = tag_str
            .parse()
            .map_err(|_| CommandParseError::UnknownTag(tag_str.clone()))?;

        let bad_arity = |expected: &'static str| CommandParseError::BadArity {
            tag,
            expected,
            got: args.len(),
        };

        match tag {
            CommandTag::Upload => match args {
                [name, size] => Ok(Command::Upload {
                    name: name.clone(),
                    size: size.parse()?,
                }),
                _ => Err(bad_arity("2")),
            },
            CommandTag::Get => match args {
                [name] => Ok(Command::Get { name: name.clone() }),
                _ => Err(bad_arity("1")),
            },
            CommandTag::Copy => match args {
                [source, dest] => Ok(Command::Copy {
                    source: source.clone(),
                    dest: dest.clone(),
                }),
                _ => Err(bad_arity("2")),
            },
            CommandTag::Search => match args {
                [prefix] => Ok(Command::Search {
                    prefix: prefix.clone(),
                }),
                _ => Err(bad_arity("1")),
            },
            CommandTag::UploadAt => match args {
                [at, name, size] => Ok(Command::UploadAt {
                    at: at.parse()?,
                    name: name.clone(),
                    size: size.parse()?,
                    ttl_seconds: None,
                }),
                [at, name, size, ttl] => Ok(Command::UploadAt {
                    at: at.parse()?,
                    name: name.clone(),
                    size: size.parse()?,
                    ttl_seconds: Some(parse_ttl(ttl)?),
                }),
                _ => Err(bad_arity("3 or 4")),
            },
            CommandTag::GetAt => match args {
                [at, name] => Ok(Command::GetAt {
                    at: at.parse()?,
                    name: name.clone(),
                }),
                _ => Err(bad_arity("2")),
            },
            CommandTag::CopyAt => match args {
                [at, source, dest] => Ok(Command::CopyAt {
                    at: at.parse()?,
                    source: source.clone(),
                    dest: dest.clone(),
                }),
                _ => Err(bad_arity("3")),
            },
            CommandTag::SearchAt => match args {
                [at, prefix] => Ok(Command::SearchAt {
                    at: at.parse()?,
                    prefix: prefix.clone(),
                }),
                _ => Err(bad_arity("2")),
            },
            CommandTag::Rollback => match args {
                [at] => Ok(Command::Rollback { at: at.parse()? }),
                _ => Err(bad_arity("1")),
            },
        }
    }
}

fn parse_ttl(text: &str) -> Result<i64, CommandParseError> {
    match text.parse::<i64>() {
        Ok(secs) if secs >= 0 => Ok(secs),
        _ => Err(CommandParseError::BadTtl(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_upload() {
        let cmd = Command::parse_row(&row(&["FILE_UPLOAD", "a.txt", "10gb"])).unwrap();
        assert_eq!(
            cmd,
            Command::Upload {
                name: "a.txt".into(),
                size: "10gb".parse().unwrap(),
            }
        );
    }

    #[test]
    fn test_parse_upload_at_with_and_without_ttl() {
        let cmd = Command::parse_row(&row(&[
            "FILE_UPLOAD_AT",
            "2023-01-01T00:00:00",
            "f",
            "1gb",
            "10",
        ]))
        .unwrap();
        assert!(matches!(
            cmd,
            Command::UploadAt {
                ttl_seconds: Some(10),
                ..
            }
        ));

        let cmd =
            Command::parse_row(&row(&["FILE_UPLOAD_AT", "2023-01-01T00:00:00", "f", "1gb"]))
                .unwrap();
        assert!(matches!(
            cmd,
            Command::UploadAt {
                ttl_seconds: None,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rollback() {
        let cmd = Command::parse_row(&row(&["ROLLBACK", "2023-01-01T00:00:00"])).unwrap();
        let at: Stamp = "2023-01-01T00:00:00".parse().unwrap();
        assert_eq!(cmd, Command::Rollback { at });
    }

    #[test]
    fn test_unknown_tag() {
        assert!(matches!(
            Command::parse_row(&row(&["FILE_DELETE", "a.txt"])),
            Err(CommandParseError::UnknownTag(_))
        ));
    }

    #[test]
    fn test_empty_row() {
        assert!(matches!(
            Command::parse_row(&[]),
            Err(CommandParseError::EmptyRow)
        ));
    }

    #[test]
    fn test_bad_arity() {
        let err = Command::parse_row(&row(&["FILE_UPLOAD", "a.txt"])).unwrap_err();
        assert!(matches!(
            err,
            CommandParseError::BadArity {
                tag: CommandTag::Upload,
                got: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_bad_ttl() {
        let err = Command::parse_row(&row(&[
            "FILE_UPLOAD_AT",
            "2023-01-01T00:00:00",
            "f",
            "1gb",
            "-3",
        ]))
        .unwrap_err();
        assert!(matches!(err, CommandParseError::BadTtl(_)));
    }

    #[test]
    fn test_bad_size_surfaces_field_error() {
        let err = Command::parse_row(&row(&["FILE_UPLOAD", "a.txt", "huge"])).unwrap_err();
        assert!(matches!(err, CommandParseError::BadSize(_)));
    }

    #[test]
    fn test_tag_display_round_trip() {
        assert_eq!(CommandTag::UploadAt.to_string(), "FILE_UPLOAD_AT");
        assert_eq!(
            "FILE_UPLOAD_AT".parse::<CommandTag>().unwrap(),
            CommandTag::UploadAt
        );
    }
}
