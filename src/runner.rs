//! The dispatcher.
//!
//! One command in, one line out. Commands map exhaustively onto registry
//! operations; the two registry failures render as `error: ...` lines and
//! the batch keeps going, so every input row gets exactly one output line
//! in input order.

use tracing::{info, warn};

use tana_registry::{Registry, RegistryError};
use tana_types::{Command, Reply};

/// Execute one command against the registry.
pub fn dispatch(registry: &mut Registry, command: Command) -> Result<Reply, RegistryError> {
    match command {
        Command::Upload { name, size } => {
            registry.upload(name.as_str(), size)?;
            Ok(Reply::Uploaded { name })
        }
        Command::Get { name } => Ok(match registry.get(&name) {
            Some(_) => Reply::Got { name },
            None => Reply::NotFound,
        }),
        Command::Copy { source, dest } => {
            registry.copy(&source, dest.as_str())?;
            Ok(Reply::Copied { source, dest })
        }
        Command::Search { prefix } => Ok(Reply::Found {
            names: registry.search(&prefix),
        }),
        Command::UploadAt {
            at,
            name,
            size,
            ttl_seconds,
        } => {
            registry.upload_at(at, name.as_str(), size, ttl_seconds)?;
            Ok(Reply::UploadedAt { name })
        }
        Command::GetAt { at, name } => Ok(match registry.get_at(at, &name) {
            Some(_) => Reply::GotAt { name },
            None => Reply::NotFound,
        }),
        Command::CopyAt { at, source, dest } => {
            registry.copy_at(at, &source, dest.as_str())?;
            Ok(Reply::CopiedAt { source, dest })
        }
        Command::SearchAt { at, prefix } => Ok(Reply::FoundAt {
            names: registry.search_at(at, &prefix),
        }),
        Command::Rollback { at } => {
            registry.rollback(at);
            Ok(Reply::RolledBack { at })
        }
    }
}

/// Render an outcome as its output line.
pub fn render(outcome: Result<Reply, RegistryError>) -> String {
    match outcome {
        Ok(reply) => reply.to_string(),
        Err(RegistryError::AlreadyExists(_)) => "error: file already exists".to_string(),
        Err(RegistryError::SourceNotFound(_)) => "error: source file doesn't exist".to_string(),
    }
}

/// Run a whole batch against a fresh registry.
pub fn run_batch(commands: Vec<Command>) -> Vec<String> {
    let mut registry = Registry::new();
    let total = commands.len();
    let lines: Vec<String> = commands
        .into_iter()
        .map(|command| {
            let outcome = dispatch(&mut registry, command);
            if let Err(err) = &outcome {
                warn!(%err, "command failed, batch continues");
            }
            render(outcome)
        })
        .collect();
    info!(commands = total, files = registry.len(), "batch complete");
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_renders_and_batch_continues() {
        let commands = vec![
            Command::Upload {
                name: "a.txt".into(),
                size: "10gb".parse().unwrap(),
            },
            Command::Upload {
                name: "a.txt".into(),
                size: "5gb".parse().unwrap(),
            },
            Command::Get {
                name: "a.txt".into(),
            },
        ];
        assert_eq!(
            run_batch(commands),
            vec!["uploaded a.txt", "error: file already exists", "got a.txt"]
        );
    }

    #[test]
    fn test_missing_copy_source_renders() {
        let commands = vec![Command::Copy {
            source: "a.txt".into(),
            dest: "b.txt".into(),
        }];
        assert_eq!(run_batch(commands), vec!["error: source file doesn't exist"]);
    }

    #[test]
    fn test_one_line_per_command() {
        let commands = vec![
            Command::Search {
                prefix: "x".into(),
            },
            Command::Get {
                name: "missing".into(),
            },
        ];
        assert_eq!(run_batch(commands), vec!["found []", "file not found"]);
    }
}
