//! tana: scripted batch runner for the in-memory file registry.
//!
//! The library surface is the glue between a command script and the
//! registry core: [`script::parse_script`] turns JSON rows into typed
//! commands, [`runner::run_batch`] executes them against a fresh
//! [`tana_registry::Registry`] and renders one reply line per command.
//! The `tana` binary wraps these behind a small CLI.

pub mod runner;
pub mod script;

pub use runner::{dispatch, render, run_batch};
pub use script::parse_script;
