//! tana binary.
//!
//! Reads a command script (JSON rows), runs it against a fresh registry,
//! and emits one reply line per command. Diagnostics go to stderr via
//! tracing so stdout stays clean for the reply stream.
//!
//! ```bash
//! tana script.json
//! cat script.json | tana -
//! RUST_LOG=debug tana script.json --output replies.txt
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use tana::{parse_script, run_batch};

/// In-memory virtual file registry batch runner.
#[derive(Parser, Debug)]
#[command(name = "tana")]
#[command(about = "Run a scripted command batch against the file registry")]
struct Args {
    /// Command script: a JSON array of [TAG, args...] rows (`-` for stdin)
    script: PathBuf,

    /// Write reply lines here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let text = if args.script.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading script from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args.script)
            .with_context(|| format!("reading script {}", args.script.display()))?
    };

    let commands = parse_script(&text)?;
    tracing::info!(commands = commands.len(), "running batch");
    let lines = run_batch(commands);

    match args.output {
        Some(path) => {
            let mut body = lines.join("\n");
            body.push('\n');
            std::fs::write(&path, body)
                .with_context(|| format!("writing replies to {}", path.display()))?;
        }
        None => {
            for line in &lines {
                println!("{line}");
            }
        }
    }

    Ok(())
}
