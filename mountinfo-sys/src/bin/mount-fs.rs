// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mountinfo_sys::{load_mount_table_from, resolve_mount, SELF_MOUNTINFO};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "mount-fs")]
#[command(about = "Print the filesystem type of the mount that holds a path")]
struct Args {
    /// Path to look up; relative paths are taken from the current directory
    path: PathBuf,

    /// Read the mount table from this file instead of the current process
    #[arg(long, default_value = SELF_MOUNTINFO)]
    mountinfo: PathBuf,

    /// Print the whole mount record as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mountinfo_sys=warn,warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let table = load_mount_table_from(&args.mountinfo)
        .with_context(|| format!("failed to load {}", args.mountinfo.display()))?;
    let record = resolve_mount(&table, &args.path)
        .with_context(|| format!("failed to resolve {}", args.path.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        println!("{}", record.fs_type);
    }

    Ok(())
}
