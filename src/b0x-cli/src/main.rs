//! b0x - decode versioned container files to JSON
//!
//! Reads an encoded container (version tag + base64 + zlib + JSON), decodes
//! it, and pretty-prints the payload.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let value = b0x::unpack(&args.input)
        .with_context(|| format!("Failed to decode {}", args.input.display()))?;

    let rendered = serde_json::to_string_pretty(&value).context("Failed to render JSON")?;

    match args.output {
        Some(path) => fs::write(&path, format!("{rendered}\n"))
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{rendered}"),
    }

    Ok(())
}
