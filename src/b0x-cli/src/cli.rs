//! CLI argument definitions for b0x

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "b0x")]
#[command(about = "Decode versioned base64/zlib/JSON container files")]
#[command(version)]
pub struct Args {
    /// Path to the encoded container file
    pub input: PathBuf,

    /// Write decoded JSON to a file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
