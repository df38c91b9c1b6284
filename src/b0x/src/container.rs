//! Decoding for versioned container files.
//!
//! Format:
//! 1. One-byte version tag (only `'0'` is recognized)
//! 2. Base64 payload (standard alphabet, padded), optionally followed by
//!    trailing whitespace
//! 3. The decoded payload is a zlib stream
//! 4. The decompressed bytes are UTF-8 JSON

use base64::prelude::*;
use flate2::read::ZlibDecoder;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Version tag marking the only recognized container revision
pub const VERSION_TAG: char = '0';

/// Errors that can occur while decoding a container
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Failed to read container: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected version byte: containers must start with '0'")]
    BadVersion,

    #[error("Payload is not valid base64: {0}")]
    BadBase64(#[from] base64::DecodeError),

    #[error("Payload is not a valid zlib stream: {0}")]
    BadCompression(std::io::Error),

    #[error("Decompressed payload is not valid JSON: {0}")]
    BadJson(#[from] serde_json::Error),
}

/// Decode a container from its in-memory text form.
///
/// Strips the version tag and trailing whitespace, then base64-decodes the
/// payload, inflates the zlib stream, and parses the result as JSON. Any
/// stage failure aborts the whole decode; there is no partial result.
pub fn unpack_str(data: &str) -> Result<Value, FormatError> {
    // Only the leading character is the tag; whitespace is trimmed from the
    // tail only, anywhere else it invalidates the payload.
    let payload = data
        .strip_prefix(VERSION_TAG)
        .ok_or(FormatError::BadVersion)?
        .trim_end();

    let compressed = BASE64_STANDARD.decode(payload)?;

    // ZlibDecoder verifies the adler32 trailer, so a corrupt checksum
    // surfaces here as well.
    let mut decoder = ZlibDecoder::new(compressed.as_slice());
    let mut json = Vec::new();
    decoder
        .read_to_end(&mut json)
        .map_err(FormatError::BadCompression)?;

    Ok(serde_json::from_slice(&json)?)
}

/// Read a container file and decode it to a JSON value.
pub fn unpack(path: &Path) -> Result<Value, FormatError> {
    let data = fs::read_to_string(path)?;
    unpack_str(&data)
}
