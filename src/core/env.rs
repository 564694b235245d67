//! Parsing of .env files into Secret data.
//!
//! Each `KEY=VALUE` line becomes one entry whose value is base64-encoded
//! the way the Secret `data` field expects. Blank lines, comments and lines
//! without `=` are skipped.
//!
//! Lines are handled as raw bytes: values need not be UTF-8 and are encoded
//! exactly as they appear. Keys end up as YAML map keys, so any invalid
//! UTF-8 in a key is replaced with U+FFFD.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::core::types::SecretData;
use crate::error::{Error, Result};

/// Load and parse an .env file from disk.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be opened, or if reading
/// fails partway through.
pub fn load(path: impl AsRef<Path>) -> Result<SecretData> {
    let path = path.as_ref();
    let read_err = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let data = parse(BufReader::new(file)).map_err(read_err)?;

    debug!(path = %path.display(), entries = data.len(), "parsed env file");
    Ok(data)
}

/// Parse `KEY=VALUE` lines from a reader.
///
/// Keys and values are trimmed, values are base64-encoded, and a repeated
/// key keeps the value from its last occurrence. Lines without `=` are
/// dropped without error.
pub fn parse<R: BufRead>(mut reader: R) -> std::io::Result<SecretData> {
    let mut data = SecretData::new();
    let mut buf = Vec::new();
    let mut lineno = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lineno += 1;

        let line = trim(&buf);

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with(b"#") {
            continue;
        }

        let Some(eq) = line.iter().position(|&b| b == b'=') else {
            debug!(line = lineno, "skipping line without '='");
            continue;
        };

        let key = String::from_utf8_lossy(trim(&line[..eq])).into_owned();
        let value = encode(trim(&line[eq + 1..]));
        if data.insert(key, value).is_some() {
            debug!(line = lineno, "duplicate key, keeping later value");
        }
    }

    Ok(data)
}

/// Base64-encode a raw value.
pub fn encode(value: &[u8]) -> String {
    STANDARD.encode(value)
}

/// Strip leading and trailing whitespace from a byte string.
///
/// Whitespace is any Unicode whitespace character that is validly encoded;
/// invalid bytes are never whitespace.
fn trim(mut bytes: &[u8]) -> &[u8] {
    while let Some(ch) = first_char(bytes).filter(|c| c.is_whitespace()) {
        bytes = &bytes[ch.len_utf8()..];
    }
    while let Some(ch) = last_char(bytes).filter(|c| c.is_whitespace()) {
        bytes = &bytes[..bytes.len() - ch.len_utf8()];
    }
    bytes
}

fn first_char(bytes: &[u8]) -> Option<char> {
    let head = &bytes[..bytes.len().min(4)];
    let valid = match std::str::from_utf8(head) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&head[..e.valid_up_to()]).ok()?,
    };
    valid.chars().next()
}

fn last_char(bytes: &[u8]) -> Option<char> {
    (1..=bytes.len().min(4))
        .find_map(|n| std::str::from_utf8(&bytes[bytes.len() - n..]).ok())
        .and_then(|s| s.chars().next_back())
}
