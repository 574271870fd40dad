//! Streaming file hashing.
//!
//! Reports carry a SHA-1 per matched file, computed over the whole file in
//! fixed-size chunks so memory stays bounded on large evidence. A file
//! that cannot be hashed still produces a record, carrying
//! [`HASH_UNAVAILABLE`] instead of a digest.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha1::{Digest, Sha1};

/// Sentinel written in place of a digest when hashing fails.
pub const HASH_UNAVAILABLE: &str = "ERROR_CALCULATING_HASH";

const CHUNK_SIZE: usize = 64 * 1024;

/// SHA-1 of the file contents as a lower-case hex string.
pub fn sha1_hex(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha1::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// SHA-1 of the file, degrading to the sentinel on any failure.
pub fn sha1_hex_or_sentinel(path: &Path) -> String {
    match sha1_hex(path) {
        Ok(digest) => digest,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "hashing failed");
            HASH_UNAVAILABLE.to_string()
        }
    }
}
