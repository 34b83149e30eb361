//! Streaming SHA-1 checksums of local assets
//!
//! Fedora verifies uploads against the `Digest: sha1=<hex>` header, so the
//! digest must match the bytes that are later streamed to the server.

use crate::error::{FcrepoError, Result};
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read buffer size; any size gives the same digest
const CHUNK_SIZE: usize = 64 * 1024;

/// Lowercase hex SHA-1 digest of one file
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Checksum(String);

impl Checksum {
    /// Hex digest
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Value for the HTTP `Digest` header
    pub fn digest_header(&self) -> String {
        format!("sha1={}", self.0)
    }
}

impl std::fmt::Display for Checksum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the SHA-1 of the file at `path`, reading it in fixed-size chunks
pub fn sha1_file(path: &Path) -> Result<Checksum> {
    let access = |source| FcrepoError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(access)?;
    let mut hasher = Sha1::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf).map_err(access)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(Checksum(format!("{:x}", hasher.finalize())))
}
