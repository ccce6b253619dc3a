//! Streaming content checksums.

use crate::error::ApiError;
use md5::{Digest, Md5};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read buffer size. Bounds memory use regardless of file size.
const CHUNK_SIZE: usize = 8192;

/// Compute the hex-encoded MD5 digest of a file, reading in fixed-size chunks.
///
/// MD5 is the algorithm the catalog's `contentMd5` field expects.
pub fn md5_hex(path: &Path) -> Result<String, ApiError> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
