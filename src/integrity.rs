/*! Download integrity checks.

Archives are verified against a sha256 digest declared by their dataset.
Digests are lowercase hex strings, as produced by `sha256sum`.
!*/
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use log::{debug, warn};
use sha2::{Digest, Sha256};

use crate::error::Error;

/// compute the sha256 digest of the file pointed by `path` by using [io::copy] between a buffered file handler and the hasher.
/// The file is streamed, so big archives are never fully loaded in memory.
pub fn digest(path: &Path) -> Result<String, Error> {
    let mut f = BufReader::new(File::open(path)?);
    let mut hasher = Sha256::new();
    io::copy(&mut f, &mut hasher)?;
    let result = format!("{:x}", hasher.finalize());
    debug!("sha256 of {:?}: {}", path, result);
    Ok(result)
}

/// Check that the digest of `path` equals `expected`.
///
/// A mismatch is not an error: a warning naming `dataset` and both digests is emitted and `false` is returned.
/// An empty `expected` never matches, callers wanting to skip verification have to do so explicitly.
pub fn verify(dataset: &str, expected: &str, path: &Path) -> Result<bool, Error> {
    let actual = digest(path)?;
    Ok(check_digest(dataset, expected, &actual))
}

/// Compare an already computed digest to `expected`, warning on mismatch as [verify] does.
pub fn check_digest(dataset: &str, expected: &str, actual: &str) -> bool {
    if actual == expected {
        true
    } else {
        warn!(
            "[{}] Expected dataset hash to be {:?} but was {}",
            dataset, expected, actual
        );
        false
    }
}
