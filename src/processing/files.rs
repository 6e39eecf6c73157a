//! Archive extraction and file copies.
use std::{
    fs::File,
    path::{Path, PathBuf},
};

use log::{debug, info};
use zip::ZipArchive;

use crate::error::Error;

/// Extract the zip archive at `src` into `dst`, creating it if needed.
/// Returns `dst`.
pub fn unzip_file(src: &Path, dst: &Path) -> Result<PathBuf, Error> {
    info!("extracting {:?} into {:?}", src, dst);
    std::fs::create_dir_all(dst)?;
    let mut archive = ZipArchive::new(File::open(src)?)?;
    debug!("{} entries in {:?}", archive.len(), src);
    archive.extract(dst)?;
    Ok(dst.to_path_buf())
}

/// Copy `src` to `dst`, creating missing parent folders.
pub fn copy_file(src: &Path, dst: &Path) -> Result<(), Error> {
    if let Some(parent) = dst.parent() {
        std::fs::create_dir_all(parent)?;
    }
    debug!("copying {:?} to {:?}", src, dst);
    std::fs::copy(src, dst)?;
    Ok(())
}
