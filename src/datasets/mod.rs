/*! Dataset plugins

Every supported corpus implements [Dataset]: where to fetch it, how to check and extract it,
and how to bring one of its rows into the canonical `text`/`labels` form.

Plugins are collected in a [Registry], built explicitly at startup.
!*/
mod albadi2018;
mod registry;
mod wulczyn2017aggressive;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{download, error::Error, integrity, table::Row};

pub use albadi2018::Albadi2018;
pub use registry::Registry;
pub use wulczyn2017aggressive::Wulczyn2017Aggressive;

/// Role of an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Training,
    Validation,
    Test,
}

/// Describes one canonical output file of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileDescriptor {
    /// file name, relative to the dataset folder. Also the key used in the configuration document.
    pub name: &'static str,
    /// language code of the texts
    pub language: &'static str,
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// where the texts were collected
    pub platform: &'static str,
}

pub trait Dataset {
    /// Unique name of the dataset.
    fn name(&self) -> &str;

    /// Location of the source archive.
    fn url(&self) -> &str;

    /// Expected sha256 of the downloaded archive. Empty when unknown.
    fn hash(&self) -> &str {
        ""
    }

    /// Every file produced by [Dataset::process], in order.
    fn files(&self) -> &[FileDescriptor] {
        &[]
    }

    fn license(&self) -> &str {
        ""
    }

    /// Fetch the source archive into `target_folder`, returning its local path.
    fn download(&self, target_folder: &Path) -> Result<PathBuf, Error> {
        download::download_from(self.url(), target_folder)
    }

    /// Transform the downloaded archive into the files declared by [Dataset::files], placed in `dataset_folder`.
    ///
    /// `temp_folder` can be used for intermediate files.
    fn process(
        &self,
        _downloaded: &Path,
        _dataset_folder: &Path,
        _temp_folder: &Path,
    ) -> Result<(), Error> {
        Ok(())
    }

    /// Bring a raw row into canonical form: set `text` and labels, remove consumed raw columns.
    ///
    /// Has to be total over the rows produced by [Dataset::process].
    fn unify_row(&self, row: Row) -> Row;

    /// Check the digest of the file at `path` against [Dataset::hash].
    ///
    /// Logs a warning and returns `false` on mismatch. An empty [Dataset::hash] never matches.
    fn valid_hash(&self, path: &Path) -> Result<bool, Error> {
        integrity::verify(self.name(), self.hash(), path)
    }
}
