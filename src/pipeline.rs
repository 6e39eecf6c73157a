/*! Dataset acquisition pipeline

Downloads, verifies, extracts and unifies a dataset:

```text
<download folder>/<archive>
<temp folder>/<dataset name>/...        intermediate files
<dataset folder>/<dataset name>/<file>  canonical files
```
!*/
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::{datasets::Dataset, download, error::Error, unify::Unifier};

#[derive(Debug, Clone)]
pub struct Pipeline {
    download_folder: PathBuf,
    dataset_folder: PathBuf,
    temp_folder: PathBuf,
    unifier: Unifier,
    translate_labels: bool,
    skip_download: bool,
}

impl Pipeline {
    pub fn new(dataset_folder: PathBuf, temp_folder: PathBuf, unifier: Unifier) -> Self {
        Self {
            download_folder: temp_folder.clone(),
            dataset_folder,
            temp_folder,
            unifier,
            translate_labels: false,
            skip_download: false,
        }
    }

    /// Where archives are downloaded. Defaults to the temp folder.
    pub fn download_folder(mut self, folder: PathBuf) -> Self {
        self.download_folder = folder;
        self
    }

    pub fn translate_labels(mut self, translate: bool) -> Self {
        self.translate_labels = translate;
        self
    }

    /// Reuse an already downloaded archive if there's one.
    pub fn skip_download(mut self, skip: bool) -> Self {
        self.skip_download = skip;
        self
    }

    /// Folder holding the canonical files of `dataset`.
    pub fn output_folder(&self, dataset: &dyn Dataset) -> PathBuf {
        self.dataset_folder.join(dataset.name())
    }

    /// Local archive location, downloading it unless it's already there and downloads are skipped.
    fn fetch(&self, dataset: &dyn Dataset) -> Result<PathBuf, Error> {
        if self.skip_download {
            let url = reqwest::Url::parse(dataset.url())?;
            let existing = self.download_folder.join(download::file_name(&url));
            if existing.is_file() {
                info!("[{}] reusing {:?}", dataset.name(), existing);
                return Ok(existing);
            }
        }
        dataset.download(&self.download_folder)
    }

    /// Fail if the archive does not match the dataset's hash. Datasets without hash are not checked.
    fn check(&self, dataset: &dyn Dataset, archive: &Path) -> Result<(), Error> {
        if dataset.hash().is_empty() {
            warn!("[{}] no hash known, skipping verification", dataset.name());
            return Ok(());
        }
        if dataset.valid_hash(archive)? {
            info!("[{}] hash ok", dataset.name());
            Ok(())
        } else {
            Err(Error::Custom(format!(
                "[{}] hash mismatch for {:?}",
                dataset.name(),
                archive
            )))
        }
    }

    /// Run every step for `dataset`, returning its output folder.
    pub fn run(&self, dataset: &dyn Dataset) -> Result<PathBuf, Error> {
        let output = self.output_folder(dataset);
        let temp = self.temp_folder.join(dataset.name());
        for folder in [&self.download_folder, &output, &temp] {
            std::fs::create_dir_all(folder)?;
        }

        info!("[{}] fetching {}", dataset.name(), dataset.url());
        let archive = self.fetch(dataset)?;
        self.check(dataset, &archive)?;

        info!("[{}] processing {:?}", dataset.name(), archive);
        dataset.process(&archive, &output, &temp)?;

        self.unifier
            .unify(dataset, &output, self.translate_labels)?;
        info!("[{}] done", dataset.name());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::{
        datasets::{FileDescriptor, FileKind},
        processing::copy_file,
        table::{Labels, Row, Table},
    };

    const FILES: [FileDescriptor; 1] = [FileDescriptor {
        name: "local.csv",
        language: "en",
        kind: FileKind::Training,
        platform: "test",
    }];

    /// archive is a plain csv, copied as is.
    struct Local {
        hash: String,
    }

    impl Dataset for Local {
        fn name(&self) -> &str {
            "local"
        }
        fn url(&self) -> &str {
            "http://localhost/local.csv"
        }
        fn hash(&self) -> &str {
            &self.hash
        }
        fn files(&self) -> &[FileDescriptor] {
            &FILES
        }
        fn process(&self, downloaded: &Path, dataset_folder: &Path, _: &Path) -> Result<(), Error> {
            copy_file(downloaded, &dataset_folder.join("local.csv"))
        }
        fn unify_row(&self, mut row: Row) -> Row {
            let label = if row.remove("bad").is_some_and(|v| v.is_truthy()) {
                "bad"
            } else {
                "good"
            };
            row.set_labels([label].into_iter().collect::<Labels>());
            row
        }
    }

    fn setup() -> (tempfile::TempDir, Pipeline) {
        let dir = tempfile::tempdir().unwrap();
        let downloads = dir.path().join("downloads");
        std::fs::create_dir_all(&downloads).unwrap();
        let mut f = std::fs::File::create(downloads.join("local.csv")).unwrap();
        write!(f, "text,bad\nhello,0\nugh,1\n").unwrap();

        let pipeline = Pipeline::new(
            dir.path().join("datasets"),
            dir.path().join("tmp"),
            Unifier::new(dir.path().join("config.json")),
        )
        .download_folder(downloads)
        .skip_download(true);
        (dir, pipeline)
    }

    #[test]
    fn run_without_hash() {
        let (_dir, pipeline) = setup();
        let out = pipeline.run(&Local { hash: String::new() }).unwrap();
        let table = Table::from_path(&out.join("local.csv")).unwrap();
        assert_eq!(table.rows()[0].labels().unwrap().as_slice(), &["good"]);
        assert_eq!(table.rows()[1].labels().unwrap().as_slice(), &["bad"]);
    }

    #[test]
    fn run_hash_mismatch() {
        let (_dir, pipeline) = setup();
        let res = pipeline.run(&Local {
            hash: "0000".to_string(),
        });
        assert!(matches!(res, Err(Error::Custom(_))));
    }

    #[test]
    fn run_hash_match() {
        let (dir, pipeline) = setup();
        let digest = crate::integrity::digest(&dir.path().join("downloads/local.csv")).unwrap();
        assert!(pipeline.run(&Local { hash: digest }).is_ok());
    }
}
