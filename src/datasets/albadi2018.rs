//! Arabic religious hate speech tweets (Albadi et al., 2018).
use std::path::Path;

use log::{info, warn};

use super::{Dataset, FileDescriptor, FileKind};
use crate::{
    error::Error,
    processing::{copy_file, unzip_file},
    table::{Labels, Row},
};

const TRAIN: &str = "albadi2018ar_train.csv";
const TEST: &str = "albadi2018ar_test.csv";

static FILES: [FileDescriptor; 2] = [
    FileDescriptor {
        name: TRAIN,
        language: "ar",
        kind: FileKind::Training,
        platform: "twitter",
    },
    FileDescriptor {
        name: TEST,
        language: "ar",
        kind: FileKind::Test,
        platform: "twitter",
    },
];

pub struct Albadi2018;

impl Dataset for Albadi2018 {
    fn name(&self) -> &str {
        "albadi2018"
    }

    fn url(&self) -> &str {
        "https://github.com/nuhaalbadi/Arabic_hatespeech/archive/refs/heads/master.zip"
    }

    fn hash(&self) -> &str {
        "7f7d87384b4b715655ec0e2d329bc234bbc965ad116290f2e2d0b11e26e272b3"
    }

    fn files(&self) -> &[FileDescriptor] {
        &FILES
    }

    fn license(&self) -> &str {
        "UNKNOWN"
    }

    /// The archive only ships tweet ids and labels.
    /// Fetching tweet texts needs Twitter API access and is left to the caller.
    fn process(
        &self,
        downloaded: &Path,
        dataset_folder: &Path,
        temp_folder: &Path,
    ) -> Result<(), Error> {
        let extracted = unzip_file(downloaded, &temp_folder.join(self.name()))?;
        let root = extracted.join("Arabic_hatespeech-master");
        copy_file(&root.join("train.csv"), &dataset_folder.join(TRAIN))?;
        copy_file(&root.join("test.csv"), &dataset_folder.join(TEST))?;
        info!("[{}] extracted {} and {}", self.name(), TRAIN, TEST);
        warn!(
            "[{}] tweet texts are not hydrated, files only hold tweet ids",
            self.name()
        );
        Ok(())
    }

    /// Hydrated files carry the tweet in `text`. Without hydration the text is left empty.
    fn unify_row(&self, mut row: Row) -> Row {
        if row.text().is_none() {
            row.set_text("");
        }
        let hate = row.remove("hate").and_then(|v| v.as_f64()) == Some(1.0);
        let mut labels = Labels::new();
        labels.push(if hate { "hate" } else { "noHate" });
        row.set_labels(labels);
        row
    }
}

#[cfg(test)]
mod tests {
    use std::{fs::File, io::Write};

    use zip::write::SimpleFileOptions;

    use super::*;
    use crate::table::{Table, Value};

    #[test]
    fn unify_hate() {
        let row: Row = [("id", Value::Int(42)), ("hate", Value::Int(1))]
            .into_iter()
            .collect();
        let row = Albadi2018.unify_row(row);
        assert_eq!(row.labels().unwrap().as_slice(), &["hate"]);
        assert!(row.get("hate").is_none());
        assert_eq!(row.get("id"), Some(&Value::Int(42)));
        assert_eq!(row.text(), Some(""));
    }

    #[test]
    fn unify_keeps_hydrated_text() {
        let row: Row = [
            ("id", Value::Int(42)),
            ("hate", Value::Int(0)),
            ("text", Value::from("نص")),
        ]
        .into_iter()
        .collect();
        let row = Albadi2018.unify_row(row);
        assert_eq!(row.text(), Some("نص"));
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["id", "text"]);
    }

    #[test]
    fn unify_other_values() {
        for hate in [Value::Int(0), Value::Null, Value::from("?")] {
            let row: Row = [("hate", hate)].into_iter().collect();
            let row = Albadi2018.unify_row(row);
            assert_eq!(row.labels().unwrap().as_slice(), &["noHate"]);
            assert!(row.text().is_some());
        }
        // total even when the column is missing
        let row = Albadi2018.unify_row(Row::new());
        assert_eq!(row.labels().unwrap().as_slice(), &["noHate"]);
        assert_eq!(row.text(), Some(""));
    }

    #[test]
    fn process() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("master.zip");
        {
            let mut zip = zip::ZipWriter::new(File::create(&archive).unwrap());
            for name in ["train", "test"] {
                zip.start_file(
                    format!("Arabic_hatespeech-master/{name}.csv"),
                    SimpleFileOptions::default(),
                )
                .unwrap();
                zip.write_all(b"id,hate\n1,1\n2,0\n").unwrap();
            }
            zip.finish().unwrap();
        }
        let dataset_folder = dir.path().join("albadi2018");
        let temp_folder = dir.path().join("tmp");

        Albadi2018
            .process(&archive, &dataset_folder, &temp_folder)
            .unwrap();

        for f in Albadi2018.files() {
            let table = Table::from_path(&dataset_folder.join(f.name)).unwrap();
            assert_eq!(table.len(), 2);
        }
    }
}
