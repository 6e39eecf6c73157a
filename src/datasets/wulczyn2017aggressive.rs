//! Wikipedia talk page comments annotated for aggression (Wulczyn et al., 2017).
//!
//! Each comment has been labelled by several workers. A comment is aggressive when
//! more than half of its annotations say so.
use std::path::Path;

use log::info;

use super::{Dataset, FileDescriptor, FileKind};
use crate::{
    error::Error,
    processing::{group_mean, join_tables, unzip_file},
    table::{Labels, Row, Table, Value},
};

const OUTPUT: &str = "wulczyn2017en_aggressive.csv";
const COMMENTS: &str = "aggression_annotated_comments.tsv";
const ANNOTATIONS: &str = "aggression_annotations.tsv";
const KEY: &str = "rev_id";

/// Raw columns consumed by [Wulczyn2017Aggressive::unify_row].
const RAW_COLUMNS: [&str; 10] = [
    "rev_id",
    "comment",
    "year",
    "logged_in",
    "ns",
    "sample",
    "split",
    "worker_id",
    "aggression",
    "aggression_score",
];

static FILES: [FileDescriptor; 1] = [FileDescriptor {
    name: OUTPUT,
    language: "en",
    kind: FileKind::Training,
    platform: "wikipedia",
}];

pub struct Wulczyn2017Aggressive;

impl Wulczyn2017Aggressive {
    /// Replace the layout tokens of the corpus by spaces.
    fn clean_comment(comment: &str) -> String {
        comment
            .replace("NEWLINE_TOKEN", " ")
            .replace("TAB_TOKEN", " ")
    }

    /// Per comment majority vote over every annotation column.
    fn majority(annotations: &Table) -> Result<Table, Error> {
        let means = group_mean(annotations, KEY)?;
        Ok(means.map_rows(|row| {
            row.columns()
                .map(|name| {
                    let value = match row.get(name) {
                        Some(v) if name != KEY => {
                            Value::Bool(v.as_f64().map(|m| m > 0.5).unwrap_or(false))
                        }
                        Some(v) => v.clone(),
                        None => Value::Null,
                    };
                    (name.to_string(), value)
                })
                .collect()
        }))
    }
}

impl Dataset for Wulczyn2017Aggressive {
    fn name(&self) -> &str {
        "wulczyn2017aggressive"
    }

    fn url(&self) -> &str {
        "https://ndownloader.figshare.com/articles/4267550/versions/5"
    }

    fn hash(&self) -> &str {
        "9e48068af1fbbe893af4df1b629ceebf924dc723a290c7bc473d2a8a8aac3529"
    }

    fn files(&self) -> &[FileDescriptor] {
        &FILES
    }

    fn process(
        &self,
        downloaded: &Path,
        dataset_folder: &Path,
        temp_folder: &Path,
    ) -> Result<(), Error> {
        let extracted = unzip_file(downloaded, &temp_folder.join(self.name()))?;

        let comments = Table::from_path(&extracted.join(COMMENTS))?.try_map_rows(|mut row| {
            let comment = row
                .get("comment")
                .ok_or_else(|| Error::MissingColumn("comment".to_string()))?
                .to_string();
            row.insert("comment", Self::clean_comment(&comment));
            Ok(row)
        })?;
        let annotations = Table::from_path(&extracted.join(ANNOTATIONS))?;
        info!(
            "[{}] {} comments, {} annotations",
            self.name(),
            comments.len(),
            annotations.len()
        );

        let labels = Self::majority(&annotations)?;
        let joined = join_tables(comments, KEY, &labels, KEY)?;

        std::fs::create_dir_all(dataset_folder)?;
        joined.to_path(&dataset_folder.join(OUTPUT))?;
        info!("[{}] wrote {} rows to {}", self.name(), joined.len(), OUTPUT);
        Ok(())
    }

    fn unify_row(&self, mut row: Row) -> Row {
        let text = row.get("comment").map(Value::to_string).unwrap_or_default();
        let aggressive = row.get("aggression").is_some_and(Value::is_truthy);

        row.set_text(text);
        let mut labels = Labels::new();
        labels.push(if aggressive { "aggressive" } else { "none" });
        row.set_labels(labels);
        row.drop_columns(&RAW_COLUMNS);
        row
    }
}
