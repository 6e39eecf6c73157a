/*! Unification of dataset files

For every file declared by a dataset, strictly in order:

1. load the table from `<dataset folder>/<file name>`
2. apply [Dataset::unify_row] to every row
3. optionally translate labels, if the configuration has an entry for the file
4. write the table back in place, in canonical format

The first failure aborts the whole run. Files already written stay written.
!*/
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::{
    config::{Config, DEFAULT_CONFIG_PATH},
    datasets::Dataset,
    error::Error,
    table::Table,
    translate::translate_table,
};

/// Runs unification, reading label translations from a configuration document.
#[derive(Debug, Clone)]
pub struct Unifier {
    config_path: PathBuf,
}

impl Default for Unifier {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_CONFIG_PATH))
    }
}

impl Unifier {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Unify every file of `dataset` located in `dataset_folder`.
    ///
    /// When `translate_labels` is set, a missing configuration document or a missing entry for a file
    /// only skips translation (of all files or of that file).
    pub fn unify(
        &self,
        dataset: &dyn Dataset,
        dataset_folder: &Path,
        translate_labels: bool,
    ) -> Result<(), Error> {
        let config = if translate_labels {
            let config = Config::from_path(&self.config_path)?;
            if config.is_none() {
                info!(
                    "[{}] no configuration at {:?}, labels won't be translated",
                    dataset.name(),
                    self.config_path
                );
            }
            config
        } else {
            None
        };
        unify_with(dataset, dataset_folder, config.as_ref())
    }
}

/// Unify every file of `dataset`, translating labels with `config` when provided.
pub fn unify_with(
    dataset: &dyn Dataset,
    dataset_folder: &Path,
    config: Option<&Config>,
) -> Result<(), Error> {
    for file in dataset.files() {
        let path = dataset_folder.join(file.name);
        info!("[{}] unifying {:?}", dataset.name(), path);

        let mut table = Table::from_path(&path)?.map_rows(|row| dataset.unify_row(row));

        match config.map(|c| c.translation(file.name)) {
            Some(Some(translation)) => {
                debug!(
                    "[{}] translating labels of {} ({} entries)",
                    dataset.name(),
                    file.name,
                    translation.len()
                );
                table = translate_table(table, translation)?;
            }
            Some(None) => debug!(
                "[{}] no translation configured for {}",
                dataset.name(),
                file.name
            ),
            None => (),
        }

        table.to_path(&path)?;
        info!("[{}] wrote {} rows to {:?}", dataset.name(), table.len(), path);
    }
    Ok(())
}

/// Unify `dataset`'s files with the configuration at [DEFAULT_CONFIG_PATH].
pub fn unify(
    dataset: &dyn Dataset,
    dataset_folder: &Path,
    translate_labels: bool,
) -> Result<(), Error> {
    Unifier::default().unify(dataset, dataset_folder, translate_labels)
}
