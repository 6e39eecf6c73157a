//! Dataset registry.
use log::debug;

use super::{Albadi2018, Dataset, Wulczyn2017Aggressive};
use crate::error::Error;

/// Ordered collection of datasets, keyed by [Dataset::name].
///
/// Iteration follows registration order.
#[derive(Default)]
pub struct Registry {
    datasets: Vec<Box<dyn Dataset>>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every dataset shipped with the crate.
    pub fn bundled() -> Self {
        Self {
            datasets: vec![Box::new(Albadi2018), Box::new(Wulczyn2017Aggressive)],
        }
    }

    /// Add `dataset`. Fails if a dataset with the same name is already registered.
    pub fn register(&mut self, dataset: Box<dyn Dataset>) -> Result<(), Error> {
        if self.contains(dataset.name()) {
            return Err(Error::Custom(format!(
                "dataset {} is already registered",
                dataset.name()
            )));
        }
        debug!("registering {}", dataset.name());
        self.datasets.push(dataset);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.datasets.iter().any(|d| d.name() == name)
    }

    pub fn get(&self, name: &str) -> Result<&dyn Dataset, Error> {
        self.datasets
            .iter()
            .find(|d| d.name() == name)
            .map(|d| d.as_ref())
            .ok_or_else(|| Error::UnknownDataset(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Dataset> {
        self.datasets.iter().map(|d| d.as_ref())
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
