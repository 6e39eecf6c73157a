/*! Label translation configuration.

```json
{
    "datasets": {
        "albadi2018ar_train.csv": {
            "translation": {
                "hate": ["hate"],
                "noHate": ["none"]
            }
        }
    }
}
```

Entries are keyed by output file name, not dataset name.
!*/
use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{error::Error, translate::Translation};

/// Default location of the configuration document, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    datasets: HashMap<String, FileConfig>,
}

/// Per-file settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    translation: Translation,
}

impl FileConfig {
    pub fn new(translation: Translation) -> Self {
        Self { translation }
    }

    pub fn translation(&self) -> &Translation {
        &self.translation
    }
}

impl Config {
    /// Load the configuration at `path`.
    /// A missing file is not an error and yields `None`.
    pub fn from_path(path: &Path) -> Result<Option<Self>, Error> {
        if !path.is_file() {
            debug!("no configuration at {:?}", path);
            return Ok(None);
        }
        let f = BufReader::new(File::open(path)?);
        let config = serde_json::from_reader(f)?;
        Ok(Some(config))
    }

    /// Translation for the output file `file_name`, if configured.
    pub fn translation(&self, file_name: &str) -> Option<&Translation> {
        self.datasets.get(file_name).map(FileConfig::translation)
    }

    pub fn insert(&mut self, file_name: impl Into<String>, file_config: FileConfig) {
        self.datasets.insert(file_name.into(), file_config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize() {
        let doc = r#"{
            "datasets": {
                "a.csv": {"translation": {"hate": ["abusive", "severe"]}},
                "b.csv": {}
            }
        }"#;
        let config: Config = serde_json::from_str(doc).unwrap();
        let t = config.translation("a.csv").unwrap();
        assert_eq!(t["hate"], vec!["abusive", "severe"]);
        assert!(config.translation("b.csv").unwrap().is_empty());
        assert!(config.translation("c.csv").is_none());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_path(&dir.path().join("config.json")).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(Config::from_path(&path), Err(Error::Serde(_))));
    }

    #[test]
    fn from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        let translation = [("x".to_string(), vec!["y".to_string()])].into_iter().collect();
        config.insert("a.csv", FileConfig::new(translation));
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(Config::from_path(&path).unwrap(), Some(config));
    }
}
