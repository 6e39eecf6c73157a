//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Serde(serde_json::Error),
    Reqwest(reqwest::Error),
    Zip(zip::result::ZipError),
    Url(url::ParseError),
    /// Stored `labels` text is not a valid label sequence.
    LabelFormat(String),
    /// Translation was requested on a row that has no labels.
    MissingLabels,
    /// A column required by a processing step is absent.
    MissingColumn(String),
    UnknownDataset(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Csv(e) => write!(f, "csv error: {e}"),
            Error::Serde(e) => write!(f, "json error: {e}"),
            Error::Reqwest(e) => write!(f, "http error: {e}"),
            Error::Zip(e) => write!(f, "zip error: {e}"),
            Error::Url(e) => write!(f, "invalid url: {e}"),
            Error::LabelFormat(s) => write!(f, "invalid label sequence: {s:?}"),
            Error::MissingLabels => write!(f, "row has no labels"),
            Error::MissingColumn(c) => write!(f, "missing column: {c}"),
            Error::UnknownDataset(name) => write!(f, "unknown dataset: {name}"),
            Error::Custom(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Reqwest(e)
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(v: zip::result::ZipError) -> Self {
        Self::Zip(v)
    }
}

impl From<url::ParseError> for Error {
    fn from(v: url::ParseError) -> Self {
        Self::Url(v)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
