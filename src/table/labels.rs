//! Label sequences.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Ordered sequence of label names attached to a row.
///
/// Stored as a JSON array of strings, e.g. `["hate","none"]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(Vec<String>);

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>) {
        self.0.push(label.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl FromStr for Labels {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(|_| Error::LabelFormat(s.to_string()))
    }
}

impl fmt::Display for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::Value::from(self.0.clone()))
    }
}

impl<S: Into<String>> FromIterator<S> for Labels {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Labels {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Labels {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<String>> for Labels {
    fn from(v: Vec<String>) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let labels: Labels = r#"["hate", "none"]"#.parse().unwrap();
        assert_eq!(labels.as_slice(), &["hate", "none"]);

        let empty: Labels = "[]".parse().unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn parse_invalid() {
        for bad in ["hate", "['hate']", r#"{"hate": 1}"#, "[1, 2]", ""] {
            let res = bad.parse::<Labels>();
            assert!(matches!(res, Err(Error::LabelFormat(_))), "{bad}");
        }
    }

    #[test]
    fn display_is_json() {
        let labels: Labels = ["hate", "say \"no\""].into_iter().collect();
        assert_eq!(labels.to_string(), r#"["hate","say \"no\""]"#);
        assert_eq!(labels.to_string().parse::<Labels>().unwrap(), labels);
    }
}
