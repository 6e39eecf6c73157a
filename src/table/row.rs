//! Rows.
use super::{Labels, Value};

/// Canonical text column.
pub const TEXT: &str = "text";
/// Canonical labels column.
pub const LABELS: &str = "labels";

/// An ordered mapping of column names to [Value]s, plus the row's [Labels] if it has some.
///
/// Labels are not a regular column: use [Row::labels] and [Row::set_labels].
/// A plain column named [LABELS] is ignored when the row is written.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    columns: Vec<(String, Value)>,
    labels: Option<Labels>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of `column`.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Set the value of `column`.
    /// An existing column keeps its position, a new one is appended.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        let column = column.into();
        let value = value.into();
        match self.columns.iter_mut().find(|(name, _)| *name == column) {
            Some((_, v)) => *v = value,
            None => self.columns.push((column, value)),
        }
    }

    /// Remove `column`, returning its value.
    pub fn remove(&mut self, column: &str) -> Option<Value> {
        let pos = self.columns.iter().position(|(name, _)| name == column)?;
        Some(self.columns.remove(pos).1)
    }

    /// Remove every listed column. Absent columns are ignored.
    pub fn drop_columns(&mut self, columns: &[&str]) {
        self.columns
            .retain(|(name, _)| !columns.contains(&name.as_str()));
    }

    /// Column names, in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn text(&self) -> Option<&str> {
        self.get(TEXT).and_then(Value::as_str)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.insert(TEXT, Value::Str(text.into()));
    }

    pub fn labels(&self) -> Option<&Labels> {
        self.labels.as_ref()
    }

    pub fn set_labels(&mut self, labels: Labels) {
        self.labels = Some(labels);
    }

    pub fn take_labels(&mut self) -> Option<Labels> {
        self.labels.take()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}
