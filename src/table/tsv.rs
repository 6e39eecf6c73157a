//! Table loading and canonical persistence.
use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use log::debug;

use super::{Labels, Row, Value, LABELS, TEXT};
use crate::error::Error;

/// Name of the row index column of canonical files.
pub const INDEX: &str = "id";

/// An ordered sequence of [Row]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// column names as read, used as header when there are no rows to derive it from.
    columns: Vec<String>,
    /// whether the header has a labels column, same use as `columns`.
    labelled: bool,
    rows: Vec<Row>,
}

/// Canonical form of a text field: double quoted, inner quotes doubled.
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Canonical form of a cell: numbers and booleans are written bare, anything else is quoted.
fn cell(value: &Value) -> String {
    match value {
        Value::Bool(_) | Value::Int(_) | Value::Float(_) => value.to_string(),
        Value::Null | Value::Str(_) => quoted(&value.to_string()),
    }
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            columns: Vec::new(),
            labelled: false,
            rows,
        }
    }

    /// Load a table from a delimited file with a header row.
    ///
    /// The delimiter is sniffed from the header line: a tab means the canonical format
    /// (whose leading `id` index column is discarded), otherwise commas are used.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let mut data = String::new();
        File::open(path)?.read_to_string(&mut data)?;
        let header = data.lines().next().unwrap_or_default();
        let delimiter = if header.contains('\t') { b'\t' } else { b',' };
        debug!(
            "reading {:?} (delimiter {:?})",
            path,
            char::from(delimiter)
        );
        Self::from_reader(data.as_bytes(), delimiter)
    }

    /// Load a table from `rdr`.
    ///
    /// When the delimiter is a tab and the first column is named [INDEX], that column is the row index and is dropped.
    /// `text` cells are always kept as strings, `labels` cells are parsed as [Labels] and other cells are inferred (see [Value::infer]).
    pub fn from_reader<R: Read>(rdr: R, delimiter: u8) -> Result<Self, Error> {
        let mut rdr = ReaderBuilder::new().delimiter(delimiter).from_reader(rdr);
        let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();
        let skip = usize::from(delimiter == b'\t' && headers.first().map(String::as_str) == Some(INDEX));

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let mut row = Row::new();
            for (name, cell) in headers.iter().zip(record.iter()).skip(skip) {
                match name.as_str() {
                    TEXT => row.insert(TEXT, Value::Str(cell.to_string())),
                    LABELS => {
                        if !cell.is_empty() {
                            row.set_labels(cell.parse::<Labels>()?);
                        }
                    }
                    _ => row.insert(name.as_str(), Value::infer(cell)),
                }
            }
            rows.push(row);
        }

        let labelled = headers.iter().skip(skip).any(|name| name == LABELS);
        let columns = headers
            .into_iter()
            .skip(skip)
            .filter(|name| name != LABELS)
            .collect();
        Ok(Self {
            columns,
            labelled,
            rows,
        })
    }

    /// Write the table to `path` in the canonical format, replacing any existing file.
    pub fn to_path(&self, path: &Path) -> Result<(), Error> {
        let f = BufWriter::new(File::create(path)?);
        self.to_writer(f)
    }

    /// Write the table in the canonical format:
    /// tab separated, zero-based [INDEX] column first, labels last.
    /// Quoting follows the [Value] type: numbers and booleans are bare, strings,
    /// empty cells, labels and the header are quoted.
    pub fn to_writer<W: Write>(&self, w: W) -> Result<(), Error> {
        let columns = self.header();
        let with_labels = if self.rows.is_empty() {
            self.labelled
        } else {
            self.rows.iter().any(|row| row.labels().is_some())
        };

        // fields are quoted by `cell` and `quoted`
        let mut out = WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Never)
            .from_writer(w);

        let mut header = Vec::with_capacity(columns.len() + 2);
        header.push(quoted(INDEX));
        header.extend(columns.iter().map(|c| quoted(c)));
        if with_labels {
            header.push(quoted(LABELS));
        }
        out.write_record(&header)?;

        for (id, row) in self.rows.iter().enumerate() {
            let mut record = Vec::with_capacity(header.len());
            record.push(id.to_string());
            for column in &columns {
                record.push(cell(row.get(column).unwrap_or(&Value::Null)));
            }
            if with_labels {
                record.push(quoted(
                    &row.labels().map(Labels::to_string).unwrap_or_default(),
                ));
            }
            out.write_record(&record)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Columns of the table, in first-seen order across rows.
    pub fn header(&self) -> Vec<String> {
        if self.rows.is_empty() {
            return self.columns.clone();
        }
        let mut columns: Vec<String> = Vec::new();
        for row in &self.rows {
            for name in row.columns() {
                if name != LABELS && !columns.iter().any(|c| c == name) {
                    columns.push(name.to_string());
                }
            }
        }
        columns
    }

    /// A row of empty cells over the stored header.
    fn template(&self) -> Row {
        let mut row: Row = self
            .columns
            .iter()
            .map(|name| (name.as_str(), Value::Null))
            .collect();
        if self.labelled {
            row.set_labels(Labels::new());
        }
        row
    }

    fn with_header_of(self, row: &Row) -> Self {
        Self {
            columns: row
                .columns()
                .filter(|name| *name != LABELS)
                .map(String::from)
                .collect(),
            labelled: row.labels().is_some(),
            rows: self.rows,
        }
    }

    /// Apply `f` to every row, preserving row order.
    ///
    /// A table without rows has its header mapped instead, through a row of empty cells.
    pub fn map_rows<F>(self, mut f: F) -> Self
    where
        F: FnMut(Row) -> Row,
    {
        if self.rows.is_empty() {
            let mapped = f(self.template());
            return self.with_header_of(&mapped);
        }
        Self {
            rows: self.rows.into_iter().map(f).collect(),
            ..self
        }
    }

    /// Apply a fallible `f` to every row, stopping at the first error.
    ///
    /// Headers of tables without rows are mapped as in [Table::map_rows].
    /// If `f` rejects the row of empty cells, the header is kept as is.
    pub fn try_map_rows<F>(self, mut f: F) -> Result<Self, Error>
    where
        F: FnMut(Row) -> Result<Row, Error>,
    {
        if self.rows.is_empty() {
            return Ok(match f(self.template()) {
                Ok(mapped) => self.with_header_of(&mapped),
                Err(_) => self,
            });
        }
        Ok(Self {
            rows: self.rows.into_iter().map(f).collect::<Result<_, _>>()?,
            ..self
        })
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
