/*! Tabular data

Dataset files are loaded into a [Table] of [Row]s. Rows are ordered mappings of column names to [Value]s,
with the canonical `labels` field held aside as a first-class [Labels] sequence.

Tables are read from comma or tab separated files and always written in the canonical format:
tab separated, an `id` row index first, non-numeric fields quoted, labels stored as a JSON array.
!*/
mod labels;
mod row;
mod tsv;
mod value;

pub use labels::Labels;
pub use row::{Row, LABELS, TEXT};
pub use tsv::{Table, INDEX};
pub use value::Value;
