/*! Shared processing helpers

Building blocks for the dataset specific `process` steps: archive extraction, file copies,
and a couple of table operations (joins and grouped means).
!*/
mod files;
mod ops;

pub use files::{copy_file, unzip_file};
pub use ops::{group_mean, join_tables};
