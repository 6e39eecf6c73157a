/*! # hate-corpora

Acquisition and label unification of hate speech and abusive language corpora.

Each supported corpus is a [datasets::Dataset] plugin: it knows where its archive lives, how to verify it
and how to extract it into flat files. Those files are then rewritten by [unify] into a canonical,
tab separated format with a `text` column and a `labels` sequence, optionally translating
dataset specific labels into a shared vocabulary ([translate], [config]).

```no_run
use std::path::Path;
use hate_corpora::{datasets::Registry, unify};

let registry = Registry::bundled();
let dataset = registry.get("wulczyn2017aggressive")?;
unify::unify(dataset, Path::new("datasets/wulczyn2017aggressive"), true)?;
# Ok::<(), hate_corpora::error::Error>(())
```
!*/
pub mod config;
pub mod datasets;
pub mod download;
pub mod error;
pub mod integrity;
pub mod pipeline;
pub mod processing;
pub mod table;
pub mod translate;
pub mod unify;
