//! # hate-corpora
//!
//! Downloads hate speech corpora and rewrites them into a single tab separated format,
//! with unified labels.
//!
//! ```sh
//! hate-corpora 0.1.0
//! hate speech corpora acquisition and unification tool.
//!
//! USAGE:
//!     hate-corpora <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     check    Check the hash of a downloaded archive
//!     fetch    Download, check, process and unify datasets
//!     help     Prints this message or the help of the given subcommand(s)
//!     list     List available datasets
//!     unify    Unify already processed dataset files
//! ```
//!
//! Logging is controlled by `RUST_LOG` (e.g. `RUST_LOG=info`).
use hate_corpora::{
    datasets::{Dataset, Registry},
    error::Error,
    integrity,
    pipeline::Pipeline,
    unify::Unifier,
};
use serde::Serialize;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

/// Serializable summary of a dataset, used by `list --json`.
#[derive(Serialize)]
struct Summary<'a> {
    name: &'a str,
    url: &'a str,
    license: &'a str,
    files: &'a [hate_corpora::datasets::FileDescriptor],
}

fn list(registry: &Registry, json: bool) -> Result<(), Error> {
    if json {
        let summaries: Vec<Summary> = registry
            .iter()
            .map(|d| Summary {
                name: d.name(),
                url: d.url(),
                license: d.license(),
                files: d.files(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }
    for dataset in registry.iter() {
        println!("{}\t{}", dataset.name(), dataset.url());
        for file in dataset.files() {
            println!(
                "\t{}\t{}\t{:?}\t{}",
                file.name, file.language, file.kind, file.platform
            );
        }
    }
    Ok(())
}

fn fetch(registry: &Registry, e: cli::Fetch) -> Result<(), Error> {
    let pipeline = Pipeline::new(e.dst, e.tmp, Unifier::new(e.config))
        .translate_labels(e.translate)
        .skip_download(e.skip_download);

    let datasets: Vec<&dyn Dataset> = if e.datasets.is_empty() {
        registry.iter().collect()
    } else {
        e.datasets
            .iter()
            .map(|name| registry.get(name))
            .collect::<Result<_, _>>()?
    };

    let mut failures = 0;
    for dataset in datasets {
        match pipeline.run(dataset) {
            Ok(folder) => info!("[{}] available in {:?}", dataset.name(), folder),
            Err(err) => {
                error!("[{}] {}", dataset.name(), err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        Err(Error::Custom(format!(
            "{failures} dataset(s) failed: see previous messages."
        )))
    } else {
        Ok(())
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::HateCorpora::from_args();
    debug!("cli args\n{:#?}", opt);

    let registry = Registry::bundled();

    match opt {
        cli::HateCorpora::List(l) => list(&registry, l.json)?,
        cli::HateCorpora::Check(c) => {
            let dataset = registry.get(&c.dataset)?;
            let digest = integrity::digest(&c.file)?;
            let valid = integrity::check_digest(dataset.name(), dataset.hash(), &digest);
            println!("{digest}\t{}", if valid { "OK" } else { "MISMATCH" });
        }
        cli::HateCorpora::Unify(u) => {
            let dataset = registry.get(&u.dataset)?;
            Unifier::new(u.config).unify(dataset, &u.folder, u.translate)?;
        }
        cli::HateCorpora::Fetch(f) => fetch(&registry, f)?,
    };
    Ok(())
}
