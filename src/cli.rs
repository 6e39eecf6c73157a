//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "hate-corpora",
    about = "hate speech corpora acquisition and unification tool."
)]
/// Holds every command that is callable by the `hate-corpora` command.
pub enum HateCorpora {
    #[structopt(about = "List available datasets")]
    List(List),
    #[structopt(about = "Check the hash of a downloaded archive")]
    Check(Check),
    #[structopt(about = "Unify already processed dataset files")]
    Unify(Unify),
    #[structopt(about = "Download, check, process and unify datasets")]
    Fetch(Fetch),
}

#[derive(Debug, StructOpt)]
pub struct List {
    #[structopt(long = "json", help = "print datasets as json")]
    pub json: bool,
}

#[derive(Debug, StructOpt)]
pub struct Check {
    #[structopt(help = "dataset name")]
    pub dataset: String,
    #[structopt(parse(from_os_str), help = "downloaded archive")]
    pub file: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Unify command and parameters.
///
/// ```sh
/// USAGE:
///     hate-corpora unify [FLAGS] [OPTIONS] <dataset> <folder>
///
/// FLAGS:
///     -t, --translate    translate labels using the configuration file
///
/// OPTIONS:
///     -c, --config <config>    configuration file [default: config.json]
/// ```
pub struct Unify {
    #[structopt(help = "dataset name")]
    pub dataset: String,
    #[structopt(parse(from_os_str), help = "folder holding the dataset files")]
    pub folder: PathBuf,
    #[structopt(short = "t", long = "translate", help = "translate labels")]
    pub translate: bool,
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "config",
        default_value = "config.json",
        help = "configuration file"
    )]
    pub config: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Fetch command and parameters.
pub struct Fetch {
    #[structopt(help = "datasets to fetch. Every dataset if none is given.")]
    pub datasets: Vec<String>,
    #[structopt(
        parse(from_os_str),
        long = "dst",
        default_value = "datasets",
        help = "canonical files destination"
    )]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "tmp",
        default_value = "tmp",
        help = "folder for downloads and intermediate files"
    )]
    pub tmp: PathBuf,
    #[structopt(short = "t", long = "translate", help = "translate labels")]
    pub translate: bool,
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "config",
        default_value = "config.json",
        help = "configuration file"
    )]
    pub config: PathBuf,
    #[structopt(long = "skip-download", help = "reuse already downloaded archives")]
    pub skip_download: bool,
}
