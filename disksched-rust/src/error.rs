// Errors for everything around the scheduling core.
// The schedulers themselves cannot fail, so nothing in here is raised by them.
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
/// Problems with the command line or the disk configuration it describes.
pub enum ConfigError {
    /// clap rejected the arguments, or the user asked for --help / --version.
    #[error(transparent)]
    Cli(#[from] clap::Error),
    #[error("Direction must be LEFT or RIGHT (got `{0}`).")]
    InvalidDirection(String),
    #[error("Initial head must be between 0 and {max} (got `{head}`).")]
    HeadOutOfRange { head: String, max: usize },
    #[error("--{name} expects a non-negative integer (got `{value}`).")]
    InvalidNumber { name: &'static str, value: String },
    #[error("The disk must have at least one cylinder.")]
    NoCylinders,
    #[error("The disk can have at most {max} cylinders (got {cylinders}).")]
    TooManyCylinders { cylinders: usize, max: usize },
    #[error("Unknown algorithm letter `{0}`, expected any of F, S, s, c, l, C.")]
    UnknownAlgorithm(char),
    #[error("Unknown request file format `{0}`, expected bin or text.")]
    UnknownFormat(String),
}

#[derive(Debug, Error)]
/// Problems reading the request file.
pub enum LoadError {
    #[error("Could not open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Could not read requests: {0}")]
    Read(#[from] io::Error),
    #[error("Could not read all requests: expected {expected}, found {found}.")]
    ShortRead { expected: usize, found: usize },
    #[error("Line {line}: `{token}` is not a cylinder number.")]
    Parse { line: usize, token: String },
    #[error("Request {index} is negative ({value}).")]
    NegativeRequest { index: usize, value: i64 },
    #[error("Request {index} ({value}) lies outside cylinders 0..={max}.")]
    RequestOutOfRange { index: usize, value: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum DiskschedError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
}
