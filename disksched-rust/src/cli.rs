use std::ffi::OsString;
use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};
use regex::Regex;

use crate::disk::{Direction, DiskGeometry, Head, DEFAULT_CYLINDERS, DEFAULT_REQUESTS};
use crate::error::ConfigError;
use crate::schedulers::Algorithm;
use crate::utils::RequestFormat;

const ALGORITHM_SPEC: &str = r"^[FSsclC]+$";

/// Everything the command line decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub head: Head,
    pub geometry: DiskGeometry,
    pub input: PathBuf,
    pub format: RequestFormat,
    pub request_count: usize,
    pub algorithms: Vec<Algorithm>,
    pub summary: bool,
    pub verbosity: u64,
}

fn valid_algorithms(value: &str) -> Result<(), String> {
    let re = Regex::new(ALGORITHM_SPEC).map_err(|e| e.to_string())?;
    if !re.is_match(value) {
        Err(format!(
            "Invalid algorithm list: {}. Use any of F (FCFS), S (SSTF), s (SCAN), c (C-SCAN), l (LOOK), C (C-LOOK)",
            value
        ))
    } else {
        Ok(())
    }
}

fn number_of(matches: &ArgMatches, name: &'static str) -> Result<usize, ConfigError> {
    let value = matches.value_of(name).unwrap_or_default();
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}

pub fn parse_args<I, T>(args: I) -> Result<Config, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let default_cylinders = DEFAULT_CYLINDERS.to_string();
    let default_requests = DEFAULT_REQUESTS.to_string();

    let matches = App::new("disksched")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Service order and head movement of FCFS, SSTF, SCAN, C-SCAN, LOOK and C-LOOK")
        .allow_negative_numbers(true)
        .arg(
            Arg::new("initial")
                .help("Initial head position")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("direction")
                .help("Initial head direction: LEFT or RIGHT")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .takes_value(true)
                .default_value("request.bin")
                .help("Request file"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .takes_value(true)
                .default_value("bin")
                .help("Request file encoding: bin or text"),
        )
        .arg(
            Arg::new("cylinders")
                .short('c')
                .long("cylinders")
                .takes_value(true)
                .default_value(&default_cylinders)
                .help("Number of cylinders on the disk"),
        )
        .arg(
            Arg::new("requests")
                .short('n')
                .long("requests")
                .takes_value(true)
                .default_value(&default_requests)
                .help("Number of requests to read"),
        )
        .arg(
            Arg::new("algorithms")
                .short('s')
                .long("algorithms")
                .takes_value(true)
                .default_value("FSsclC")
                .validator(valid_algorithms)
                .help("Algorithms to run, in order (F, S, s, c, l, C)"),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Print a movement summary after the reports"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .multiple_occurrences(true)
                .help("More logging; repeat for more"),
        )
        .try_get_matches_from(args)?;

    // same order of checks as the classic tool: head range first, then direction
    let geometry = DiskGeometry::new(number_of(&matches, "cylinders")?)?;
    let position = geometry.parse_head(matches.value_of("initial").unwrap_or_default())?;
    let direction = matches
        .value_of("direction")
        .unwrap_or_default()
        .parse::<Direction>()?;

    Ok(Config {
        head: Head::new(position, direction),
        geometry,
        input: PathBuf::from(matches.value_of("input").unwrap_or_default()),
        format: matches.value_of("format").unwrap_or_default().parse()?,
        request_count: number_of(&matches, "requests")?,
        algorithms: Algorithm::parse_list(matches.value_of("algorithms").unwrap_or_default())?,
        summary: matches.is_present("summary"),
        verbosity: matches.occurrences_of("verbose"),
    })
}
