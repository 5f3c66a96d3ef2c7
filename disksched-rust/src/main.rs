use std::process::exit;

use disksched::cli::{parse_args, Config};
use disksched::utils::read_request_file;
use disksched::{report, run_all, ConfigError, DiskschedError};
use log::{debug, LevelFilter};

fn init_logger(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn actual_main_fn(config: &Config) -> Result<(), DiskschedError> {
    let requests = read_request_file(
        &config.input,
        config.format,
        config.request_count,
        &config.geometry,
    )?;
    debug!("sorted requests: {:?}", requests.sorted());

    let results = run_all(&config.algorithms, &requests, &config.geometry, config.head);

    print!("{}", report::header(requests.len(), &config.head));
    for (algorithm, schedule) in &results {
        print!("{}", report::section(algorithm.name(), schedule));
    }
    if config.summary {
        print!("{}", report::summary(&results));
    }
    Ok(())
}

fn main() {
    let config = match parse_args(std::env::args_os()) {
        Ok(config) => config,
        // --help and --version land here too and are not failures
        Err(ConfigError::Cli(e)) => {
            let _ = e.print();
            exit(if e.use_stderr() { 1 } else { 0 });
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            exit(1);
        }
    };
    init_logger(config.verbosity);

    if let Err(e) = actual_main_fn(&config) {
        eprintln!("ERROR: {}", e);
        exit(1);
    }
}
