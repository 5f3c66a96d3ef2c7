use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};

use crate::disk::DiskGeometry;
use crate::error::{ConfigError, LoadError};
use crate::requests::RequestSet;

const PREALLOCATE_LIMIT: usize = 4096;

/// How the request file is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    /// Native-endian 32 bit signed integers back to back, as a C program's `fwrite` leaves them.
    Binary,
    /// Whitespace separated integers. Lines starting with '#' are comments.
    Text,
}

impl FromStr for RequestFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bin" | "binary" => Ok(RequestFormat::Binary),
            "text" | "txt" => Ok(RequestFormat::Text),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

/// Reads `count` requests from the file at `path` and checks each one lies on the disk.
/// Anything after the first `count` values is ignored.
pub fn read_request_file(
    path: &Path,
    format: RequestFormat,
    count: usize,
    geometry: &DiskGeometry,
) -> Result<RequestSet, LoadError> {
    debug!("Opening request file {}...", path.display());
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let reader = BufReader::new(file);

    let raw = match format {
        RequestFormat::Binary => read_binary(reader, count)?,
        RequestFormat::Text => read_text(reader, count)?,
    };
    let requests = check_cylinders(raw, geometry)?;
    info!("Loaded {} requests from {}", requests.len(), path.display());

    Ok(RequestSet::new(requests))
}

pub fn read_binary<R: Read>(mut reader: R, count: usize) -> Result<Vec<i64>, LoadError> {
    // `count` comes straight from the command line, so only trust it so far
    let mut values = Vec::with_capacity(count.min(PREALLOCATE_LIMIT));
    let mut word = [0u8; 4];
    while values.len() < count {
        match reader.read_exact(&mut word) {
            Ok(()) => values.push(i64::from(i32::from_ne_bytes(word))),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(LoadError::ShortRead {
                    expected: count,
                    found: values.len(),
                })
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(values)
}

pub fn read_text<R: BufRead>(mut reader: R, count: usize) -> Result<Vec<i64>, LoadError> {
    // `count` comes straight from the command line, so only trust it so far
    let mut values = Vec::with_capacity(count.min(PREALLOCATE_LIMIT));
    let mut line = String::new();
    let mut line_number = 0;

    while values.len() < count {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        line_number += 1;
        if line.starts_with('#') {
            continue;
        }
        for token in line.split_whitespace().take(count - values.len()) {
            let value = token.parse::<i64>().map_err(|_| LoadError::Parse {
                line: line_number,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }

    if values.len() < count {
        return Err(LoadError::ShortRead {
            expected: count,
            found: values.len(),
        });
    }
    Ok(values)
}

fn check_cylinders(raw: Vec<i64>, geometry: &DiskGeometry) -> Result<Vec<usize>, LoadError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, value)| {
            let cylinder =
                usize::try_from(value).map_err(|_| LoadError::NegativeRequest { index, value })?;
            if !geometry.contains(cylinder) {
                return Err(LoadError::RequestOutOfRange {
                    index,
                    value: cylinder,
                    max: geometry.max_cylinder(),
                });
            }
            Ok(cylinder)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use test_log::test;

    use super::*;

    fn encode(values: &[i32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_ne_bytes()).collect()
    }

    #[test]
    fn binary_reads_exactly_count() {
        let bytes = encode(&[98, 183, 37, 122, 999]);
        let values = read_binary(Cursor::new(bytes), 4).unwrap();
        assert_eq!(values, vec![98, 183, 37, 122]);
    }

    #[test]
    fn binary_short_file() {
        let mut bytes = encode(&[1, 2]);
        bytes.push(0); // half a word does not count
        match read_binary(Cursor::new(bytes), 3) {
            Err(LoadError::ShortRead { expected, found }) => {
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected ShortRead, got {other:?}"),
        }
    }

    #[test]
    fn text_skips_comments_and_spans_lines() {
        let input = "# requests for the textbook example\n98 183 37\n# more\n122\t14\n124 65 67 1 2\n";
        let values = read_text(Cursor::new(input), 8).unwrap();
        assert_eq!(values, vec![98, 183, 37, 122, 14, 124, 65, 67]);
    }

    #[test]
    fn text_reports_bad_token_line() {
        let input = "# header\n1 2\n3 x4\n";
        match read_text(Cursor::new(input), 4) {
            Err(LoadError::Parse { line, token }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "x4");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn huge_count_is_a_short_read() {
        let huge = usize::MAX / 2;
        match read_binary(Cursor::new(encode(&[1, 2])), huge) {
            Err(LoadError::ShortRead { expected, found }) => {
                assert_eq!(expected, huge);
                assert_eq!(found, 2);
            }
            other => panic!("expected ShortRead, got {other:?}"),
        }
        assert!(matches!(
            read_text(Cursor::new("1 2 3\n"), huge),
            Err(LoadError::ShortRead { found: 3, .. })
        ));
    }

    #[test]
    fn text_short_file() {
        assert!(matches!(
            read_text(Cursor::new("1 2 3\n"), 5),
            Err(LoadError::ShortRead {
                expected: 5,
                found: 3
            })
        ));
    }

    #[test]
    fn cylinders_are_range_checked() {
        let geometry = DiskGeometry::new(100).unwrap();
        assert_eq!(check_cylinders(vec![0, 99], &geometry).unwrap(), vec![0, 99]);
        assert!(matches!(
            check_cylinders(vec![5, -3], &geometry),
            Err(LoadError::NegativeRequest { index: 1, value: -3 })
        ));
        assert!(matches!(
            check_cylinders(vec![100], &geometry),
            Err(LoadError::RequestOutOfRange {
                index: 0,
                value: 100,
                max: 99
            })
        ));
    }

    #[test]
    fn format_names() {
        assert_eq!("bin".parse::<RequestFormat>().unwrap(), RequestFormat::Binary);
        assert_eq!("text".parse::<RequestFormat>().unwrap(), RequestFormat::Text);
        assert!(matches!(
            "csv".parse::<RequestFormat>(),
            Err(ConfigError::UnknownFormat(_))
        ));
    }
}
