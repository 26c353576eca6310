use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read line {line}")]
    Read {
        line: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("file has no header line")]
    MissingHeader,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a comma-delimited file whose first line is the header.
///
/// The file is only held open for the duration of the call.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file)?;
    log::info!(
        "Loaded {} records with columns {:?} from {}",
        dataset.len(),
        dataset.headers(),
        path.display()
    );
    Ok(dataset)
}

/// Parse comma-delimited rows from any byte source.
///
/// Layout:
/// * first line: field names
/// * every other line: values, paired positionally with the field names
///
/// Quotes carry no meaning, so a comma always separates fields. Every line
/// after the header is a record, an empty line included (one empty value).
/// Rows with the wrong number of values are truncated rather than rejected.
pub fn load_reader<R: Read>(source: R) -> Result<Dataset, LoadError> {
    let mut lines = BufReader::new(source)
        .split(b'\n')
        .zip(1u64..)
        .map(|(line, line_no)| match line {
            Ok(bytes) => Ok((line_no, split_fields(&bytes))),
            Err(source) => Err(LoadError::Read {
                line: line_no,
                source,
            }),
        });

    let headers: Vec<String> = match lines.next() {
        Some(first) => {
            let (_, mut names) = first?;
            if let Some(name) = names.first_mut() {
                *name = name.trim_start_matches('\u{feff}').trim().to_string();
            }
            names
        }
        None => return Err(LoadError::MissingHeader),
    };

    let mut records = Vec::new();
    for line in lines {
        let (line_no, values) = line?;

        if values.len() != headers.len() {
            log::debug!(
                "line {line_no}: {} values for {} columns, truncating",
                values.len(),
                headers.len()
            );
        }

        records.push(Record::from_pairs(&headers, &values));
    }

    Ok(Dataset::from_records(headers, records))
}

/// Split one raw line on commas, dropping a trailing `\r`.
fn split_fields(line: &[u8]) -> Vec<String> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    line.split(|&b| b == b',')
        .map(|field| String::from_utf8_lossy(field).trim().to_string())
        .collect()
}
