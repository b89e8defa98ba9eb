use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::{DuplicateKeyPolicy, GdpInfo, Row, Table};

/// Read a delimited file into a table keyed by the value of `key_field`.
pub fn load_table<P: AsRef<Path>>(
    path: P,
    key_field: &str,
    separator: u8,
    quote: u8,
    policy: DuplicateKeyPolicy,
) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let table = load_table_from_reader(BufReader::new(file), path, key_field, separator, quote, policy)?;
    info!("loaded {} rows keyed by '{}' from {}", table.len(), key_field, path.display());
    Ok(table)
}

/// Load the GDP table described by `gdpinfo`, keyed by country name.
pub fn load_gdp_table(gdpinfo: &GdpInfo) -> Result<Table> {
    gdpinfo.validate()?;
    load_table(
        &gdpinfo.gdp_file,
        &gdpinfo.country_name,
        gdpinfo.separator_byte()?,
        gdpinfo.quote_byte()?,
        gdpinfo.duplicate_keys,
    )
}

/// Same as [`load_table`] over any reader; `source` only labels errors.
pub fn load_table_from_reader<R: Read>(
    reader: R,
    source: &Path,
    key_field: &str,
    separator: u8,
    quote: u8,
    policy: DuplicateKeyPolicy,
) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(separator)
        .quote(quote)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|e| csv_error(source, e))?.clone();

    let key_index = headers
        .iter()
        .position(|h| h == key_field)
        .ok_or_else(|| Error::MissingField {
            path: source.to_path_buf(),
            field: key_field.to_string(),
        })?;

    let mut table = Table::new();
    for (line, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| csv_error(source, e))?;

        let Some(key) = record.get(key_index) else {
            warn!("row {} in {} has no '{}' cell, skipping", line + 2, source.display(), key_field);
            continue;
        };
        let key = key.to_string();

        // Short rows lack trailing fields; cells past the header are dropped.
        let row: Row = headers.iter().zip(record.iter()).collect();

        if table.contains_key(&key) {
            match policy {
                DuplicateKeyPolicy::Reject => {
                    return Err(Error::DuplicateKey {
                        path: source.to_path_buf(),
                        key,
                    })
                }
                DuplicateKeyPolicy::LastWins => {
                    warn!("duplicate key '{}' in {}, keeping the later row", key, source.display());
                }
            }
        }
        table.insert(key, row);
    }

    Ok(table)
}

/// I/O failures while reading are read errors; everything else is a CSV error.
fn csv_error(path: &Path, err: csv::Error) -> Error {
    if !err.is_io_error() {
        return Error::Csv {
            path: path.to_path_buf(),
            source: err,
        };
    }
    let source = match err.into_kind() {
        csv::ErrorKind::Io(source) => source,
        other => std::io::Error::other(format!("{:?}", other)),
    };
    Error::Read {
        path: path.to_path_buf(),
        source,
    }
}
