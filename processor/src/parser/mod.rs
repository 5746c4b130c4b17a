//! Loader for the WIKI metadata CSV.
//!
//! The file has no header row; each row is read positionally as
//! `(symbol, name)`. Encoding is detected before parsing so that
//! Latin-1 exports load the same way as UTF-8 ones.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::EXPECTED_COLUMNS;
use crate::error::{CsvError, CsvResult};
use crate::models::RawRecord;

const UTF8_BOM: &str = "\u{feff}";

/// Result of loading with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Rows in file order
    pub records: Vec<RawRecord>,
    /// Detected encoding
    pub encoding: String,
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 always wins; chardet is only consulted for anything else.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        "" => "utf-8".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string using the given encoding label.
///
/// Unknown labels fall back to lossy UTF-8. A leading BOM is dropped.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let decoded = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8(bytes.to_vec())
            .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned()),
        label => match encoding_rs::Encoding::for_label(label.as_bytes()) {
            Some(enc) => {
                let (text, _, had_errors) = enc.decode(bytes);
                if had_errors {
                    return Err(CsvError::Encoding(format!(
                        "input is not valid {}",
                        enc.name()
                    )));
                }
                text.into_owned()
            }
            None => String::from_utf8_lossy(bytes).into_owned(),
        },
    };

    Ok(match decoded.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => decoded,
    })
}

/// Parse decoded CSV text into raw `(symbol, name)` rows.
///
/// Quoted fields are honoured, blank and whitespace-only lines are skipped
/// and field values are kept verbatim (no trimming). Any other row without
/// exactly two fields fails.
pub fn parse_records(content: &str) -> CsvResult<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();

    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if row.len() == 1 && row[0].trim().is_empty() {
            continue;
        }

        if row.len() != EXPECTED_COLUMNS {
            return Err(CsvError::ColumnCount {
                line,
                expected: EXPECTED_COLUMNS,
                found: row.len(),
            });
        }

        records.push(RawRecord::new(line, &row[0], &row[1]));
    }

    Ok(records)
}

/// Load the metadata CSV at `path`.
///
/// # Example
/// ```ignore
/// let result = ticker_lists::load("WIKI-datasets-codes.csv")?;
/// println!("{} rows ({})", result.records.len(), result.encoding);
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CsvError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CsvError::Io(e),
    })?;

    load_bytes(&bytes)
}

/// Load metadata CSV bytes.
pub fn load_bytes(bytes: &[u8]) -> CsvResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let records = parse_records(&content)?;

    Ok(ParseResult { records, encoding })
}
