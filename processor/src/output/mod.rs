//! JSON writer for the lookup lists.
//!
//! Each list is written as an array of `{"label": .., "value": ..}` objects,
//! replacing any existing file. Writes are not atomic.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{OutputError, OutputResult};
use crate::models::{LookupEntry, View};
use crate::transform::project::Views;

/// Serialize `entries` to a JSON string.
pub fn to_json(entries: &[LookupEntry], pretty: bool) -> OutputResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(entries)?
    } else {
        serde_json::to_string(entries)?
    };
    Ok(json)
}

/// Write one lookup list to `path`, overwriting it.
pub fn write(entries: &[LookupEntry], path: &Path, pretty: bool) -> OutputResult<()> {
    let io_err = |source: std::io::Error| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, entries)?;
    } else {
        serde_json::to_writer(&mut writer, entries)?;
    }

    writer.flush().map_err(io_err)
}

/// Write every view into `dir` under its fixed file name.
///
/// Returns the written paths in [`View::ALL`] order. Stops at the first
/// failure; files already written are left in place.
pub fn write_all(views: &Views, dir: &Path, pretty: bool) -> OutputResult<Vec<(View, PathBuf)>> {
    let mut written = Vec::with_capacity(View::ALL.len());

    for (view, entries) in views.iter() {
        let path = dir.join(view.file_name());
        write(entries, &path, pretty)?;
        written.push((view, path));
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TickerRecord;
    use crate::transform::project::project;

    #[test]
    fn test_compact_output() {
        let entries = vec![LookupEntry::new("AAPL", "Apple Inc. ")];
        let json = to_json(&entries, false).unwrap();
        assert_eq!(json, r#"[{"label":"AAPL","value":"Apple Inc. "}]"#);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(to_json(&[], false).unwrap(), "[]");
    }

    #[test]
    fn test_pretty_write_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pretty.json");
        let entries = vec![
            LookupEntry::new("AAPL", "Apple Inc. "),
            LookupEntry::new("ZZZ", ""),
        ];

        write(&entries, &path, true).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains('\n'));
        assert!(content.contains("  \"label\": \"AAPL\""));
        let back: Vec<LookupEntry> = serde_json::from_str(&content).unwrap();
        assert_eq!(back, entries);
        assert_eq!(content, to_json(&entries, true).unwrap());
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");
        std::fs::write(&path, "stale content that is much longer than the new one").unwrap();

        write(&[LookupEntry::new("A", "A")], &path, false).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, r#"[{"label":"A","value":"A"}]"#);
    }

    #[test]
    fn test_write_all_file_names() {
        let dir = tempfile::tempdir().unwrap();
        let views = project(&[TickerRecord::new("A", "Alpha")]);

        let written = write_all(&views, dir.path(), false).unwrap();
        assert_eq!(written.len(), 3);

        let combined = std::fs::read_to_string(dir.path().join("ticker_abbrvlong_long_list.json")).unwrap();
        assert_eq!(combined, r#"[{"label":"A - Alpha","value":"Alpha"}]"#);
        assert!(dir.path().join("ticker_abbrv_long_list.json").exists());
        assert!(dir.path().join("ticker_abbrv_abbrv_list.json").exists());
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("list.json");
        let err = write(&[], &path, false).unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }));
        assert!(err.to_string().contains("list.json"));
    }
}
