//! Reading record list files and writing association output.
//!
//! Record lists are plain text in the TUM RGB-D convention: one record
//! per line, whitespace-separated `<timestamp> <identifier> ...` with
//! `#` comment lines and blank lines skipped. Fields past the identifier
//! are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{FramesyncError, Result};
use crate::types::{Association, TimestampedRecord};

/// Read a record list file into memory.
///
/// Malformed lines are fatal: a non-comment line with fewer than two
/// fields or a non-numeric timestamp aborts the read with a
/// [`FramesyncError::Parse`] naming the file and line. The matcher
/// assumes sorted input, so an out-of-order file is reported with
/// `log::warn!` but still returned as-is.
pub fn read_record_file(path: impl AsRef<Path>) -> Result<Vec<TimestampedRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_no = index + 1;
        // The blank-line guard above means at least one field is present;
        // the only short-line failure is a missing identifier.
        let mut fields = line.split_whitespace();
        let (Some(ts_field), Some(identifier)) = (fields.next(), fields.next()) else {
            return Err(FramesyncError::parse(
                path,
                line_no,
                "expected '<timestamp> <identifier>'",
            ));
        };
        let timestamp: f64 = ts_field.parse().map_err(|_| {
            FramesyncError::parse(path, line_no, format!("invalid timestamp '{ts_field}'"))
        })?;

        records.push(TimestampedRecord::new(timestamp, identifier));
    }

    if !records.is_sorted_by(|a, b| a.timestamp <= b.timestamp) {
        log::warn!(
            "{} is not sorted by timestamp; matches may miss the true nearest neighbor",
            path.display()
        );
    }
    log::debug!("read {} records from {}", records.len(), path.display());

    Ok(records)
}

/// Write associations as text, one per line:
/// `<ts_a> <id_a> <ts_b> <id_b>` with timestamps at six decimal places.
pub fn write_associations(path: impl AsRef<Path>, associations: &[Association]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for m in associations {
        writeln!(writer, "{:.6} {} {:.6} {}", m.ts_a, m.id_a, m.ts_b, m.id_b)?;
    }
    writer.flush()?;

    log::debug!(
        "wrote {} associations to {}",
        associations.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_skips_comments_and_blanks() {
        let file = write_temp(
            "# color images\n\
             # timestamp filename\n\
             \n\
             1311868164.363181 rgb/1311868164.363181.png\n\
             1311868164.399026 rgb/1311868164.399026.png\n",
        );

        let records = read_record_file(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].timestamp, 1311868164.363181);
        assert_eq!(records[0].identifier, "rgb/1311868164.363181.png");
    }

    #[test]
    fn test_read_ignores_trailing_fields() {
        let file = write_temp("1.5 depth/a.png extra fields here\n");

        let records = read_record_file(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier, "depth/a.png");
    }

    #[test]
    fn test_read_rejects_short_line() {
        let file = write_temp("1.0 ok.png\n2.0\n");

        let err = read_record_file(file.path()).unwrap_err();
        match err {
            FramesyncError::Parse { line, message, .. } => {
                assert_eq!(line, 2);
                assert!(message.contains("<identifier>"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_rejects_non_numeric_timestamp() {
        let file = write_temp("not-a-number rgb/a.png\n");

        let err = read_record_file(file.path()).unwrap_err();
        assert!(matches!(err, FramesyncError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_record_file("/nonexistent/rgb.txt").unwrap_err();
        assert!(matches!(err, FramesyncError::Io(_)));
    }

    #[test]
    fn test_write_format_six_decimals() {
        let out = NamedTempFile::new().unwrap();
        let associations = vec![
            Association {
                ts_a: 0.0,
                id_a: "rgb0".to_string(),
                ts_b: 0.001,
                id_b: "d0".to_string(),
            },
            Association {
                ts_a: 1311868164.363181,
                id_a: "rgb1".to_string(),
                ts_b: 1311868164.359026,
                id_b: "d1".to_string(),
            },
        ];

        write_associations(out.path(), &associations).unwrap();

        let contents = std::fs::read_to_string(out.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "0.000000 rgb0 0.001000 d0");
        assert_eq!(lines[1], "1311868164.363181 rgb1 1311868164.359026 d1");
    }

    #[test]
    fn test_write_empty_produces_empty_file() {
        let out = NamedTempFile::new().unwrap();
        write_associations(out.path(), &[]).unwrap();
        assert_eq!(std::fs::read_to_string(out.path()).unwrap(), "");
    }
}
