//! Sensor feed readers.
//!
//! Three on-disk formats are accepted:
//! - JSON Lines, one `{"workout_code": ..., "fields": [...]}` object per line
//! - JSON, an array of the same objects
//! - headerless CSV, one `CODE,f1,f2,...` package per row
//!
//! Every non-blank row becomes a reading, even one with an empty code, so
//! that the dispatcher reports it instead of it vanishing here.

use crate::{Error, RawReading, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read readings from a file, choosing the format by extension
pub fn read_feed(path: &Path) -> Result<Vec<RawReading>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("jsonl") => read_jsonl(path),
        Some("json") => read_json(path),
        Some("csv") => read_csv(path),
        _ => Err(Error::Feed(format!(
            "Unsupported feed format for {}: expected .jsonl, .json or .csv",
            path.display()
        ))),
    }
}

/// Read readings from a JSON Lines file
pub fn read_jsonl(path: &Path) -> Result<Vec<RawReading>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut readings = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        let reading = serde_json::from_str::<RawReading>(&line)
            .map_err(|e| Error::Feed(format!("line {}: {}", line_num + 1, e)))?;
        readings.push(reading);
    }

    tracing::debug!("Read {} readings from {:?}", readings.len(), path);
    Ok(readings)
}

/// Read readings from a JSON file holding an array of readings
pub fn read_json(path: &Path) -> Result<Vec<RawReading>> {
    let file = File::open(path)?;
    let readings: Vec<RawReading> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::Feed(format!("{}: {}", path.display(), e)))?;

    tracing::debug!("Read {} readings from {:?}", readings.len(), path);
    Ok(readings)
}

/// Read readings from a headerless CSV file
pub fn read_csv(path: &Path) -> Result<Vec<RawReading>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut readings = Vec::new();

    for record in reader.records() {
        let record = record?;
        // Physical line, counting the blank lines the reader skips
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let mut columns = record.iter();

        let workout_code = columns.next().unwrap_or_default().to_string();

        let fields = columns
            .map(|value| {
                value.parse::<f64>().map_err(|_| {
                    Error::Feed(format!("line {}: invalid number {:?}", line, value))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        readings.push(RawReading {
            workout_code,
            fields,
        });
    }

    tracing::debug!("Read {} readings from {:?}", readings.len(), path);
    Ok(readings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_jsonl() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("feed.jsonl");

        std::fs::write(
            &path,
            "{\"workout_code\": \"SWM\", \"fields\": [720, 1, 80, 25, 40]}\n\
             \n\
             {\"workout_code\": \"RUN\", \"fields\": [15000, 1, 75]}\n",
        )
        .unwrap();

        let readings = read_jsonl(&path).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].workout_code, "SWM");
        assert_eq!(readings[1].fields, vec![15000.0, 1.0, 75.0]);
    }

    #[test]
    fn test_malformed_jsonl_names_line() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("bad.jsonl");

        std::fs::write(
            &path,
            "{\"workout_code\": \"RUN\", \"fields\": [15000, 1, 75]}\n{ invalid json }\n",
        )
        .unwrap();

        match read_jsonl(&path) {
            Err(Error::Feed(msg)) => assert!(msg.starts_with("line 2")),
            other => panic!("Expected Feed error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_csv_rows_of_varying_length() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("feed.csv");

        std::fs::write(&path, "RUN,15000,1,75\nWLK, 9000, 1, 75, 180\n\nFOO,1\n").unwrap();

        let readings = read_csv(&path).unwrap();
        assert_eq!(readings.len(), 3);
        assert_eq!(readings[1], RawReading::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]));
        // Unknown codes are left for the dispatcher to reject
        assert_eq!(readings[2].workout_code, "FOO");
    }

    #[test]
    fn test_csv_invalid_number() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("bad.csv");

        std::fs::write(&path, "RUN,15000,one,75\n").unwrap();

        match read_csv(&path) {
            Err(Error::Feed(msg)) => assert!(msg.starts_with("line 1:")),
            other => panic!("Expected Feed error, got {:?}", other),
        }
    }

    #[test]
    fn test_csv_error_counts_blank_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("gaps.csv");

        std::fs::write(&path, "RUN,15000,1,75\n\n\nRUN,15000,x,75\n").unwrap();

        match read_csv(&path) {
            Err(Error::Feed(msg)) => assert!(msg.starts_with("line 4:"), "got {}", msg),
            other => panic!("Expected Feed error, got {:?}", other),
        }
    }

    #[test]
    fn test_csv_blank_code_is_reported_not_dropped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("blank_code.csv");

        std::fs::write(&path, "RUN,15000,1,75\n,9000,1,75,180\nWLK,9000,1,75,180\n").unwrap();

        let readings = read_csv(&path).unwrap();
        assert_eq!(readings.len(), 3);
        assert_eq!(readings[1].workout_code, "");

        let report = crate::process_batch(&readings, crate::ErrorPolicy::Continue);
        assert_eq!(report.failed(), 1);
        match report.outcomes[1].result {
            Err(Error::UnrecognizedWorkoutCode(ref code)) => assert!(code.is_empty()),
            ref other => panic!("Expected UnrecognizedWorkoutCode, got {:?}", other),
        }
    }

    #[test]
    fn test_read_json_array() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("feed.json");

        std::fs::write(
            &path,
            r#"[
    {"workout_code": "SWM", "fields": [720, 1, 80, 25, 40]},
    {"workout_code": "RUN", "fields": [15000, 1, 75]}
]"#,
        )
        .unwrap();

        let readings = read_feed(&path).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].workout_code, "SWM");
        assert_eq!(readings[1], RawReading::new("RUN", vec![15000.0, 1.0, 75.0]));
    }

    #[test]
    fn test_malformed_json_array() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("bad.json");

        std::fs::write(&path, r#"{"workout_code": "RUN", "fields": [1, 1, 1]}"#).unwrap();

        assert!(matches!(read_feed(&path), Err(Error::Feed(_))));
    }

    #[test]
    fn test_read_feed_by_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("feed.CSV");
        std::fs::write(&csv_path, "RUN,15000,1,75\n").unwrap();
        assert_eq!(read_feed(&csv_path).unwrap().len(), 1);

        let txt_path = temp_dir.path().join("feed.txt");
        std::fs::write(&txt_path, "RUN,15000,1,75\n").unwrap();
        assert!(matches!(read_feed(&txt_path), Err(Error::Feed(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.jsonl");
        assert!(matches!(read_jsonl(&path), Err(Error::Io(_))));
    }
}
