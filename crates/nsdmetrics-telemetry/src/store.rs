//! Local JSON lines record store
//!
//! Appends every record to a file, one JSON object per line, by default
//! under `~/.local/share/nsdmetrics/stats.jsonl`.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use nsdmetrics_core::config::default_data_dir;
use nsdmetrics_core::domain::{
    AtomField, NetworkNsdReported, StatsError, NETWORK_NSD_REPORTED_ATOM_ID,
    NETWORK_NSD_REPORTED_FIELD_COUNT,
};
use nsdmetrics_core::ports::IStatsSink;
use serde::{Deserialize, Serialize};

/// One line as written to the file
#[derive(Serialize)]
struct StoredLine<'a> {
    atom_id: i32,
    recorded_at: String,
    fields: [AtomField; NETWORK_NSD_REPORTED_FIELD_COUNT],
    event: &'a NetworkNsdReported,
}

/// One line as read back; the positional `fields` are redundant with `event`.
#[derive(Deserialize)]
struct LoadedLine {
    event: NetworkNsdReported,
}

/// Sink appending records to a JSON lines file.
pub struct JsonLinesStatsSink {
    path: PathBuf,
    // Serializes appends from concurrent writers.
    lock: Mutex<()>,
}

impl JsonLinesStatsSink {
    /// Creates a sink appending to `path`. Nothing is touched until the
    /// first write.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Returns the default record file path.
    pub fn default_path() -> PathBuf {
        default_data_dir().join("stats.jsonl")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored record, oldest first.
    ///
    /// A missing file yields an empty list. Blank lines are skipped.
    pub fn read_all(&self) -> Result<Vec<NetworkNsdReported>, StatsError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let file = std::fs::File::open(&self.path)?;
        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let loaded: LoadedLine = serde_json::from_str(&line)?;
            records.push(loaded.event);
        }
        Ok(records)
    }
}

impl IStatsSink for JsonLinesStatsSink {
    fn stats_write(&self, event: &NetworkNsdReported) -> Result<(), StatsError> {
        let line = StoredLine {
            atom_id: NETWORK_NSD_REPORTED_ATOM_ID,
            recorded_at: Utc::now().to_rfc3339(),
            fields: event.atom_fields(),
            event,
        };
        let mut json = serde_json::to_string(&line)?;
        json.push('\n');

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nsdmetrics_core::domain::{MdnsQueryResult, NsdEventType};

    use super::*;

    fn sample(transaction_id: i32) -> NetworkNsdReported {
        NetworkNsdReported::builder(true, 21)
            .transaction_id(transaction_id)
            .event_type(NsdEventType::NetRegister)
            .query_result(MdnsQueryResult::MqrServiceRegistered)
            .event_duration_millisec(120)
            .build()
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonLinesStatsSink::new(dir.path().join("stats.jsonl"));
        assert!(sink.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("stats.jsonl");
        let sink = JsonLinesStatsSink::new(path.clone());

        sink.stats_write(&sample(1)).unwrap();
        assert!(path.exists());
        assert_eq!(sink.path(), path.as_path());
    }

    #[test]
    fn test_write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonLinesStatsSink::new(dir.path().join("stats.jsonl"));

        sink.stats_write(&sample(1)).unwrap();
        sink.stats_write(&sample(2)).unwrap();

        let records = sink.read_all().unwrap();
        assert_eq!(records, vec![sample(1), sample(2)]);
    }

    #[test]
    fn test_line_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.jsonl");
        let sink = JsonLinesStatsSink::new(path.clone());
        sink.stats_write(&sample(9)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(value["atom_id"], 653);
        assert!(value["recorded_at"].is_string());
        assert_eq!(
            value["fields"],
            serde_json::json!([true, 21, 9, false, 1, 120, 1, 0, 0, 0, 0])
        );
        assert_eq!(value["event"]["transaction_id"], 9);
    }

    #[test]
    fn test_corrupt_line_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.jsonl");
        std::fs::write(&path, "{not json}\n").unwrap();

        let sink = JsonLinesStatsSink::new(path);
        assert!(matches!(
            sink.read_all(),
            Err(StatsError::Serialization(_))
        ));
    }

    #[test]
    fn test_write_to_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonLinesStatsSink::new(dir.path().to_path_buf());
        assert!(matches!(sink.stats_write(&sample(1)), Err(StatsError::Io(_))));
    }

    #[test]
    fn test_default_path() {
        assert!(JsonLinesStatsSink::default_path().ends_with("nsdmetrics/stats.jsonl"));
    }
}
