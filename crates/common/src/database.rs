//! Peer database reading
//!
//! The peer database is a CSV file owned entirely by the external tool;
//! this module only turns it into a displayable table. A missing file is a
//! normal condition (the mesh has not been initialized yet), a corrupt one
//! degrades to an empty fallback table. Neither case errors past this
//! boundary: callers always get something renderable.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Column schema shown when the database is absent or unreadable
pub const FALLBACK_COLUMNS: [&str; 5] =
    ["name", "address", "endpoint", "allowedips", "listenport"];

/// Displayable peer table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PeerTable {
    /// Empty table carrying the fallback column schema
    pub fn fallback() -> Self {
        Self {
            columns: FALLBACK_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }
}

/// Severity of a non-fatal diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Non-fatal diagnostic surfaced alongside a view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Peer table plus at most one diagnostic about how it was obtained
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerTableReport {
    pub table: PeerTable,
    pub notice: Option<Notice>,
}

/// Read the peer database into a table.
///
/// Never fails: a missing file yields the fallback table with an info
/// notice, a parse failure yields the fallback table with an error notice.
pub fn read_peer_table(path: &Path) -> PeerTableReport {
    if !path.exists() {
        return PeerTableReport {
            table: PeerTable::fallback(),
            notice: Some(Notice::info(format!(
                "No peer database at {} yet. Run init to create one.",
                path.display()
            ))),
        };
    }

    match parse_database(path) {
        Ok(table) => PeerTableReport {
            table,
            notice: None,
        },
        Err(e) => {
            warn!("Failed to parse peer database {}: {}", path.display(), e);
            PeerTableReport {
                table: PeerTable::fallback(),
                notice: Some(Notice::error(format!(
                    "Peer database could not be parsed: {e}"
                ))),
            }
        }
    }
}

fn parse_database(path: &Path) -> crate::Result<PeerTable> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    // Header-only or empty file: keep the fixed schema so the renderer
    // always has column names to work with.
    if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
        return Ok(PeerTable::fallback());
    }

    Ok(PeerTable { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_database_yields_fallback_with_info_notice() {
        let dir = tempfile::tempdir().unwrap();
        let report = read_peer_table(&dir.path().join("database.csv"));

        assert_eq!(report.table.columns, FALLBACK_COLUMNS.to_vec());
        assert!(report.table.rows.is_empty());
        let notice = report.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
    }

    #[test]
    fn test_valid_database_passes_through_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.csv");
        std::fs::write(
            &path,
            "name,address,endpoint,allowedips,listenport\n\
             PEER1,10.0.0.1/32,,,51820\n\
             PEER2,10.0.0.2/32,vpn.example.com:51820,10.0.0.0/24,51820\n",
        )
        .unwrap();

        let report = read_peer_table(&path);
        assert!(report.notice.is_none());
        assert_eq!(report.table.columns[0], "name");
        assert_eq!(report.table.rows.len(), 2);
        assert_eq!(report.table.rows[0][0], "PEER1");
        assert_eq!(report.table.rows[1][1], "10.0.0.2/32");
    }

    #[test]
    fn test_ragged_rows_degrade_to_fallback_with_error_notice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.csv");
        std::fs::write(&path, "name,address\nPEER1\nPEER2,10.0.0.2/32,extra\n").unwrap();

        let report = read_peer_table(&path);
        assert_eq!(report.table.columns, FALLBACK_COLUMNS.to_vec());
        assert!(report.table.rows.is_empty());
        let notice = report.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[test]
    fn test_non_utf8_bytes_degrade_to_fallback_with_error_notice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.csv");
        std::fs::write(&path, b"name,address\nPE\xff\xfeER,10.0.0.1/32\n").unwrap();

        let report = read_peer_table(&path);
        assert_eq!(report.table.columns, FALLBACK_COLUMNS.to_vec());
        assert_eq!(report.notice.unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn test_empty_file_keeps_fallback_schema_without_notice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.csv");
        std::fs::write(&path, "").unwrap();

        let report = read_peer_table(&path);
        assert_eq!(report.table.columns, FALLBACK_COLUMNS.to_vec());
        assert!(report.table.rows.is_empty());
        assert!(report.notice.is_none());
    }
}
