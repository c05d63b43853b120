//! Generated config directory listing
//!
//! The output directory is written by the external tool (and emptied by
//! cleanup); this module only observes its current state. No recursion, no
//! caching: callers re-list on every render.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::SystemTime;
use tracing::warn;

/// Display schema of the config file table
pub const LISTING_COLUMNS: [&str; 3] = ["Filename", "Size (KB)", "Last Modified"];

/// One generated configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFileEntry {
    pub filename: String,
    /// Size in kilobytes, rounded to two decimals
    pub size_kb: f64,
    /// Modification time as `YYYY-MM-DD HH:MM:SS` local time
    pub modified: String,
}

/// List `.conf` files directly inside `dir`, sorted by filename.
///
/// A missing or unreadable directory is the same as an empty one.
pub fn list_config_files(dir: &Path) -> Vec<ConfigFileEntry> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".conf") {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(m) if m.is_file() => m,
            Ok(_) => continue,
            Err(e) => {
                warn!("Skipping unreadable entry {}: {}", name, e);
                continue;
            }
        };

        let modified: DateTime<Local> = metadata
            .modified()
            .unwrap_or(SystemTime::UNIX_EPOCH)
            .into();

        files.push(ConfigFileEntry {
            filename: name,
            size_kb: (metadata.len() as f64 / 1024.0 * 100.0).round() / 100.0,
            modified: modified.format("%Y-%m-%d %H:%M:%S").to_string(),
        });
    }

    files.sort_by(|a, b| a.filename.cmp(&b.filename));
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_conf_files_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.conf"), "x").unwrap();
        std::fs::write(dir.path().join("a.conf"), "x").unwrap();
        std::fs::write(dir.path().join("note.txt"), "x").unwrap();

        let files = list_config_files(dir.path());
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["a.conf", "b.conf"]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_config_files(&dir.path().join("output")).is_empty());
    }

    #[test]
    fn test_no_recursion_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested.conf")).unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("deep.conf"), "x").unwrap();
        std::fs::write(dir.path().join("top.conf"), "x").unwrap();

        let files = list_config_files(dir.path());
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["top.conf"]);
    }

    #[test]
    fn test_size_rounded_to_two_decimals() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("peer.conf"), vec![0u8; 1536]).unwrap();

        let files = list_config_files(dir.path());
        assert_eq!(files[0].size_kb, 1.5);
    }

    #[test]
    fn test_timestamp_format() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("peer.conf"), "x").unwrap();

        let files = list_config_files(dir.path());
        chrono::NaiveDateTime::parse_from_str(&files[0].modified, "%Y-%m-%d %H:%M:%S")
            .expect("timestamp should match the display format");
    }
}
