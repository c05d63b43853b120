//! Danger-zone workspace cleanup
//!
//! Deletes the peer database and every generated `.conf` file. Failures
//! are recorded per path and the sweep keeps going: partial deletion is
//! possible and is reported, never rolled back or retried.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// One path that could not be removed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupFailure {
    pub path: String,
    pub reason: String,
}

/// Result of a cleanup sweep
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanupReport {
    pub removed: Vec<String>,
    pub failed: Vec<CleanupFailure>,
}

impl CleanupReport {
    pub fn succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    fn remove(&mut self, path: &Path) {
        match std::fs::remove_file(path) {
            Ok(()) => {
                info!("Removed {}", path.display());
                self.removed.push(path.display().to_string());
            }
            Err(e) => {
                warn!("Failed to remove {}: {}", path.display(), e);
                self.failed.push(CleanupFailure {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }
}

/// Remove the database file and all `.conf` files in the output directory.
///
/// An absent database or output directory contributes nothing and is not a
/// failure.
pub fn clear_workspace(database: &Path, output_dir: &Path) -> CleanupReport {
    let mut report = CleanupReport::default();

    if database.exists() {
        report.remove(database);
    }

    if let Ok(entries) = std::fs::read_dir(output_dir) {
        let mut configs: Vec<_> = entries
            .flatten()
            .filter(|e| e.file_name().to_string_lossy().ends_with(".conf"))
            .map(|e| e.path())
            .collect();
        configs.sort();

        for path in configs {
            report.remove(&path);
        }
    }

    report
}
