//! Console configuration
//!
//! One configurable root directory holds everything the external tool
//! touches: the peer database CSV and the generated config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Console configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Root directory for the mesh workspace
    pub root_dir: PathBuf,

    /// External tool configuration
    pub tool: ToolConfig,

    /// Web console configuration
    pub web: WebConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            root_dir: crate::default_root_path(),
            tool: ToolConfig::default(),
            web: WebConfig::default(),
        }
    }
}

/// External mesh tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Path to the wg-meshconf binary
    pub binary_path: Option<String>,

    /// Subprocess wall-clock timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            binary_path: None, // resolved from PATH
            timeout_secs: 30,
        }
    }
}

/// Web console configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// HTTP listen address
    pub listen_addr: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from file, falling back to defaults when absent
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the peer database path
    pub fn database_path(&self) -> PathBuf {
        self.root_dir.join("database.csv")
    }

    /// Get the generated config output directory
    pub fn output_dir(&self) -> PathBuf {
        self.root_dir.join("output")
    }

    /// Get the tool binary, falling back to the PATH name
    pub fn tool_binary(&self) -> String {
        self.tool
            .binary_path
            .clone()
            .unwrap_or_else(|| "wg-meshconf".to_string())
    }
}
