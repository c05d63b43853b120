//! wgconsole Common Library
//!
//! Shared engine for the wgconsole front ends: configuration, the
//! wg-meshconf command builder and invoker, and the file-system views
//! (peer database, generated configs, cleanup).

pub mod cleanup;
pub mod command;
pub mod config;
pub mod database;
pub mod error;
pub mod listing;
pub mod tool;

// Re-export commonly used types
pub use cleanup::{clear_workspace, CleanupFailure, CleanupReport};
pub use command::{MeshCommand, PeerFields};
pub use config::{ConsoleConfig, ToolConfig, WebConfig};
pub use database::{read_peer_table, Notice, NoticeLevel, PeerTable, PeerTableReport};
pub use error::{Error, Result};
pub use listing::{list_config_files, ConfigFileEntry};
pub use tool::{MeshTool, MeshconfTool, ToolOutcome, ToolOutput};

/// wgconsole version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default workspace root
pub fn default_root_path() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".wgconsole")
}

/// Home directory helper
mod dirs {
    pub fn home_dir() -> Option<std::path::PathBuf> {
        std::env::var_os("HOME").map(std::path::PathBuf::from)
    }
}
