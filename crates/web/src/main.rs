use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::info;

use wgconsole_common::ConsoleConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::var("WGCONSOLE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| wgconsole_common::default_root_path().join("console.toml"));
    let mut config = ConsoleConfig::load(&config_path)?;

    // Environment overrides beat the config file
    if let Ok(root) = std::env::var("WGCONSOLE_ROOT") {
        if !root.trim().is_empty() {
            config.root_dir = PathBuf::from(root);
        }
    }
    if let Ok(tool) = std::env::var("WGCONSOLE_TOOL") {
        if !tool.trim().is_empty() {
            config.tool.binary_path = Some(tool);
        }
    }
    if let Ok(addr) = std::env::var("WGCONSOLE_WEB_ADDR") {
        if !addr.trim().is_empty() {
            config.web.listen_addr = addr;
        }
    }

    let addr: SocketAddr = config.web.listen_addr.parse()?;

    info!(
        "Starting wgconsole web UI on http://{} (database: {})",
        addr,
        config.database_path().display()
    );

    wgconsole_web::server::serve(addr, config).await
}
