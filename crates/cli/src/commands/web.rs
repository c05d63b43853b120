//! CLI command for the wgconsole web server

use clap::Args;
use std::net::SocketAddr;
use wgconsole_common::ConsoleConfig;

#[derive(Args)]
pub struct WebArgs {
    /// Web server bind address (overrides the config file)
    #[arg(long)]
    pub addr: Option<String>,
}

pub async fn execute(mut config: ConsoleConfig, args: WebArgs) -> anyhow::Result<()> {
    if let Some(addr) = args.addr {
        config.web.listen_addr = addr;
    }

    let addr: SocketAddr = config.web.listen_addr.parse()?;
    wgconsole_web::server::serve(addr, config).await
}
