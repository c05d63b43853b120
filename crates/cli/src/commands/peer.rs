//! Peer passthrough commands
//!
//! These are one-to-one front ends for the external tool's peer
//! operations. Field values go through unvalidated; the tool's own output
//! is printed verbatim and its exit status is mirrored.

use clap::Args;
use wgconsole_common::{ConsoleConfig, MeshCommand, MeshTool, MeshconfTool, PeerFields};

/// Shared arguments for addpeer and updatepeer
#[derive(Args)]
pub struct PeerArgs {
    /// Peer name
    pub name: String,

    /// Peer address, e.g. 10.0.0.1/32
    #[arg(long)]
    pub address: Option<String>,

    /// Public endpoint, e.g. vpn.example.com:51820
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Allowed IPs
    #[arg(long = "allowedips")]
    pub allowed_ips: Option<String>,

    /// Private key (generated by the tool when omitted)
    #[arg(long = "privatekey")]
    pub private_key: Option<String>,

    /// Listen port
    #[arg(long = "listenport")]
    pub listen_port: Option<String>,
}

impl PeerArgs {
    pub fn into_parts(self) -> (String, PeerFields) {
        (
            self.name,
            PeerFields {
                address: self.address,
                endpoint: self.endpoint,
                allowed_ips: self.allowed_ips,
                private_key: self.private_key,
                listen_port: self.listen_port,
            },
        )
    }
}

/// Run one tool command, print its combined output, mirror its exit status
pub async fn run_tool(config: &ConsoleConfig, command: MeshCommand) -> anyhow::Result<()> {
    let tool = MeshconfTool::new(config);
    let output = tool.run(&command).await?;

    print!("{}", output.text);
    if !output.text.ends_with('\n') && !output.text.is_empty() {
        println!();
    }

    if !output.succeeded() {
        std::process::exit(output.exit_code().unwrap_or(1));
    }

    Ok(())
}
