//! wgconsole CLI - Main Entry Point
//!
//! Terminal front end for the wg-meshconf mesh workspace. Peer commands
//! are thin passthroughs to the external tool; `list` renders the same
//! tables the web console shows, `web` starts the console server.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod output;

use commands::{files, peer, web};
use wgconsole_common::{ConsoleConfig, MeshCommand};

/// wgconsole - console for wg-meshconf managed WireGuard meshes
#[derive(Parser)]
#[command(name = "wgconsole")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Mesh workspace root directory
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// wg-meshconf binary override
    #[arg(long, global = true)]
    tool: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the peer database
    Init,

    /// Add a peer to the database
    Addpeer(peer::PeerArgs),

    /// Update an existing peer
    Updatepeer(peer::PeerArgs),

    /// Delete a peer from the database
    Delpeer {
        /// Peer name
        name: String,
    },

    /// Show the peer database as the tool prints it
    Showpeers,

    /// Generate WireGuard configuration files
    Genconfig(files::GenconfigArgs),

    /// Render the peer database and generated configs as tables
    List(files::ListArgs),

    /// Delete the database and all generated configs
    Clean(files::CleanArgs),

    /// Start the web console
    Web(web::WebArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli
        .config
        .unwrap_or_else(|| wgconsole_common::default_root_path().join("console.toml"));
    let mut config = ConsoleConfig::load(&config_path)?;
    if let Some(root) = cli.root {
        config.root_dir = root;
    }
    if let Some(tool) = cli.tool {
        config.tool.binary_path = Some(tool);
    }

    match cli.command {
        Commands::Init => peer::run_tool(&config, MeshCommand::Init).await?,
        Commands::Addpeer(args) => {
            let (name, fields) = args.into_parts();
            peer::run_tool(&config, MeshCommand::AddPeer { name, fields }).await?
        }
        Commands::Updatepeer(args) => {
            let (name, fields) = args.into_parts();
            peer::run_tool(&config, MeshCommand::UpdatePeer { name, fields }).await?
        }
        Commands::Delpeer { name } => {
            peer::run_tool(&config, MeshCommand::DelPeer { name }).await?
        }
        Commands::Showpeers => peer::run_tool(&config, MeshCommand::ShowPeers).await?,
        Commands::Genconfig(args) => files::genconfig(&config, args).await?,
        Commands::List(args) => files::list(&config, args),
        Commands::Clean(args) => files::clean(&config, args),
        Commands::Web(args) => web::execute(config, args).await?,
    }

    Ok(())
}
