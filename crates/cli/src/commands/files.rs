//! Workspace file commands: genconfig, list, clean

use clap::Args;
use std::path::PathBuf;
use wgconsole_common::{
    clear_workspace, list_config_files, read_peer_table, ConsoleConfig, MeshCommand, NoticeLevel,
};

use crate::commands::peer;
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct GenconfigArgs {
    /// Peer name (omit to generate configs for all peers)
    pub name: Option<String>,

    /// Output directory for the generated .conf files
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Output format
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Confirm the irreversible deletion
    #[arg(long)]
    pub yes: bool,
}

/// Generate config files via the external tool
pub async fn genconfig(config: &ConsoleConfig, args: GenconfigArgs) -> anyhow::Result<()> {
    let command = MeshCommand::GenConfig {
        name: args.name,
        output_dir: Some(args.output_dir.unwrap_or_else(|| config.output_dir())),
    };
    peer::run_tool(config, command).await
}

/// Render the peer database and the generated config listing
pub fn list(config: &ConsoleConfig, args: ListArgs) {
    let report = read_peer_table(&config.database_path());
    let configs = list_config_files(&config.output_dir());

    match args.format {
        OutputFormat::Table => {
            if let Some(notice) = &report.notice {
                match notice.level {
                    NoticeLevel::Info => println!("{}", notice.message),
                    NoticeLevel::Error => output::print_error(&notice.message),
                }
            }

            println!("Peers ({})", config.database_path().display());
            output::print_table(&report.table.columns, &report.table.rows);

            println!();
            println!("Generated configs ({})", config.output_dir().display());
            let rows: Vec<Vec<String>> = configs
                .iter()
                .map(|f| {
                    vec![
                        f.filename.clone(),
                        format!("{:.2}", f.size_kb),
                        f.modified.clone(),
                    ]
                })
                .collect();
            output::print_table(&wgconsole_common::listing::LISTING_COLUMNS, &rows);
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "peers": report.table,
                "peer_notice": report.notice,
                "configs": configs,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&value).unwrap_or_default()
            );
        }
    }
}

/// Danger zone: delete the database and every generated config
pub fn clean(config: &ConsoleConfig, args: CleanArgs) {
    if !args.yes {
        output::print_error("This deletes the peer database and all generated configs. Re-run with --yes to confirm.");
        std::process::exit(1);
    }

    let report = clear_workspace(&config.database_path(), &config.output_dir());

    for path in &report.removed {
        println!("removed {}", path);
    }
    for failure in &report.failed {
        output::print_error(&format!("{}: {}", failure.path, failure.reason));
    }

    if report.succeeded() {
        output::print_success(&format!("Removed {} file(s)", report.removed.len()));
    } else {
        std::process::exit(1);
    }
}
