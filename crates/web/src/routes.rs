//! Console API routes
//!
//! Stateless render-per-interaction model: `/state` re-reads the database
//! and the output directory on every call, `/command` runs one tool
//! invocation and tells the UI whether a refresh is due, `/cleanup` is the
//! danger zone.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use wgconsole_common::{
    clear_workspace, list_config_files, read_peer_table, CleanupFailure, ConfigFileEntry,
    ConsoleConfig, Error, MeshCommand, MeshTool, MeshconfTool, Notice, PeerFields, PeerTable,
};

// ============================================================================
// State
// ============================================================================

/// Console API state
///
/// Holds only the immutable configuration and the tool handle; all peer and
/// config state lives on disk and is re-read per request.
pub struct ConsoleState {
    pub config: ConsoleConfig,
    pub tool: Arc<dyn MeshTool>,
}

impl ConsoleState {
    pub fn new(config: ConsoleConfig) -> Self {
        let tool = Arc::new(MeshconfTool::new(&config));
        Self { config, tool }
    }
}

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct CommandRequest {
    command: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    fields: PeerFields,
    #[serde(default)]
    output_dir: Option<String>,
}

#[derive(Debug, Serialize)]
struct CommandResponse {
    command: String,
    succeeded: bool,
    exit_code: Option<i32>,
    output: String,
    /// Whether the UI should reload `/state` after this command
    refresh: bool,
}

#[derive(Debug, Serialize)]
struct StateResponse {
    peers: PeerTable,
    peer_notice: Option<Notice>,
    configs: Vec<ConfigFileEntry>,
    database_path: String,
    output_dir: String,
}

#[derive(Debug, Serialize)]
struct CleanupResponse {
    succeeded: bool,
    removed: Vec<String>,
    failed: Vec<CleanupFailure>,
    message: String,
}

// ============================================================================
// Router
// ============================================================================

pub fn console_router(state: Arc<ConsoleState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/state", get(state_handler))
        .route("/command", post(command_handler))
        .route("/cleanup", post(cleanup_handler))
        .with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "wgconsole-web",
        "version": wgconsole_common::VERSION,
    }))
}

async fn state_handler(State(state): State<Arc<ConsoleState>>) -> impl IntoResponse {
    let report = read_peer_table(&state.config.database_path());
    let configs = list_config_files(&state.config.output_dir());

    Json(StateResponse {
        peers: report.table,
        peer_notice: report.notice,
        configs,
        database_path: state.config.database_path().display().to_string(),
        output_dir: state.config.output_dir().display().to_string(),
    })
}

async fn command_handler(
    State(state): State<Arc<ConsoleState>>,
    Json(req): Json<CommandRequest>,
) -> impl IntoResponse {
    let command = match build_command(&req, &state.config) {
        Ok(command) => command,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e })),
            )
                .into_response();
        }
    };

    info!(
        "Running {} against {}",
        command.name(),
        state.config.database_path().display()
    );

    match state.tool.run(&command).await {
        Ok(output) => (
            StatusCode::OK,
            Json(CommandResponse {
                command: command.name().to_string(),
                succeeded: output.succeeded(),
                exit_code: output.exit_code(),
                refresh: command.mutates(),
                output: output.text,
            }),
        )
            .into_response(),
        Err(e @ Error::Timeout { .. }) => (
            StatusCode::GATEWAY_TIMEOUT,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}

async fn cleanup_handler(State(state): State<Arc<ConsoleState>>) -> impl IntoResponse {
    warn!(
        "Clearing mesh workspace under {}",
        state.config.root_dir.display()
    );

    let report = clear_workspace(&state.config.database_path(), &state.config.output_dir());
    let message = if report.succeeded() {
        format!("Removed {} file(s)", report.removed.len())
    } else {
        format!(
            "Removed {} file(s), {} could not be removed",
            report.removed.len(),
            report.failed.len()
        )
    };

    Json(CleanupResponse {
        succeeded: report.succeeded(),
        removed: report.removed,
        failed: report.failed,
        message,
    })
}

/// Turn an API request into a tool command.
///
/// Field contents are forwarded verbatim; only the command name itself is
/// checked, so nothing is spawned for a request no form can produce.
fn build_command(req: &CommandRequest, config: &ConsoleConfig) -> Result<MeshCommand, String> {
    let name = || req.name.clone().unwrap_or_default();

    match req.command.as_str() {
        "init" => Ok(MeshCommand::Init),
        "addpeer" => Ok(MeshCommand::AddPeer {
            name: name(),
            fields: req.fields.clone(),
        }),
        "updatepeer" => Ok(MeshCommand::UpdatePeer {
            name: name(),
            fields: req.fields.clone(),
        }),
        "delpeer" => Ok(MeshCommand::DelPeer { name: name() }),
        "showpeers" => Ok(MeshCommand::ShowPeers),
        "genconfig" => {
            let output_dir = match req.output_dir.as_deref().map(str::trim) {
                Some(dir) if !dir.is_empty() => PathBuf::from(dir),
                _ => config.output_dir(),
            };
            Ok(MeshCommand::GenConfig {
                name: req.name.clone(),
                output_dir: Some(output_dir),
            })
        }
        other => Err(format!("Unknown command: {other}")),
    }
}
