//! CLI command implementations

use std::path::PathBuf;
use std::sync::Arc;

use crate::http_server::{AppState, HttpServer, ServiceConfig};
use crate::observability::init_tracing;
use crate::rest_api::{Dialect, OrderListResponse};

use super::args::{Command, ServeArgs};
use super::errors::{CliError, CliResult};
use super::io::{write_json, write_line};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(args),
        Command::Extract { dialect, query } => extract(dialect, &query),
        Command::Orders { data, dialect } => orders(data, dialect),
    }
}

/// Load configuration and dataset, then serve HTTP until Ctrl-C
pub fn serve(args: ServeArgs) -> CliResult<()> {
    init_tracing();

    let (http_config, service_config) = args.into_configs();
    tracing::info!(
        event = "CONFIG_LOADED",
        addr = %http_config.socket_addr(),
        dialect = %service_config.dialect,
        data = ?service_config.data_path,
        api_key_configured = service_config.api_key_configured(),
    );
    if !service_config.api_key_configured() {
        tracing::warn!(
            event = "API_KEY_MISSING",
            "no API key configured; every order lookup will be rejected"
        );
    }

    let state = AppState::from_config(&service_config)?;
    tracing::info!(event = "STORE_LOADED", orders = state.handler.store().len());

    let server = HttpServer::new(http_config, Arc::new(state));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Print the order number a token yields under `dialect`'s grammar
pub fn extract(dialect: Dialect, query: &str) -> CliResult<()> {
    let order_number = dialect.grammar().extract(Some(query))?;
    write_line(&order_number)
}

/// Print the dataset in `dialect`'s record view
pub fn orders(data: Option<PathBuf>, dialect: Dialect) -> CliResult<()> {
    let store = ServiceConfig {
        data_path: data,
        ..Default::default()
    }
    .load_store()?;
    write_json(&OrderListResponse::new(dialect, store.list_all()))
}
