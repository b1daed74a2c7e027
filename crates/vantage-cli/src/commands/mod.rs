mod fundamentals;

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;
use vantage_core::{ClientConfig, ReqwestHttpClient, Symbol, VantageClient};

use crate::cli::Cli;
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    let client = build_client(cli)?;
    let symbol = Symbol::parse(cli.command.symbol())?;
    fundamentals::run(&cli.command, &symbol, &client).await
}

fn build_client(cli: &Cli) -> Result<VantageClient, CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms)?;
    }
    debug!(?config, "client configured");

    Ok(VantageClient::new(
        Arc::new(ReqwestHttpClient::new()),
        config,
    ))
}
