use serde_json::Value;
use vantage_core::{Symbol, VantageClient};

use crate::cli::Command;
use crate::error::CliError;

pub async fn run(
    command: &Command,
    symbol: &Symbol,
    client: &VantageClient,
) -> Result<Value, CliError> {
    let data = match command {
        Command::Profile(_) => serde_json::to_value(client.company_profile(symbol).await?)?,
        Command::BalanceSheet(_) => serde_json::to_value(client.balance_sheets(symbol).await?)?,
        Command::IncomeStatement(_) => {
            serde_json::to_value(client.income_statements(symbol).await?)?
        }
        Command::CashFlow(_) => serde_json::to_value(client.cash_flows(symbol).await?)?,
    };

    Ok(data)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use vantage_core::{ClientConfig, StaticHttpClient};

    use super::*;
    use crate::cli::SymbolArgs;

    fn client_serving(body: &str) -> VantageClient {
        VantageClient::new(
            Arc::new(StaticHttpClient::ok_json(body)),
            ClientConfig::default(),
        )
    }

    fn args() -> SymbolArgs {
        SymbolArgs {
            symbol: String::from("IBM"),
        }
    }

    #[tokio::test]
    async fn profile_renders_money_and_dates_as_strings() {
        let client = client_serving(include_str!("../../../../tests/fixtures/overview_ibm.json"));
        let symbol = Symbol::parse("IBM").expect("symbol");

        let data = run(&Command::Profile(args()), &symbol, &client)
            .await
            .expect("profile");

        assert_eq!(data["symbol"], "IBM");
        assert_eq!(data["bookValue"], "23.0760");
        assert_eq!(data["dividendDate"], "2020-09-10");
    }

    #[tokio::test]
    async fn statements_render_as_array() {
        let client = client_serving(include_str!(
            "../../../../tests/fixtures/cash_flow_ibm.json"
        ));
        let symbol = Symbol::parse("IBM").expect("symbol");

        let data = run(&Command::CashFlow(args()), &symbol, &client)
            .await
            .expect("cash flows");

        let rows = data.as_array().expect("array");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["formType"], "10K");
        assert_eq!(rows[1]["formType"], "10Q");
    }

    #[tokio::test]
    async fn upstream_notice_becomes_client_error() {
        let client = client_serving(r#"{"Information": "The demo API key is for demo purposes only."}"#);
        let symbol = Symbol::parse("IBM").expect("symbol");

        let error = run(&Command::IncomeStatement(args()), &symbol, &client)
            .await
            .expect_err("notice");

        assert_eq!(error.exit_code(), 3);
    }
}
