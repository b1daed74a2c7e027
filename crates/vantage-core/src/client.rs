//! Alpha Vantage fundamentals client.
//!
//! Each operation issues exactly one `GET {base_url}/query?function=..&symbol=..&apikey=..`
//! through the injected [`HttpClient`], checks the status, and decodes the
//! body into typed records. There is no retry, caching or rate limiting.
//!
//! ```rust,ignore
//! use vantage_core::{Symbol, VantageClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = VantageClient::from_env()?;
//!     let sheets = client.balance_sheets(&Symbol::parse("IBM")?).await?;
//!     for sheet in &sheets {
//!         println!("{} {} {}", sheet.form_type, sheet.fiscal_date_ending, sheet.total_assets);
//!     }
//!     Ok(())
//! }
//! ```

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::fundamentals::{
    RawBalanceSheet, RawCashFlow, RawCompanyProfile, RawIncomeStatement, RawStatement,
    StatementEnvelope,
};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{
    BalanceSheet, CashFlowStatement, ClientError, CompanyProfile, ConfigError, IncomeStatement,
    Symbol,
};

/// Keys the API uses for error and throttling notices delivered with status 200.
const UPSTREAM_NOTICE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

/// Value of the `function` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Overview,
    BalanceSheet,
    IncomeStatement,
    CashFlow,
}

impl Function {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "OVERVIEW",
            Self::BalanceSheet => "BALANCE_SHEET",
            Self::IncomeStatement => "INCOME_STATEMENT",
            Self::CashFlow => "CASH_FLOW",
        }
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client for the company fundamentals endpoints.
#[derive(Clone)]
pub struct VantageClient {
    http_client: Arc<dyn HttpClient>,
    config: ClientConfig,
}

impl VantageClient {
    pub fn new(http_client: Arc<dyn HttpClient>, config: ClientConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Production client configured from `VANTAGE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(
            Arc::new(ReqwestHttpClient::new()),
            ClientConfig::from_env()?,
        ))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn build_url(&self, function: Function, symbol: &Symbol) -> String {
        format!(
            "{}/query?function={}&symbol={}&apikey={}",
            self.config.base_url(),
            function.as_str(),
            urlencoding::encode(symbol.as_str()),
            urlencoding::encode(self.config.api_key())
        )
    }

    pub async fn company_profile(&self, symbol: &Symbol) -> Result<CompanyProfile, ClientError> {
        let function = Function::Overview;
        let raw: RawCompanyProfile = self.fetch(function, symbol).await?;
        CompanyProfile::try_from(raw).map_err(|source| ClientError::Parse {
            report: function.as_str(),
            source,
        })
    }

    /// Annual (10K) balance sheets followed by quarterly (10Q) ones.
    pub async fn balance_sheets(&self, symbol: &Symbol) -> Result<Vec<BalanceSheet>, ClientError> {
        self.fetch_statements::<RawBalanceSheet>(Function::BalanceSheet, symbol)
            .await
    }

    /// Annual (10K) income statements followed by quarterly (10Q) ones.
    pub async fn income_statements(
        &self,
        symbol: &Symbol,
    ) -> Result<Vec<IncomeStatement>, ClientError> {
        self.fetch_statements::<RawIncomeStatement>(Function::IncomeStatement, symbol)
            .await
    }

    /// Annual (10K) cash flow statements followed by quarterly (10Q) ones.
    pub async fn cash_flows(&self, symbol: &Symbol) -> Result<Vec<CashFlowStatement>, ClientError> {
        self.fetch_statements::<RawCashFlow>(Function::CashFlow, symbol)
            .await
    }

    async fn fetch_statements<R>(
        &self,
        function: Function,
        symbol: &Symbol,
    ) -> Result<Vec<R::Record>, ClientError>
    where
        R: RawStatement + DeserializeOwned,
    {
        let envelope: StatementEnvelope<R> = self.fetch(function, symbol).await?;
        envelope
            .into_records()
            .map_err(|source| ClientError::Parse {
                report: function.as_str(),
                source,
            })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        function: Function,
        symbol: &Symbol,
    ) -> Result<T, ClientError> {
        debug!(%function, %symbol, "requesting alphavantage fundamentals");

        let request = HttpRequest::get(self.build_url(function, symbol))
            .with_header("Content-Type", "application/json")
            .with_timeout_ms(self.config.timeout_ms());

        let response = self.http_client.execute(request).await?;

        if !response.is_success() {
            debug!(
                %function,
                status = response.status,
                body = %response.body,
                "alphavantage returned non-success status"
            );
            return Err(ClientError::Status {
                status: response.status,
                body: response.body,
            });
        }

        decode_body(function, &response.body)
    }
}

fn decode_body<T: DeserializeOwned>(function: Function, body: &str) -> Result<T, ClientError> {
    let report = function.as_str();
    let value: Value =
        serde_json::from_str(body).map_err(|source| ClientError::Decode { report, source })?;

    if let Some(message) = upstream_notice(&value) {
        warn!(%function, %message, "alphavantage answered with a notice instead of data");
        return Err(ClientError::Api { message });
    }

    serde_json::from_value(value).map_err(|source| ClientError::Decode { report, source })
}

fn upstream_notice(value: &Value) -> Option<String> {
    let object = value.as_object()?;
    UPSTREAM_NOTICE_KEYS
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .map(str::to_owned)
}
