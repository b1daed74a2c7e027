use thiserror::Error;

use crate::http_client::HttpError;

/// Malformed wire value. Every scalar codec in the crate fails with this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("cannot parse money value '{value}': {reason}")]
    Money { value: String, reason: &'static str },

    #[error("cannot parse date '{value}', expected YYYY-MM-DD")]
    Date { value: String },

    #[error("cannot parse integer value '{value}'")]
    Integer { value: String },

    #[error("unknown form type '{value}', expected 10K or 10Q")]
    FormType { value: String },
}

impl ParseError {
    /// Raw input that failed to parse.
    pub fn value(&self) -> &str {
        match self {
            Self::Money { value, .. }
            | Self::Date { value }
            | Self::Integer { value }
            | Self::FormType { value } => value,
        }
    }
}

/// Request-side validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },
}

/// Invalid client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api key cannot be empty")]
    EmptyApiKey,
    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("timeout must be a positive number of milliseconds: '{value}'")]
    InvalidTimeout { value: String },
}

/// Errors returned by [`crate::VantageClient`] operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("alphavantage returned status {status}")]
    Status { status: u16, body: String },

    #[error("alphavantage rejected the request: {message}")]
    Api { message: String },

    #[error("failed to decode {report} response: {source}")]
    Decode {
        report: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse {report} record: {source}")]
    Parse {
        report: &'static str,
        #[source]
        source: ParseError,
    },
}

impl ClientError {
    /// Whether repeating the same request could succeed.
    pub fn retryable(&self) -> bool {
        match self {
            Self::Transport(error) => error.retryable(),
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::Validation(_) | Self::Api { .. } | Self::Decode { .. } | Self::Parse { .. } => {
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_keeps_offending_value() {
        let error = ParseError::Money {
            value: String::from("127.0.0.1"),
            reason: "too many '.' separators",
        };
        assert_eq!(error.value(), "127.0.0.1");
        assert!(error.to_string().contains("127.0.0.1"));
    }

    #[test]
    fn server_errors_are_retryable() {
        let error = ClientError::Status {
            status: 503,
            body: String::new(),
        };
        assert!(error.retryable());

        let error = ClientError::Status {
            status: 404,
            body: String::new(),
        };
        assert!(!error.retryable());
    }
}
