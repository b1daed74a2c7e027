//! # Vantage Core
//!
//! Client library for the Alpha Vantage company fundamentals API.
//!
//! ## Overview
//!
//! - **Scalar codecs** for the API's string encodings: fixed-point [`Money`]
//!   (scale 10,000) and [`CalendarDate`] (`YYYY-MM-DD`, UTC)
//! - **Typed records** for company overview, balance sheet, income statement
//!   and cash flow reports
//! - **Injectable transport** ([`HttpClient`]) with a reqwest implementation
//!   and a canned-response implementation for offline use
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`VantageClient`] and endpoint functions |
//! | [`config`] | [`ClientConfig`] and environment lookup |
//! | [`domain`] | Money/date/integer codecs, [`FormType`], [`Symbol`] |
//! | [`error`] | [`ParseError`], [`ClientError`] and friends |
//! | [`fundamentals`] | Record types |
//! | [`http_client`] | Transport abstraction |
//!
//! ## Codecs
//!
//! ```rust
//! use vantage_core::{format_date, format_money, parse_date, parse_money};
//!
//! let money = parse_money("-0.12").unwrap();
//! assert_eq!(money.scaled(), -1200);
//! assert_eq!(format_money(money), "-0.1200");
//! assert!(parse_money("0.12345").is_err());
//!
//! let date = parse_date("2019-12-31").unwrap();
//! assert_eq!(format_date(date), "2019-12-31");
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use vantage_core::ClientError;
//!
//! fn describe(error: &ClientError) -> &'static str {
//!     match error {
//!         ClientError::Parse { .. } => "a field did not match its wire format",
//!         ClientError::Api { .. } => "the API answered with a notice",
//!         error if error.retryable() => "temporary failure",
//!         _ => "request failed",
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The API key travels only as the `apikey` query parameter
//! - Keys are redacted from `Debug` output and never logged

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod fundamentals;
pub mod http_client;

pub use client::{Function, VantageClient};

pub use config::ClientConfig;

pub use domain::{
    format_date, format_money, parse_date, parse_int64ish, parse_money, parse_money_field,
    CalendarDate, FormType, Money, Symbol,
};

pub use error::{ClientError, ConfigError, ParseError, ValidationError};

pub use fundamentals::{BalanceSheet, CashFlowStatement, CompanyProfile, IncomeStatement};

pub use http_client::{
    HttpClient, HttpError, HttpFuture, HttpRequest, HttpResponse, ReqwestHttpClient,
    StaticHttpClient,
};
