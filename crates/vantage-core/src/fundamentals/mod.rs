//! # Fundamentals Records
//!
//! Typed records for the Alpha Vantage fundamentals endpoints.
//!
//! | Function | Record | Shape |
//! |----------|--------|-------|
//! | `OVERVIEW` | [`CompanyProfile`] | single object |
//! | `BALANCE_SHEET` | [`BalanceSheet`] | annual + quarterly reports |
//! | `INCOME_STATEMENT` | [`IncomeStatement`] | annual + quarterly reports |
//! | `CASH_FLOW` | [`CashFlowStatement`] | annual + quarterly reports |
//!
//! Every wire field arrives as a JSON string. Records are first read into
//! string-typed raw structs, then each field is converted by calling the
//! matching scalar codec from [`crate::domain`]. The first field that fails
//! aborts the conversion of the whole response.

use serde::Deserialize;

use crate::{FormType, ParseError};

/// Defines a statement record whose line items are all integer-ish values.
///
/// Expands to a string-typed raw struct read from the wire, the typed public
/// record, and the conversion between them.
macro_rules! statement_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $raw:ident {
            $($field:ident),+ $(,)?
        }
    ) => {
        #[derive(Debug, Clone, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub(crate) struct $raw {
            fiscal_date_ending: String,
            reported_currency: String,
            $($field: String,)+
        }

        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            pub form_type: $crate::FormType,
            pub fiscal_date_ending: $crate::CalendarDate,
            pub reported_currency: String,
            $(pub $field: i64,)+
        }

        impl $crate::fundamentals::RawStatement for $raw {
            type Record = $name;

            fn into_record(
                self,
                form_type: $crate::FormType,
            ) -> Result<$name, $crate::ParseError> {
                Ok($name {
                    form_type,
                    fiscal_date_ending: $crate::parse_date(&self.fiscal_date_ending)?,
                    reported_currency: self.reported_currency,
                    $($field: $crate::parse_int64ish(&self.$field)?,)+
                })
            }
        }
    };
}

mod balance_sheet;
mod cash_flow;
mod income_statement;
mod profile;

pub use balance_sheet::BalanceSheet;
pub use cash_flow::CashFlowStatement;
pub use income_statement::IncomeStatement;
pub use profile::CompanyProfile;

pub(crate) use balance_sheet::RawBalanceSheet;
pub(crate) use cash_flow::RawCashFlow;
pub(crate) use income_statement::RawIncomeStatement;
pub(crate) use profile::RawCompanyProfile;

/// One report row as sent on the wire, convertible into its typed record.
pub(crate) trait RawStatement {
    type Record;

    fn into_record(self, form_type: FormType) -> Result<Self::Record, ParseError>;
}

/// `{ "symbol", "annualReports": [...], "quarterlyReports": [...] }`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatementEnvelope<R> {
    #[serde(default = "Vec::new")]
    annual_reports: Vec<R>,
    #[serde(default = "Vec::new")]
    quarterly_reports: Vec<R>,
}

impl<R: RawStatement> StatementEnvelope<R> {
    /// Annual rows (10K) first, then quarterly rows (10Q), each in wire order.
    pub(crate) fn into_records(self) -> Result<Vec<R::Record>, ParseError> {
        let annual = self
            .annual_reports
            .into_iter()
            .map(|raw| raw.into_record(FormType::Form10K));
        let quarterly = self
            .quarterly_reports
            .into_iter()
            .map(|raw| raw.into_record(FormType::Form10Q));

        annual.chain(quarterly).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_report_lists_yield_no_records() {
        let envelope: StatementEnvelope<RawCashFlow> =
            serde_json::from_str(r#"{"symbol": "IBM"}"#).expect("envelope");
        assert!(envelope.into_records().expect("no rows").is_empty());
    }
}
