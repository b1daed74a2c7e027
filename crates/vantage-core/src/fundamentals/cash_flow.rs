statement_record! {
    /// Cash flow row from the `CASH_FLOW` function.
    pub struct CashFlowStatement / RawCashFlow {
        investments,
        change_in_liabilities,
        cashflow_from_investment,
        other_cashflow_from_investment,
        net_borrowings,
        cashflow_from_financing,
        other_cashflow_from_financing,
        change_in_operating_activities,
        net_income,
        change_in_cash,
        operating_cashflow,
        other_operating_cashflow,
        depreciation,
        dividend_payout,
        stock_sale_and_purchase,
        change_in_inventory,
        change_in_account_receivables,
        change_in_net_income,
        capital_expenditures,
        change_in_receivables,
        change_in_exchange_rate,
        change_in_cash_and_cash_equivalents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fundamentals::StatementEnvelope;
    use crate::{FormType, ParseError};

    const IBM: &str = include_str!("../../../../tests/fixtures/cash_flow_ibm.json");

    #[test]
    fn converts_rows_in_wire_order() {
        let envelope: StatementEnvelope<RawCashFlow> =
            serde_json::from_str(IBM).expect("fixture");
        let flows = envelope.into_records().expect("valid rows");

        let forms: Vec<FormType> = flows.iter().map(|f| f.form_type).collect();
        assert_eq!(forms, [FormType::Form10K, FormType::Form10Q]);
        assert_eq!(flows[0].dividend_payout, -5_707_000_000);
        assert_eq!(flows[0].change_in_exchange_rate, 0);
    }

    #[test]
    fn malformed_fiscal_date_fails_the_whole_response() {
        let mut body: serde_json::Value = serde_json::from_str(IBM).expect("fixture");
        body["quarterlyReports"][0]["fiscalDateEnding"] = serde_json::Value::from("06/30/2020");
        let envelope: StatementEnvelope<RawCashFlow> =
            serde_json::from_value(body).expect("envelope");

        let err = envelope.into_records().expect_err("must fail");
        assert!(matches!(err, ParseError::Date { .. }));
    }
}
