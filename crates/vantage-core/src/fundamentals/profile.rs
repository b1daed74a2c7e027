use serde::{Deserialize, Serialize};

use crate::{parse_date, parse_int64ish, parse_money_field, CalendarDate, Money, ParseError};

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawCompanyProfile {
    #[serde(rename = "Symbol")]
    symbol: String,
    #[serde(rename = "AssetType")]
    asset_type: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Exchange")]
    exchange: String,
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Sector")]
    sector: String,
    #[serde(rename = "Industry")]
    industry: String,
    #[serde(rename = "Address")]
    address: String,
    #[serde(rename = "FullTimeEmployees")]
    full_time_employees: String,
    #[serde(rename = "FiscalYearEnd")]
    fiscal_year_end: String,
    #[serde(rename = "LatestQuarter")]
    latest_quarter: String,
    #[serde(rename = "MarketCapitalization")]
    market_capitalization: String,
    #[serde(rename = "EBITDA")]
    ebitda: String,
    #[serde(rename = "PERatio")]
    pe_ratio: String,
    #[serde(rename = "PEGRatio")]
    peg_ratio: String,
    #[serde(rename = "BookValue")]
    book_value: String,
    #[serde(rename = "DividendPerShare")]
    dividend_per_share: String,
    #[serde(rename = "DividendYield")]
    dividend_yield: String,
    #[serde(rename = "EPS")]
    eps: String,
    #[serde(rename = "RevenuePerShareTTM")]
    revenue_per_share_ttm: String,
    #[serde(rename = "ProfitMargin")]
    profit_margin: String,
    #[serde(rename = "OperatingMarginTTM")]
    operating_margin_ttm: String,
    #[serde(rename = "ReturnOnAssetsTTM")]
    return_on_assets_ttm: String,
    #[serde(rename = "ReturnOnEquityTTM")]
    return_on_equity_ttm: String,
    #[serde(rename = "RevenueTTM")]
    revenue_ttm: String,
    #[serde(rename = "GrossProfitTTM")]
    gross_profit_ttm: String,
    #[serde(rename = "DilutedEPSTTM")]
    diluted_eps_ttm: String,
    #[serde(rename = "QuarterlyEarningsGrowthYOY")]
    quarterly_earnings_growth_yoy: String,
    #[serde(rename = "QuarterlyRevenueGrowthYOY")]
    quarterly_revenue_growth_yoy: String,
    #[serde(rename = "AnalystTargetPrice")]
    analyst_target_price: String,
    #[serde(rename = "TrailingPE")]
    trailing_pe: String,
    #[serde(rename = "ForwardPE")]
    forward_pe: String,
    #[serde(rename = "PriceToSalesRatioTTM")]
    price_to_sales_ratio_ttm: String,
    #[serde(rename = "PriceToBookRatio")]
    price_to_book_ratio: String,
    #[serde(rename = "EVToRevenue")]
    ev_to_revenue: String,
    #[serde(rename = "EVToEBITDA")]
    ev_to_ebitda: String,
    #[serde(rename = "Beta")]
    beta: String,
    #[serde(rename = "52WeekHigh")]
    week_52_high: String,
    #[serde(rename = "52WeekLow")]
    week_52_low: String,
    #[serde(rename = "50DayMovingAverage")]
    moving_average_50_day: String,
    #[serde(rename = "200DayMovingAverage")]
    moving_average_200_day: String,
    #[serde(rename = "SharesOutstanding")]
    shares_outstanding: String,
    #[serde(rename = "SharesFloat")]
    shares_float: String,
    #[serde(rename = "SharesShort")]
    shares_short: String,
    #[serde(rename = "SharesShortPriorMonth")]
    shares_short_prior_month: String,
    #[serde(rename = "ShortRatio")]
    short_ratio: String,
    #[serde(rename = "ShortPercentOutstanding")]
    short_percent_outstanding: String,
    #[serde(rename = "ShortPercentFloat")]
    short_percent_float: String,
    #[serde(rename = "PercentInsiders")]
    percent_insiders: String,
    #[serde(rename = "PercentInstitutions")]
    percent_institutions: String,
    #[serde(rename = "ForwardAnnualDividendRate")]
    forward_annual_dividend_rate: String,
    #[serde(rename = "ForwardAnnualDividendYield")]
    forward_annual_dividend_yield: String,
    #[serde(rename = "PayoutRatio")]
    payout_ratio: String,
    #[serde(rename = "DividendDate")]
    dividend_date: String,
    #[serde(rename = "ExDividendDate")]
    ex_dividend_date: String,
    #[serde(rename = "LastSplitFactor")]
    last_split_factor: String,
    #[serde(rename = "LastSplitDate")]
    last_split_date: String,
}

/// Company overview from the `OVERVIEW` function.
///
/// Ratios and per-share figures are [`Money`] values with four fractional
/// digits; counts and absolute amounts are plain integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub symbol: String,
    pub asset_type: String,
    pub name: String,
    pub description: String,
    pub exchange: String,
    pub currency: String,
    pub country: String,
    pub sector: String,
    pub industry: String,
    pub address: String,
    pub full_time_employees: i64,
    pub fiscal_year_end: String,
    pub latest_quarter: CalendarDate,
    pub market_capitalization: i64,
    pub ebitda: i64,
    pub pe_ratio: Money,
    pub peg_ratio: Money,
    pub book_value: Money,
    pub dividend_per_share: Money,
    pub dividend_yield: Money,
    pub eps: Money,
    pub revenue_per_share_ttm: Money,
    pub profit_margin: Money,
    pub operating_margin_ttm: Money,
    pub return_on_assets_ttm: Money,
    pub return_on_equity_ttm: Money,
    pub revenue_ttm: i64,
    pub gross_profit_ttm: i64,
    pub diluted_eps_ttm: Money,
    pub quarterly_earnings_growth_yoy: Money,
    pub quarterly_revenue_growth_yoy: Money,
    pub analyst_target_price: Money,
    pub trailing_pe: Money,
    pub forward_pe: Money,
    pub price_to_sales_ratio_ttm: Money,
    pub price_to_book_ratio: Money,
    pub ev_to_revenue: Money,
    pub ev_to_ebitda: Money,
    pub beta: Money,
    pub week_52_high: Money,
    pub week_52_low: Money,
    pub moving_average_50_day: Money,
    pub moving_average_200_day: Money,
    pub shares_outstanding: i64,
    pub shares_float: i64,
    pub shares_short: i64,
    pub shares_short_prior_month: i64,
    pub short_ratio: Money,
    pub short_percent_outstanding: Money,
    pub short_percent_float: Money,
    pub percent_insiders: Money,
    pub percent_institutions: Money,
    pub forward_annual_dividend_rate: Money,
    pub forward_annual_dividend_yield: Money,
    pub payout_ratio: Money,
    pub dividend_date: CalendarDate,
    pub ex_dividend_date: CalendarDate,
    pub last_split_factor: String,
    pub last_split_date: CalendarDate,
}

impl TryFrom<RawCompanyProfile> for CompanyProfile {
    type Error = ParseError;

    fn try_from(raw: RawCompanyProfile) -> Result<Self, Self::Error> {
        Ok(Self {
            symbol: raw.symbol,
            asset_type: raw.asset_type,
            name: raw.name,
            description: raw.description,
            exchange: raw.exchange,
            currency: raw.currency,
            country: raw.country,
            sector: raw.sector,
            industry: raw.industry,
            address: raw.address,
            full_time_employees: parse_int64ish(&raw.full_time_employees)?,
            fiscal_year_end: raw.fiscal_year_end,
            latest_quarter: parse_date(&raw.latest_quarter)?,
            market_capitalization: parse_int64ish(&raw.market_capitalization)?,
            ebitda: parse_int64ish(&raw.ebitda)?,
            pe_ratio: parse_money_field(&raw.pe_ratio)?,
            peg_ratio: parse_money_field(&raw.peg_ratio)?,
            book_value: parse_money_field(&raw.book_value)?,
            dividend_per_share: parse_money_field(&raw.dividend_per_share)?,
            dividend_yield: parse_money_field(&raw.dividend_yield)?,
            eps: parse_money_field(&raw.eps)?,
            revenue_per_share_ttm: parse_money_field(&raw.revenue_per_share_ttm)?,
            profit_margin: parse_money_field(&raw.profit_margin)?,
            operating_margin_ttm: parse_money_field(&raw.operating_margin_ttm)?,
            return_on_assets_ttm: parse_money_field(&raw.return_on_assets_ttm)?,
            return_on_equity_ttm: parse_money_field(&raw.return_on_equity_ttm)?,
            revenue_ttm: parse_int64ish(&raw.revenue_ttm)?,
            gross_profit_ttm: parse_int64ish(&raw.gross_profit_ttm)?,
            diluted_eps_ttm: parse_money_field(&raw.diluted_eps_ttm)?,
            quarterly_earnings_growth_yoy: parse_money_field(&raw.quarterly_earnings_growth_yoy)?,
            quarterly_revenue_growth_yoy: parse_money_field(&raw.quarterly_revenue_growth_yoy)?,
            analyst_target_price: parse_money_field(&raw.analyst_target_price)?,
            trailing_pe: parse_money_field(&raw.trailing_pe)?,
            forward_pe: parse_money_field(&raw.forward_pe)?,
            price_to_sales_ratio_ttm: parse_money_field(&raw.price_to_sales_ratio_ttm)?,
            price_to_book_ratio: parse_money_field(&raw.price_to_book_ratio)?,
            ev_to_revenue: parse_money_field(&raw.ev_to_revenue)?,
            ev_to_ebitda: parse_money_field(&raw.ev_to_ebitda)?,
            beta: parse_money_field(&raw.beta)?,
            week_52_high: parse_money_field(&raw.week_52_high)?,
            week_52_low: parse_money_field(&raw.week_52_low)?,
            moving_average_50_day: parse_money_field(&raw.moving_average_50_day)?,
            moving_average_200_day: parse_money_field(&raw.moving_average_200_day)?,
            shares_outstanding: parse_int64ish(&raw.shares_outstanding)?,
            shares_float: parse_int64ish(&raw.shares_float)?,
            shares_short: parse_int64ish(&raw.shares_short)?,
            shares_short_prior_month: parse_int64ish(&raw.shares_short_prior_month)?,
            short_ratio: parse_money_field(&raw.short_ratio)?,
            short_percent_outstanding: parse_money_field(&raw.short_percent_outstanding)?,
            short_percent_float: parse_money_field(&raw.short_percent_float)?,
            percent_insiders: parse_money_field(&raw.percent_insiders)?,
            percent_institutions: parse_money_field(&raw.percent_institutions)?,
            forward_annual_dividend_rate: parse_money_field(&raw.forward_annual_dividend_rate)?,
            forward_annual_dividend_yield: parse_money_field(&raw.forward_annual_dividend_yield)?,
            payout_ratio: parse_money_field(&raw.payout_ratio)?,
            dividend_date: parse_date(&raw.dividend_date)?,
            ex_dividend_date: parse_date(&raw.ex_dividend_date)?,
            last_split_factor: raw.last_split_factor,
            last_split_date: parse_date(&raw.last_split_date)?,
        })
    }
}
