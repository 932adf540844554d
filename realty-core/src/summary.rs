//! Plain-text summaries and the pre-formatted payloads handed to the
//! narrative-analysis client.
//!
//! Both renderers are pure functions of a scenario/result pair, so the
//! clipboard text can be tested without any UI. Every figure goes through
//! [`crate::format`]; the analysis payloads carry strings only.

use rust_decimal::Decimal;

use crate::calculations::{DownPaymentResult, RoiResult};
use crate::format::{fixed2, format_currency, format_percent};
use crate::models::{DownPaymentScenario, InvestmentScenario};
use crate::normalize::normalize;

/// Deterministic clipboard text for the down-payment estimator. The monthly
/// block appears only when the scenario asked for a monthly estimate.
pub fn down_payment_summary(
    scenario: &DownPaymentScenario,
    result: &DownPaymentResult,
) -> String {
    let mut text = format!(
        "Down Payment Estimator Summary:\n\
         Home Price: {}\n\
         Down Payment: {}\n\
         Loan Amount: {}\n\
         Closing Costs: {}\n\
         Cash to Close: {}",
        format_currency(normalize(&scenario.home_price)),
        format_currency(result.down_payment),
        format_currency(result.loan_amount),
        format_currency(result.closing_costs),
        format_currency(result.cash_to_close),
    );

    if scenario.estimate_monthly {
        text.push_str(&format!(
            "\n\n--- Monthly ---\n\
             P&I: {}\n\
             Taxes: {}\n\
             Insurance: {}\n\
             HOA: {}\n\
             Total Monthly: {}",
            format_currency(result.principal_and_interest),
            format_currency(result.monthly_taxes),
            format_currency(result.monthly_insurance),
            format_currency(result.monthly_hoa),
            format_currency(result.total_monthly),
        ));
    }

    text
}

/// Deterministic clipboard text for the ROI calculator. Falls back to
/// `"property"` when no address label was given.
pub fn investment_summary(
    scenario: &InvestmentScenario,
    result: &RoiResult,
) -> String {
    let label = if scenario.property_address.trim().is_empty() {
        "property"
    } else {
        scenario.property_address.trim()
    };

    format!(
        "Investment ROI Summary for {label}:\n\
         Purchase Price: {}\n\
         Total Cash Invested: {}\n\
         ---\n\
         Monthly Cash Flow: {}\n\
         Annual Cash Flow: {}\n\
         ---\n\
         Cash on Cash Return: {}\n\
         Cap Rate: {}",
        format_currency(normalize(&scenario.purchase_price)),
        format_currency(result.total_cash_invested),
        format_currency(result.cash_flow_monthly),
        format_currency(result.cash_flow_annual),
        format_percent(result.cash_on_cash_return),
        format_percent(result.cap_rate),
    )
}

/// Monthly sub-block of [`DownPaymentAnalysisData`], present only when the
/// scenario estimated a monthly payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownPaymentMonthlyData {
    pub total: String,
    pub principal_and_interest: String,
    pub taxes: String,
    pub insurance: String,
    pub hoa: String,
}

/// Formatted snapshot of a down-payment result for the analysis client.
/// Strings only — the client never sees raw numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownPaymentAnalysisData {
    pub home_price: String,
    pub down_payment_amount: String,
    /// Bare two-decimal number (the prompt supplies the `%`). Derived from
    /// the dollar amount when the input was in dollar mode; zero when the
    /// home price is zero.
    pub down_payment_percent: String,
    pub loan_amount: String,
    pub loan_type: String,
    pub closing_costs: String,
    pub cash_to_close: String,
    pub monthly: Option<DownPaymentMonthlyData>,
}

impl DownPaymentAnalysisData {
    pub fn from_scenario(
        scenario: &DownPaymentScenario,
        result: &DownPaymentResult,
    ) -> Self {
        let home_price = normalize(&scenario.home_price);

        let down_payment_percent = if scenario.down_payment.is_percent() {
            fixed2(scenario.down_payment.amount())
        } else if home_price > Decimal::ZERO {
            fixed2(result.down_payment / home_price * Decimal::ONE_HUNDRED)
        } else {
            fixed2(Decimal::ZERO)
        };

        let monthly = scenario.estimate_monthly.then(|| DownPaymentMonthlyData {
            total: format_currency(result.total_monthly),
            principal_and_interest: format_currency(result.principal_and_interest),
            taxes: format_currency(result.monthly_taxes),
            insurance: format_currency(result.monthly_insurance),
            hoa: format_currency(result.monthly_hoa),
        });

        Self {
            home_price: format_currency(home_price),
            down_payment_amount: format_currency(result.down_payment),
            down_payment_percent,
            loan_amount: format_currency(result.loan_amount),
            loan_type: scenario.loan_type.as_str().to_string(),
            closing_costs: format_currency(result.closing_costs),
            cash_to_close: format_currency(result.cash_to_close),
            monthly,
        }
    }
}

/// Formatted snapshot of an ROI result for the analysis client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoiAnalysisData {
    pub purchase_price: String,
    pub total_cash_invested: String,
    pub loan_amount: String,
    pub gross_monthly_income: String,
    pub operating_expenses: String,
    pub noi_monthly: String,
    pub cash_flow_monthly: String,
    pub cash_flow_annual: String,
    /// Bare two-decimal numbers; the prompt supplies the `%`.
    pub cash_on_cash_return: String,
    pub cap_rate: String,
}

impl RoiAnalysisData {
    pub fn from_scenario(
        scenario: &InvestmentScenario,
        result: &RoiResult,
    ) -> Self {
        Self {
            purchase_price: format_currency(normalize(&scenario.purchase_price)),
            total_cash_invested: format_currency(result.total_cash_invested),
            loan_amount: format_currency(result.loan_amount),
            gross_monthly_income: format_currency(result.gross_monthly_income),
            operating_expenses: format_currency(result.operating_expenses),
            noi_monthly: format_currency(result.noi_monthly),
            cash_flow_monthly: format_currency(result.cash_flow_monthly),
            cash_flow_annual: format_currency(result.cash_flow_annual),
            cash_on_cash_return: fixed2(result.cash_on_cash_return),
            cap_rate: fixed2(result.cap_rate),
        }
    }
}
