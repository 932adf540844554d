//! Down-payment estimator calculations.
//!
//! Derives upfront cash figures and, when requested, an estimated monthly
//! payment from a [`DownPaymentScenario`].
//!
//! # Derivation
//!
//! | Step | Value |
//! |------|-------|
//! | 1 | down payment = effective(dp mode, dp value, home price) |
//! | 2 | loan amount = home price − down payment (unclamped) |
//! | 3 | closing costs = effective(cc mode, cc value, home price) |
//! | 4 | cash to close = down payment + closing costs |
//! | 5 | monthly block (only when `estimate_monthly`): P&I via amortization, tax /12 (dollar-mode tax is annual), insurance and HOA pass through, total is the sum |
//!
//! The loan amount is deliberately not clamped — a down payment larger than
//! the price reports a negative loan, and the amortization guard then zeroes
//! the P&I.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use realty_core::DownPaymentScenario;
//! use realty_core::calculations::DownPaymentWorksheet;
//! use realty_core::models::ModeValue;
//!
//! let scenario = DownPaymentScenario {
//!     home_price: "300000".to_string(),
//!     down_payment: ModeValue::percent("20"),
//!     ..Default::default()
//! };
//!
//! let result = DownPaymentWorksheet::new().calculate(&scenario);
//!
//! assert_eq!(result.down_payment, dec!(60000));
//! assert_eq!(result.loan_amount, dec!(240000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::monthly_payment;
use crate::models::DownPaymentScenario;
use crate::normalize::normalize;

/// Fully derived output of the down-payment estimator. Recomputed from the
/// scenario on every call; nothing here is cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownPaymentResult {
    pub down_payment: Decimal,
    /// May be negative when the down payment exceeds the home price.
    pub loan_amount: Decimal,
    pub closing_costs: Decimal,
    pub cash_to_close: Decimal,
    /// Zero unless `estimate_monthly` is set.
    pub principal_and_interest: Decimal,
    pub monthly_taxes: Decimal,
    pub monthly_insurance: Decimal,
    pub monthly_hoa: Decimal,
    pub total_monthly: Decimal,
}

/// Calculator for the down-payment estimator.
#[derive(Debug, Clone, Default)]
pub struct DownPaymentWorksheet;

impl DownPaymentWorksheet {
    pub fn new() -> Self {
        Self
    }

    /// Runs the full derivation. Total: malformed input reads as zero and
    /// every division is guarded, so this never fails.
    pub fn calculate(
        &self,
        scenario: &DownPaymentScenario,
    ) -> DownPaymentResult {
        let home_price = normalize(&scenario.home_price);

        let down_payment = scenario.down_payment.effective(home_price);
        let loan_amount = home_price - down_payment;
        let closing_costs = scenario.closing_costs.effective(home_price);
        let cash_to_close = down_payment + closing_costs;

        let mut result = DownPaymentResult {
            down_payment,
            loan_amount,
            closing_costs,
            cash_to_close,
            ..Default::default()
        };

        if scenario.estimate_monthly {
            result.principal_and_interest = monthly_payment(
                loan_amount,
                normalize(&scenario.interest_rate),
                scenario.loan_term,
            );
            result.monthly_taxes = self.monthly_taxes(scenario, home_price);
            result.monthly_insurance = normalize(&scenario.insurance);
            result.monthly_hoa = normalize(&scenario.hoa);
            result.total_monthly = result.principal_and_interest
                + result.monthly_taxes
                + result.monthly_insurance
                + result.monthly_hoa;
        }

        result
    }

    /// Monthly property tax. Percent mode is a share of the home price per
    /// year; dollar mode is already an annual amount. Both divide by 12.
    fn monthly_taxes(
        &self,
        scenario: &DownPaymentScenario,
        home_price: Decimal,
    ) -> Decimal {
        scenario.property_tax.effective(home_price) / Decimal::from(12)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;
    use crate::models::{LoanTerm, ModeValue};

    fn base_scenario() -> DownPaymentScenario {
        DownPaymentScenario {
            home_price: "300000".to_string(),
            down_payment: ModeValue::percent("20"),
            closing_costs: ModeValue::percent("3"),
            ..Default::default()
        }
    }

    // =========================================================================
    // upfront figures
    // =========================================================================

    #[test]
    fn calculate_percent_down_payment() {
        let result = DownPaymentWorksheet::new().calculate(&base_scenario());

        assert_eq!(result.down_payment, dec!(60000));
        assert_eq!(result.loan_amount, dec!(240000));
        assert_eq!(result.closing_costs, dec!(9000));
        assert_eq!(result.cash_to_close, dec!(69000));
    }

    #[test]
    fn calculate_dollar_down_payment() {
        let mut scenario = base_scenario();
        scenario.down_payment = ModeValue::dollar("45000");

        let result = DownPaymentWorksheet::new().calculate(&scenario);

        assert_eq!(result.down_payment, dec!(45000));
        assert_eq!(result.loan_amount, dec!(255000));
    }

    #[test]
    fn down_payment_plus_loan_equals_price_in_every_mode() {
        let worksheet = DownPaymentWorksheet::new();
        for dp in [ModeValue::percent("12.5"), ModeValue::dollar("37500")] {
            let mut scenario = base_scenario();
            scenario.down_payment = dp;

            let result = worksheet.calculate(&scenario);

            assert_eq!(result.down_payment + result.loan_amount, dec!(300000));
        }
    }

    #[test]
    fn oversized_down_payment_leaves_negative_loan() {
        let mut scenario = base_scenario();
        scenario.down_payment = ModeValue::dollar("350000");

        let result = DownPaymentWorksheet::new().calculate(&scenario);

        assert_eq!(result.loan_amount, dec!(-50000));
    }

    #[test]
    fn empty_inputs_produce_all_zeros() {
        let result = DownPaymentWorksheet::new().calculate(&DownPaymentScenario::default());

        assert_eq!(result, DownPaymentResult::default());
    }

    // =========================================================================
    // monthly block
    // =========================================================================

    #[test]
    fn monthly_figures_are_zero_when_flag_unset() {
        let mut scenario = base_scenario();
        scenario.interest_rate = "6".to_string();
        scenario.insurance = "120".to_string();
        scenario.hoa = "50".to_string();

        let result = DownPaymentWorksheet::new().calculate(&scenario);

        assert_eq!(result.principal_and_interest, dec!(0));
        assert_eq!(result.monthly_taxes, dec!(0));
        assert_eq!(result.monthly_insurance, dec!(0));
        assert_eq!(result.monthly_hoa, dec!(0));
        assert_eq!(result.total_monthly, dec!(0));
    }

    #[test]
    fn monthly_block_with_percent_tax() {
        let mut scenario = base_scenario();
        scenario.estimate_monthly = true;
        scenario.interest_rate = "6".to_string();
        scenario.loan_term = LoanTerm::Thirty;
        scenario.property_tax = ModeValue::percent("2");
        scenario.insurance = "120".to_string();
        scenario.hoa = "50".to_string();

        let result = DownPaymentWorksheet::new().calculate(&scenario);

        // 300000 * 2% / 12 = 500/month.
        assert_eq!(result.monthly_taxes, dec!(500));
        assert_eq!(round_half_up(result.principal_and_interest), dec!(1438.92));
        assert_eq!(result.monthly_insurance, dec!(120));
        assert_eq!(result.monthly_hoa, dec!(50));
        assert_eq!(
            round_half_up(result.total_monthly),
            round_half_up(result.principal_and_interest) + dec!(670)
        );
    }

    #[test]
    fn dollar_mode_tax_is_annual() {
        let mut scenario = base_scenario();
        scenario.estimate_monthly = true;
        scenario.property_tax = ModeValue::dollar("6000");

        let result = DownPaymentWorksheet::new().calculate(&scenario);

        assert_eq!(result.monthly_taxes, dec!(500));
    }

    #[test]
    fn zero_interest_rate_zeroes_principal_and_interest() {
        let mut scenario = base_scenario();
        scenario.estimate_monthly = true;
        scenario.interest_rate = "0".to_string();
        scenario.insurance = "100".to_string();

        let result = DownPaymentWorksheet::new().calculate(&scenario);

        assert_eq!(result.principal_and_interest, dec!(0));
        // Other monthly components still accumulate.
        assert_eq!(result.total_monthly, dec!(100));
    }

    #[test]
    fn negative_loan_zeroes_principal_and_interest() {
        let mut scenario = base_scenario();
        scenario.estimate_monthly = true;
        scenario.interest_rate = "6".to_string();
        scenario.down_payment = ModeValue::dollar("400000");

        let result = DownPaymentWorksheet::new().calculate(&scenario);

        assert_eq!(result.principal_and_interest, dec!(0));
    }

    #[test]
    fn malformed_fields_read_as_zero() {
        let mut scenario = base_scenario();
        scenario.home_price = "three hundred k".to_string();

        let result = DownPaymentWorksheet::new().calculate(&scenario);

        assert_eq!(result.down_payment, dec!(0));
        assert_eq!(result.loan_amount, dec!(0));
    }
}
