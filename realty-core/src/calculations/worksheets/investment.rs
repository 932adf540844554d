//! Investment ROI calculations.
//!
//! Two cooperating derivations over an [`InvestmentScenario`]:
//!
//! * the **asset performance test** — monthly-equivalent projections of tax,
//!   insurance, and management fee plus an unleveraged NOI/cap-rate readout,
//! * the **full ROI worksheet** — financing, vacancy, reserves, and the
//!   leveraged return metrics.
//!
//! The ROI worksheet reuses the asset-test expense subtotal as its operating
//! expense base and layers CapEx reserve and utilities on top. Vacancy loss
//! reduces income rather than joining the expenses — that placement is part
//! of the contract.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use realty_core::InvestmentScenario;
//! use realty_core::calculations::InvestmentWorksheet;
//! use realty_core::models::ModeValue;
//!
//! let scenario = InvestmentScenario {
//!     purchase_price: "200000".to_string(),
//!     down_payment_percent: "25".to_string(),
//!     closing_costs: ModeValue::dollar("5000"),
//!     ..Default::default()
//! };
//!
//! let result = InvestmentWorksheet::new().calculate(&scenario);
//!
//! assert_eq!(result.down_payment_amount, dec!(50000));
//! assert_eq!(result.total_cash_invested, dec!(55000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::monthly_payment;
use crate::models::InvestmentScenario;
use crate::normalize::normalize;

/// Monthly-equivalent projections backing the asset performance sub-view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetTestResult {
    pub monthly_taxes: Decimal,
    pub monthly_insurance: Decimal,
    pub prop_mgmt_fee: Decimal,
    /// Gross rent only; other income enters at the ROI level.
    pub total_income: Decimal,
    /// Repairs + taxes + insurance + management + HOA, per month.
    pub total_expenses: Decimal,
    pub noi: Decimal,
    /// Annualized, percent of purchase price; zero when the price is zero.
    pub cap_rate: Decimal,
}

/// Fully derived output of the ROI worksheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiResult {
    pub down_payment_amount: Decimal,
    pub loan_amount: Decimal,
    pub closing_costs: Decimal,
    pub total_cash_invested: Decimal,
    pub mortgage_payment: Decimal,
    pub gross_monthly_income: Decimal,
    pub vacancy_loss: Decimal,
    pub effective_income: Decimal,
    pub capex_reserve: Decimal,
    /// Asset-test expenses + CapEx reserve + utilities. Vacancy is not here.
    pub operating_expenses: Decimal,
    pub noi_monthly: Decimal,
    pub noi_annual: Decimal,
    pub cash_flow_monthly: Decimal,
    pub cash_flow_annual: Decimal,
    /// Percent; zero when total cash invested is zero.
    pub cash_on_cash_return: Decimal,
    /// Percent; zero when the purchase price is zero.
    pub cap_rate: Decimal,
}

/// Calculator for the investment ROI worksheet and its asset-test sub-view.
#[derive(Debug, Clone, Default)]
pub struct InvestmentWorksheet;

impl InvestmentWorksheet {
    pub fn new() -> Self {
        Self
    }

    /// Monthly-equivalent asset projections. Edits to the sub-view write back
    /// through the scenario (see the `apply_asset_*` operations), so the next
    /// call here reflects them — there is no second copy of this state.
    pub fn asset_test(
        &self,
        scenario: &InvestmentScenario,
    ) -> AssetTestResult {
        let purchase_price = normalize(&scenario.purchase_price);
        let gross_rent = normalize(&scenario.monthly_rent);

        let monthly_taxes =
            scenario.property_tax.effective(purchase_price) / Decimal::from(12);
        let monthly_insurance = normalize(&scenario.insurance) / Decimal::from(12);
        let prop_mgmt_fee =
            gross_rent * normalize(&scenario.prop_mgmt) / Decimal::ONE_HUNDRED;

        let total_expenses = normalize(&scenario.repairs_maintenance)
            + monthly_taxes
            + monthly_insurance
            + prop_mgmt_fee
            + normalize(&scenario.hoa);
        let noi = gross_rent - total_expenses;

        AssetTestResult {
            monthly_taxes,
            monthly_insurance,
            prop_mgmt_fee,
            total_income: gross_rent,
            total_expenses,
            noi,
            cap_rate: self.annualized_rate(noi * Decimal::from(12), purchase_price),
        }
    }

    /// Runs the full ROI derivation. Total for the same reasons as the
    /// down-payment worksheet: zero-denominator ratios report zero.
    pub fn calculate(
        &self,
        scenario: &InvestmentScenario,
    ) -> RoiResult {
        let purchase_price = normalize(&scenario.purchase_price);
        let asset = self.asset_test(scenario);

        let down_payment_amount =
            purchase_price * normalize(&scenario.down_payment_percent) / Decimal::ONE_HUNDRED;
        let loan_amount = purchase_price - down_payment_amount;
        let closing_costs = scenario.closing_costs.effective(purchase_price);
        let total_cash_invested =
            down_payment_amount + closing_costs + normalize(&scenario.rehab);

        let mortgage_payment = monthly_payment(
            loan_amount,
            normalize(&scenario.interest_rate),
            scenario.loan_term,
        );

        let gross_monthly_income =
            normalize(&scenario.monthly_rent) + normalize(&scenario.other_income);
        let vacancy_loss =
            gross_monthly_income * normalize(&scenario.vacancy_rate) / Decimal::ONE_HUNDRED;
        let effective_income = gross_monthly_income - vacancy_loss;

        let capex_reserve =
            gross_monthly_income * normalize(&scenario.capex) / Decimal::ONE_HUNDRED;
        let operating_expenses =
            asset.total_expenses + capex_reserve + normalize(&scenario.utilities);

        let noi_monthly = effective_income - operating_expenses;
        let noi_annual = noi_monthly * Decimal::from(12);
        let cash_flow_monthly = noi_monthly - mortgage_payment;
        let cash_flow_annual = cash_flow_monthly * Decimal::from(12);

        RoiResult {
            down_payment_amount,
            loan_amount,
            closing_costs,
            total_cash_invested,
            mortgage_payment,
            gross_monthly_income,
            vacancy_loss,
            effective_income,
            capex_reserve,
            operating_expenses,
            noi_monthly,
            noi_annual,
            cash_flow_monthly,
            cash_flow_annual,
            cash_on_cash_return: self.annualized_rate(cash_flow_annual, total_cash_invested),
            cap_rate: self.annualized_rate(noi_annual, purchase_price),
        }
    }

    /// `numerator / denominator * 100`, or zero when the denominator is zero
    /// or negative. Shared by cap rate and cash-on-cash return.
    fn annualized_rate(
        &self,
        numerator: Decimal,
        denominator: Decimal,
    ) -> Decimal {
        if denominator > Decimal::ZERO {
            numerator / denominator * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    }
}
