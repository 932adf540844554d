use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{LoanTerm, ModeValue};
use crate::normalize::normalize;

/// Input state for the investment ROI calculator.
///
/// As with [`crate::DownPaymentScenario`], numeric fields are raw strings.
/// Note the unit difference: `insurance` here is an ANNUAL amount, while the
/// down-payment scenario's insurance is monthly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentScenario {
    pub purchase_price: String,
    /// Optional label used in summaries; carries no numeric meaning.
    pub property_address: String,
    pub down_payment_percent: String,
    pub interest_rate: String,
    pub loan_term: LoanTerm,
    pub closing_costs: ModeValue,
    pub rehab: String,
    pub monthly_rent: String,
    pub other_income: String,
    pub vacancy_rate: String,
    /// Property management, percent of gross rent.
    pub prop_mgmt: String,
    /// Monthly repairs and maintenance, dollars.
    pub repairs_maintenance: String,
    /// Capital-expenditure reserve, percent of gross income.
    pub capex: String,
    /// Dollar mode holds an ANNUAL tax amount; percent mode is a share of the
    /// purchase price.
    pub property_tax: ModeValue,
    /// Annual insurance premium, dollars.
    pub insurance: String,
    /// Monthly HOA dues, dollars.
    pub hoa: String,
    /// Monthly utilities, dollars.
    pub utilities: String,
}

impl InvestmentScenario {
    /// Restores the all-empty defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies an edit of the asset-test monthly tax projection.
    ///
    /// The monthly figure becomes an annual amount in the primary tax field,
    /// and the tax mode is forced to dollar so the write is unambiguous.
    pub fn apply_asset_monthly_tax(
        &mut self,
        raw_monthly: &str,
    ) {
        let annual = normalize(raw_monthly) * Decimal::from(12);
        self.property_tax = ModeValue::dollar(annual.to_string());
    }

    /// Applies an edit of the asset-test monthly insurance projection,
    /// converting it back to the annual primary field.
    pub fn apply_asset_monthly_insurance(
        &mut self,
        raw_monthly: &str,
    ) {
        let annual = normalize(raw_monthly) * Decimal::from(12);
        self.insurance = annual.to_string();
    }

    /// Applies an edit of the asset-test monthly property-management fee,
    /// converting it to an equivalent percentage of current gross rent.
    /// Zero rent yields 0% rather than a division error.
    pub fn apply_asset_monthly_prop_mgmt(
        &mut self,
        raw_monthly: &str,
    ) {
        let fee = normalize(raw_monthly);
        let rent = normalize(&self.monthly_rent);
        let percent = if rent > Decimal::ZERO {
            fee / rent * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
        self.prop_mgmt = percent.to_string();
    }
}
