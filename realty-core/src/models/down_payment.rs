use serde::{Deserialize, Serialize};

use super::{LoanTerm, LoanType, ModeValue};

/// Input state for the down-payment estimator.
///
/// Every numeric field holds the raw string as typed; reads go through
/// [`crate::normalize`]. The monthly sub-block (interest rate through HOA) is
/// only consulted when `estimate_monthly` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownPaymentScenario {
    pub home_price: String,
    pub down_payment: ModeValue,
    pub loan_type: LoanType,
    pub closing_costs: ModeValue,
    pub estimate_monthly: bool,
    pub interest_rate: String,
    pub loan_term: LoanTerm,
    /// Dollar mode holds an ANNUAL tax amount; percent mode is a share of the
    /// home price.
    pub property_tax: ModeValue,
    /// Monthly homeowners insurance, dollars.
    pub insurance: String,
    /// Monthly HOA dues, dollars.
    pub hoa: String,
}

impl DownPaymentScenario {
    /// Restores the all-empty defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Changes the loan type. Switching to FHA while the down-payment value
    /// is still empty seeds it to the FHA minimum of 3.5%.
    pub fn set_loan_type(
        &mut self,
        loan_type: LoanType,
    ) {
        if loan_type == LoanType::Fha && self.down_payment.value.is_empty() {
            self.down_payment = ModeValue::percent("3.5");
        }
        self.loan_type = loan_type;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::InputMode;

    #[test]
    fn default_scenario_is_empty() {
        let s = DownPaymentScenario::default();

        assert_eq!(s.home_price, "");
        assert_eq!(s.down_payment, ModeValue::default());
        assert_eq!(s.loan_type, LoanType::Conventional);
        assert_eq!(s.loan_term, LoanTerm::Thirty);
        assert!(!s.estimate_monthly);
    }

    #[test]
    fn switching_to_fha_seeds_empty_down_payment() {
        let mut s = DownPaymentScenario::default();

        s.set_loan_type(LoanType::Fha);

        assert_eq!(s.loan_type, LoanType::Fha);
        assert_eq!(s.down_payment.mode, InputMode::Percent);
        assert_eq!(s.down_payment.value, "3.5");
    }

    #[test]
    fn switching_to_fha_keeps_existing_down_payment() {
        let mut s = DownPaymentScenario {
            down_payment: ModeValue::percent("10"),
            ..Default::default()
        };

        s.set_loan_type(LoanType::Fha);

        assert_eq!(s.down_payment.value, "10");
    }

    #[test]
    fn switching_to_other_types_never_seeds() {
        let mut s = DownPaymentScenario::default();

        s.set_loan_type(LoanType::Va);

        assert_eq!(s.down_payment.value, "");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut s = DownPaymentScenario {
            home_price: "300000".to_string(),
            estimate_monthly: true,
            ..Default::default()
        };

        s.reset();

        assert_eq!(s, DownPaymentScenario::default());
    }
}
