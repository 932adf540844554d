//! Shared helpers for the calculation engines: financial rounding and the
//! standard amortization payment.

use rust_decimal::{Decimal, MathematicalOps};

use crate::models::LoanTerm;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Standard financial convention: values at exactly 0.005 round away from
/// zero. Applied at display boundaries only — intermediate engine steps stay
/// at full precision.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Monthly principal-and-interest payment for a fully amortizing loan.
///
/// Uses `L * r(1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate and `n` the
/// payment count. Returns zero when the loan amount or the rate is zero or
/// negative — a non-positive loan has nothing to amortize, and a zero rate
/// would divide by zero. A rate absurd enough to overflow the power term also
/// reports zero rather than panicking.
pub fn monthly_payment(
    loan_amount: Decimal,
    annual_rate_percent: Decimal,
    term: LoanTerm,
) -> Decimal {
    let monthly_rate = annual_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(12);
    if loan_amount <= Decimal::ZERO || monthly_rate <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let Some(growth) = (Decimal::ONE + monthly_rate).checked_powi(term.months() as i64) else {
        return Decimal::ZERO;
    };
    loan_amount * (monthly_rate * growth) / (growth - Decimal::ONE)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(123.45)), dec!(123.45));
    }

    // =========================================================================
    // monthly_payment tests
    // =========================================================================

    #[test]
    fn monthly_payment_matches_standard_thirty_year_table() {
        // $100,000 at 12% over 30 years is the canonical $1,028.61.
        let payment = monthly_payment(dec!(100000), dec!(12), LoanTerm::Thirty);

        assert_eq!(round_half_up(payment), dec!(1028.61));
    }

    #[test]
    fn monthly_payment_matches_six_percent_thirty_year() {
        // $240,000 at 6% over 30 years: $1,438.92.
        let payment = monthly_payment(dec!(240000), dec!(6), LoanTerm::Thirty);

        assert_eq!(round_half_up(payment), dec!(1438.92));
    }

    #[test]
    fn monthly_payment_fifteen_year_term_is_larger() {
        let thirty = monthly_payment(dec!(240000), dec!(6), LoanTerm::Thirty);
        let fifteen = monthly_payment(dec!(240000), dec!(6), LoanTerm::Fifteen);

        assert!(fifteen > thirty);
        assert_eq!(round_half_up(fifteen), dec!(2025.26));
    }

    #[test]
    fn monthly_payment_zero_rate_is_zero() {
        assert_eq!(
            monthly_payment(dec!(240000), dec!(0), LoanTerm::Thirty),
            Decimal::ZERO
        );
    }

    #[test]
    fn monthly_payment_zero_loan_is_zero() {
        assert_eq!(
            monthly_payment(dec!(0), dec!(6), LoanTerm::Thirty),
            Decimal::ZERO
        );
    }

    #[test]
    fn monthly_payment_negative_loan_is_zero() {
        // Down payment exceeding the price leaves a negative loan; nothing to
        // amortize.
        assert_eq!(
            monthly_payment(dec!(-50000), dec!(6), LoanTerm::Thirty),
            Decimal::ZERO
        );
    }

    #[test]
    fn monthly_payment_negative_rate_is_zero() {
        assert_eq!(
            monthly_payment(dec!(240000), dec!(-3), LoanTerm::Thirty),
            Decimal::ZERO
        );
    }

    #[test]
    fn monthly_payment_extreme_rate_reports_zero_instead_of_panicking() {
        let payment = monthly_payment(dec!(240000), dec!(5000), LoanTerm::Thirty);

        assert!(payment >= Decimal::ZERO);
    }
}
