use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Amortization term of the mortgage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanTerm {
    Fifteen,
    #[default]
    Thirty,
}

impl LoanTerm {
    pub fn years(&self) -> u32 {
        match self {
            Self::Fifteen => 15,
            Self::Thirty => 30,
        }
    }

    pub fn months(&self) -> u32 {
        self.years() * 12
    }
}

impl fmt::Display for LoanTerm {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.years())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid loan term '{0}': expected 15 or 30")]
pub struct ParseLoanTermError(String);

impl FromStr for LoanTerm {
    type Err = ParseLoanTermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "15" => Ok(Self::Fifteen),
            "30" => Ok(Self::Thirty),
            other => Err(ParseLoanTermError(other.to_string())),
        }
    }
}

/// Mortgage program. Affects advisory text and the FHA down-payment seeding
/// behavior on [`crate::DownPaymentScenario::set_loan_type`]; the math is the
/// same for every variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    #[default]
    Conventional,
    Fha,
    Va,
    Usda,
    Other,
}

impl LoanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conventional => "Conventional",
            Self::Fha => "FHA",
            Self::Va => "VA",
            Self::Usda => "USDA",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for LoanType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid loan type '{0}': expected Conventional, FHA, VA, USDA, or Other")]
pub struct ParseLoanTypeError(String);

impl FromStr for LoanType {
    type Err = ParseLoanTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conventional" => Ok(Self::Conventional),
            "fha" => Ok(Self::Fha),
            "va" => Ok(Self::Va),
            "usda" => Ok(Self::Usda),
            "other" => Ok(Self::Other),
            other => Err(ParseLoanTypeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn loan_term_years_and_months() {
        assert_eq!(LoanTerm::Fifteen.years(), 15);
        assert_eq!(LoanTerm::Thirty.months(), 360);
    }

    #[test]
    fn loan_term_parses_from_years() {
        assert_eq!("15".parse(), Ok(LoanTerm::Fifteen));
        assert_eq!("30".parse(), Ok(LoanTerm::Thirty));
        assert!("20".parse::<LoanTerm>().is_err());
    }

    #[test]
    fn loan_type_parses_case_insensitively() {
        assert_eq!("fha".parse(), Ok(LoanType::Fha));
        assert_eq!("Conventional".parse(), Ok(LoanType::Conventional));
        assert_eq!("USDA".parse(), Ok(LoanType::Usda));
        assert!("jumbo".parse::<LoanType>().is_err());
    }

    #[test]
    fn loan_type_round_trips_through_as_str() {
        for lt in [
            LoanType::Conventional,
            LoanType::Fha,
            LoanType::Va,
            LoanType::Usda,
            LoanType::Other,
        ] {
            assert_eq!(lt.as_str().parse(), Ok(lt));
        }
    }
}
