mod down_payment;
mod investment;
mod loan;
mod mode_value;

pub use down_payment::DownPaymentScenario;
pub use investment::InvestmentScenario;
pub use loan::{LoanTerm, LoanType, ParseLoanTermError, ParseLoanTypeError};
pub use mode_value::{InputMode, ModeValue};
