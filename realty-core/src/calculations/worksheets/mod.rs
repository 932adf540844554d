//! Worksheet implementations for the two calculators.

pub mod down_payment;
pub mod investment;

pub use down_payment::{DownPaymentResult, DownPaymentWorksheet};
pub use investment::{AssetTestResult, InvestmentWorksheet, RoiResult};
