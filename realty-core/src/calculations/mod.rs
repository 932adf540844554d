//! Calculation engines for the two estimators.
//!
//! Both engines are total functions over a scenario snapshot: normalization
//! never fails, every division is guarded, and there is no caching — callers
//! recompute on every input change.

pub mod common;
pub mod worksheets;

pub use worksheets::down_payment::{DownPaymentResult, DownPaymentWorksheet};
pub use worksheets::investment::{AssetTestResult, InvestmentWorksheet, RoiResult};
