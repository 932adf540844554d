pub mod calculations;
pub mod format;
pub mod models;
pub mod normalize;
pub mod summary;
pub mod validation;

pub use models::*;
pub use normalize::normalize;
pub use validation::{FieldErrors, validate_down_payment, validate_investment};
