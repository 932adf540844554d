use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// How a paired value is interpreted: as a percentage of some base amount,
/// or as a flat dollar amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    #[default]
    Percent,
    Dollar,
}

/// A mode-qualified value: raw user input plus the [`InputMode`] that decides
/// how it relates to a base amount.
///
/// The value is stored as typed. Reading it goes through [`normalize`], so a
/// malformed string behaves as zero everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeValue {
    pub mode: InputMode,
    pub value: String,
}

impl ModeValue {
    pub fn percent(value: impl Into<String>) -> Self {
        Self {
            mode: InputMode::Percent,
            value: value.into(),
        }
    }

    pub fn dollar(value: impl Into<String>) -> Self {
        Self {
            mode: InputMode::Dollar,
            value: value.into(),
        }
    }

    pub fn is_percent(&self) -> bool {
        self.mode == InputMode::Percent
    }

    /// The normalized numeric value, ignoring the mode.
    pub fn amount(&self) -> Decimal {
        normalize(&self.value)
    }

    /// The effective dollar amount against `base`.
    ///
    /// Percent mode yields `base * value / 100`; dollar mode yields the value
    /// itself. Out-of-range percentages are tolerated arithmetically — the
    /// 100% ceiling is a validation concern, not a calculation one.
    pub fn effective(&self, base: Decimal) -> Decimal {
        match self.mode {
            InputMode::Percent => base * self.amount() / Decimal::ONE_HUNDRED,
            InputMode::Dollar => self.amount(),
        }
    }
}
