//! Narrative-analysis client for the realty estimators.
//!
//! Takes the pre-formatted snapshots produced by `realty_core::summary`,
//! renders them into scenario-specific prompts, and asks the Gemini
//! `generateContent` endpoint for advisory commentary. The whole surface is
//! a collaborator, not core: failures degrade to user-visible text, and the
//! engines never depend on anything returned here.

pub mod client;
pub mod config;
pub mod prompt;

pub use client::{AnalysisClient, AnalysisError};
pub use config::{AnalysisConfig, ConfigError};
pub use prompt::{down_payment_prompt, roi_prompt};
