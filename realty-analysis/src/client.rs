use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::AnalysisConfig;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const SYSTEM_INSTRUCTION: &str = "You are a helpful financial assistant specializing in Dallas \
    real estate. Analyze the provided data and give clear, concise, and actionable insights for \
    a homebuyer or investor. Use markdown for formatting, such as bolding key terms and using \
    bullet points for lists.";

const MISSING_KEY_MESSAGE: &str =
    "No API key configured. Set api_key in the analysis config to use narrative analysis.";

/// Errors from the narrative-analysis request path.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("analysis response contained no text")]
    EmptyResponse,
}

// Request/response shapes for the generateContent REST call. Only the fields
// we read are modeled; unknown fields are ignored on deserialize.

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Blocking client for Gemini narrative analysis.
///
/// The credential comes in through [`AnalysisConfig`] at construction. The
/// public surface is total: [`AnalysisClient::analyze`] always returns a
/// displayable string — generated commentary, the missing-key fallback, or an
/// error description — and never panics or propagates.
pub struct AnalysisClient {
    client: Client,
    config: AnalysisConfig,
}

impl AnalysisClient {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Requests commentary for an already-rendered prompt, degrading every
    /// failure to a user-visible message.
    pub fn analyze(
        &self,
        prompt: &str,
    ) -> String {
        match self.request(prompt) {
            Ok(text) => text,
            Err(AnalysisError::MissingApiKey) => MISSING_KEY_MESSAGE.to_string(),
            Err(e) => {
                warn!("analysis request failed: {e}");
                format!("An error occurred while fetching analysis: {e}")
            }
        }
    }

    /// The underlying request.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError`] when no key is configured, the HTTP exchange
    /// fails, or the response carries no candidate text.
    pub fn request(
        &self,
        prompt: &str,
    ) -> Result<String, AnalysisError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AnalysisError::MissingApiKey)?;

        let url = format!("{BASE_URL}/{}:generateContent", self.config.model);
        let body = GenerateContentRequest {
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        debug!(model = %self.config.model, "requesting narrative analysis");
        let response: GenerateContentResponse = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or(AnalysisError::EmptyResponse)
    }
}
