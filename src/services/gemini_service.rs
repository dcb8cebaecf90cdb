use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::error::Error;
use std::fmt;

use crate::models::itinerary::{ItineraryPlan, ItineraryRequest};
use crate::services::prompt_service;
use crate::services::response_schema;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

// Fixed sampling temperature for structured generation.
const PLAN_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            model: env::var("GEMINI_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string()),
        }
    }
}

#[derive(Debug)]
pub enum GenerationError {
    HttpError(reqwest::Error),
    ApiError(String),
    EmptyResponse,
    ParseError(String),
    InvalidPlan(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::HttpError(err) => write!(f, "HTTP error: {}", err),
            GenerationError::ApiError(msg) => write!(f, "API error: {}", msg),
            GenerationError::EmptyResponse => write!(f, "model returned no candidates"),
            GenerationError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GenerationError::InvalidPlan(msg) => write!(f, "Invalid plan: {}", msg),
        }
    }
}

impl Error for GenerationError {}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::HttpError(err)
    }
}

// generateContent wire types, shared with the chat service.

#[derive(Debug, Serialize, Deserialize, Clone)]
pub(crate) struct Part {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub(crate) struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "responseSchema")]
    pub response_schema: Value,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<Content>,
}

/// A candidate destination as decoded from the suggestion contract, before
/// its thumbnail has been generated.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawSuggestion {
    pub name: String,
    pub image_prompt: String,
}

#[derive(Debug, Deserialize)]
struct SuggestionResponse {
    suggestions: Vec<RawSuggestion>,
}

#[derive(Clone)]
pub struct GeminiService {
    client: Client,
    api_key: String,
    config: GeminiConfig,
}

impl GeminiService {
    pub fn new(api_key: String) -> Self {
        Self::with_config(api_key, GeminiConfig::default())
    }

    pub fn with_config(api_key: String, config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            api_key,
            config,
        }
    }

    /// Build the prompt, submit it with the itinerary schema, and decode the
    /// response into a validated plan. Fails whole: either a fully-shaped
    /// `ItineraryPlan` comes back or a `GenerationError` does. Performs no
    /// image work.
    pub async fn generate_plan(
        &self,
        request: &ItineraryRequest,
    ) -> Result<ItineraryPlan, GenerationError> {
        let prompt = prompt_service::build_itinerary_prompt(request);
        let text = self
            .generate_structured(&prompt, response_schema::itinerary_schema())
            .await?;

        let plan: ItineraryPlan = serde_json::from_str(text.trim()).map_err(|e| {
            GenerationError::ParseError(format!(
                "response does not match the itinerary contract: {}",
                e
            ))
        })?;

        plan.validate().map_err(GenerationError::InvalidPlan)?;
        Ok(plan)
    }

    /// Text call behind place suggestions. Returns the raw decoded list;
    /// thumbnail generation and the empty-on-failure policy live in the
    /// place service.
    pub async fn generate_suggestions(
        &self,
        query: &str,
    ) -> Result<Vec<RawSuggestion>, GenerationError> {
        let prompt = prompt_service::build_suggestion_prompt(query);
        let text = self
            .generate_structured(&prompt, response_schema::suggestion_schema())
            .await?;

        let decoded: SuggestionResponse = serde_json::from_str(text.trim()).map_err(|e| {
            GenerationError::ParseError(format!(
                "response does not match the suggestion contract: {}",
                e
            ))
        })?;

        Ok(decoded.suggestions)
    }

    pub(crate) async fn generate_structured(
        &self,
        prompt: &str,
        schema: Value,
    ) -> Result<String, GenerationError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
                temperature: PLAN_TEMPERATURE,
            }),
        };

        self.execute(request).await
    }

    /// Free-form generation with a system instruction and prior turns, used
    /// by the destination-guide chat.
    pub(crate) async fn generate_text(
        &self,
        system_instruction: String,
        contents: Vec<Content>,
    ) -> Result<String, GenerationError> {
        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction,
                }],
            }),
            generation_config: None,
        };

        self.execute(request).await
    }

    async fn execute(&self, request: GenerateContentRequest) -> Result<String, GenerationError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenerationError::ApiError(format!(
                "text generation failed with status {}: {}",
                status, error_text
            )));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            GenerationError::ParseError(format!("failed to decode generateContent response: {}", e))
        })?;

        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or(GenerationError::EmptyResponse)
    }
}
