use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

use crate::services::gemini_service::DEFAULT_API_BASE;

const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-002";

// Appended to every image prompt so generated photos share one look.
const STYLE_SUFFIX: &str = ", cinematic, professional photography, high resolution";

#[derive(Debug, Clone)]
pub struct ImageConfig {
    pub base_url: String,
    pub model: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            model: env::var("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
        }
    }
}

#[derive(Debug)]
pub enum ImageError {
    HttpError(reqwest::Error),
    ApiError(String),
    EmptyResponse,
    InvalidPayload(String),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::HttpError(err) => write!(f, "HTTP error: {}", err),
            ImageError::ApiError(msg) => write!(f, "API error: {}", msg),
            ImageError::EmptyResponse => write!(f, "image model returned no predictions"),
            ImageError::InvalidPayload(msg) => write!(f, "Invalid image payload: {}", msg),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<reqwest::Error> for ImageError {
    fn from(err: reqwest::Error) -> Self {
        ImageError::HttpError(err)
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<ImageInstance>,
    parameters: ImageParameters,
}

#[derive(Debug, Serialize)]
struct ImageInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
struct ImageParameters {
    #[serde(rename = "sampleCount")]
    sample_count: u32,
    #[serde(rename = "aspectRatio")]
    aspect_ratio: String,
    #[serde(rename = "outputMimeType")]
    output_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(rename = "bytesBase64Encoded")]
    bytes_base64_encoded: Option<String>,
}

#[derive(Clone)]
pub struct ImageService {
    client: Client,
    api_key: String,
    config: ImageConfig,
}

impl ImageService {
    pub fn new(api_key: String) -> Self {
        Self::with_config(api_key, ImageConfig::default())
    }

    pub fn with_config(api_key: String, config: ImageConfig) -> Self {
        Self {
            client: Client::new(),
            api_key,
            config,
        }
    }

    /// Generate one image for the prompt (with the fixed style suffix
    /// appended) and return it as a data URI with the requested MIME type.
    pub async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
        mime_type: &str,
    ) -> Result<String, ImageError> {
        let url = format!(
            "{}/v1beta/models/{}:predict",
            self.config.base_url, self.config.model
        );

        let request = PredictRequest {
            instances: vec![ImageInstance {
                prompt: format!("{}{}", prompt, STYLE_SUFFIX),
            }],
            parameters: ImageParameters {
                sample_count: 1,
                aspect_ratio: aspect_ratio.to_string(),
                output_mime_type: mime_type.to_string(),
            },
        };

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
            return Err(ImageError::ApiError(format!(
                "image generation failed with status {}: {}",
                status, error_text
            )));
        }

        let payload: PredictResponse = response
            .json()
            .await
            .map_err(|e| ImageError::InvalidPayload(format!("failed to decode response: {}", e)))?;

        let encoded = payload
            .predictions
            .into_iter()
            .next()
            .and_then(|prediction| prediction.bytes_base64_encoded)
            .ok_or(ImageError::EmptyResponse)?;

        // Decode once to reject payloads that are not valid base64 before
        // handing the reference to the client.
        general_purpose::STANDARD
            .decode(&encoded)
            .map_err(|e| ImageError::InvalidPayload(format!("base64 decode failed: {}", e)))?;

        Ok(data_uri(mime_type, &encoded))
    }
}

/// Renderable embedded-image reference, e.g. `data:image/jpeg;base64,...`.
pub fn data_uri(mime_type: &str, base64_payload: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64_payload)
}
