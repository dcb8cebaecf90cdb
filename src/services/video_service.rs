use rand::seq::SliceRandom;
use reqwest::Client;
use serde::Deserialize;
use std::collections::VecDeque;
use std::env;
use std::fmt;
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

use crate::services::gemini_service::DEFAULT_API_BASE;

const DEFAULT_VIDEO_MODEL: &str = "veo-2.0-generate-001";
const POLL_INTERVAL_SECS: u64 = 10;
const MAX_POLLS: u32 = 30;

// How many downloaded videos the store keeps before releasing the oldest.
const STORE_CAPACITY: usize = 4;

/// Stock establishing video served when generation resolves absent.
pub const FALLBACK_VIDEO_URL: &str =
    "https://videos.pexels.com/video-files/3254012/3254012-hd_1920_1080_25fps.mp4";

const SHOWCASE_DESTINATIONS: &[&str] = &[
    "the Amalfi Coast, Italy",
    "Kyoto, Japan",
    "the fjords of Norway",
    "Santorini, Greece",
    "the Scottish Highlands",
    "Bali, Indonesia",
];

const PROGRESS_LABELS: &[&str] = &[
    "Scouting the best angles...",
    "Rolling cameras on location...",
    "Capturing golden-hour light...",
    "Editing the final cut...",
];

#[derive(Debug, Clone)]
pub struct VideoConfig {
    pub base_url: String,
    pub model: String,
    pub poll_interval: Duration,
    pub max_polls: u32,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            base_url: env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            model: env::var("GEMINI_VIDEO_MODEL")
                .unwrap_or_else(|_| DEFAULT_VIDEO_MODEL.to_string()),
            poll_interval: Duration::from_secs(POLL_INTERVAL_SECS),
            max_polls: MAX_POLLS,
        }
    }
}

#[derive(Debug)]
pub enum VideoError {
    HttpError(reqwest::Error),
    ApiError(String),
    Timeout,
    MissingUri,
    DownloadError(String),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::HttpError(err) => write!(f, "HTTP error: {}", err),
            VideoError::ApiError(msg) => write!(f, "API error: {}", msg),
            VideoError::Timeout => write!(f, "video job did not finish in time"),
            VideoError::MissingUri => write!(f, "finished job carries no video URI"),
            VideoError::DownloadError(msg) => write!(f, "Download error: {}", msg),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<reqwest::Error> for VideoError {
    fn from(err: reqwest::Error) -> Self {
        VideoError::HttpError(err)
    }
}

#[derive(Debug, Deserialize)]
struct OperationHandle {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Operation {
    #[serde(default)]
    done: bool,
    error: Option<serde_json::Value>,
    response: Option<OperationResponse>,
}

#[derive(Debug, Deserialize)]
struct OperationResponse {
    #[serde(rename = "generateVideoResponse")]
    generate_video_response: Option<GenerateVideoResponse>,
}

#[derive(Debug, Deserialize)]
struct GenerateVideoResponse {
    #[serde(rename = "generatedSamples", default)]
    generated_samples: Vec<GeneratedSample>,
}

#[derive(Debug, Deserialize)]
struct GeneratedSample {
    video: Option<VideoRef>,
}

#[derive(Debug, Deserialize)]
struct VideoRef {
    uri: Option<String>,
}

#[derive(Clone)]
pub struct VideoService {
    client: Client,
    api_key: String,
    config: VideoConfig,
}

impl VideoService {
    pub fn new(api_key: String) -> Self {
        Self::with_config(api_key, VideoConfig::default())
    }

    pub fn with_config(api_key: String, config: VideoConfig) -> Self {
        Self {
            client: Client::new(),
            api_key,
            config,
        }
    }

    /// Produce a short establishing video for the destination. Submits a
    /// long-running job, polls it at a fixed interval (reporting a
    /// human-readable label on every tick), then downloads the result.
    /// Every failure path resolves to `None` -- callers never handle an
    /// error from this method.
    pub async fn generate_for_destination<F>(
        &self,
        destination: &str,
        on_progress: F,
    ) -> Option<Vec<u8>>
    where
        F: Fn(&str),
    {
        let prompt = format!(
            "A cinematic, sweeping establishing shot of {}, beautiful natural light, \
travel documentary style",
            destination
        );

        match self.run_generation(&prompt, &on_progress).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                eprintln!("Video generation for '{}' failed: {}", destination, e);
                None
            }
        }
    }

    /// Ambient landing-page video for a randomly chosen showcase
    /// destination.
    pub async fn generate_random_travel<F>(&self, on_progress: F) -> Option<Vec<u8>>
    where
        F: Fn(&str),
    {
        let destination = SHOWCASE_DESTINATIONS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or("a breathtaking travel destination");

        self.generate_for_destination(destination, on_progress).await
    }

    async fn run_generation<F>(&self, prompt: &str, on_progress: &F) -> Result<Vec<u8>, VideoError>
    where
        F: Fn(&str),
    {
        on_progress("Warming up the cameras...");
        let handle = self.submit(prompt).await?;

        let uri = self.poll_until_done(&handle, on_progress).await?;

        on_progress("Downloading your cinematic preview...");
        self.download(&uri).await
    }

    async fn submit(&self, prompt: &str) -> Result<OperationHandle, VideoError> {
        let url = format!(
            "{}/v1beta/models/{}:predictLongRunning",
            self.config.base_url, self.config.model
        );

        let body = serde_json::json!({
            "instances": [{ "prompt": prompt }],
            "parameters": { "sampleCount": 1 }
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VideoError::ApiError(format!(
                "video submission failed with status {}: {}",
                status, error_text
            )));
        }

        response
            .json::<OperationHandle>()
            .await
            .map_err(|e| VideoError::ApiError(format!("failed to decode job handle: {}", e)))
    }

    async fn poll_until_done<F>(
        &self,
        handle: &OperationHandle,
        on_progress: &F,
    ) -> Result<String, VideoError>
    where
        F: Fn(&str),
    {
        let url = format!("{}/v1beta/{}", self.config.base_url, handle.name);

        for tick in 0..self.config.max_polls {
            tokio::time::sleep(self.config.poll_interval).await;
            on_progress(PROGRESS_LABELS[tick as usize % PROGRESS_LABELS.len()]);

            let response = self
                .client
                .get(&url)
                .header("x-goog-api-key", &self.api_key)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(VideoError::ApiError(format!(
                    "polling failed with status {}: {}",
                    status, error_text
                )));
            }

            let operation: Operation = response
                .json()
                .await
                .map_err(|e| VideoError::ApiError(format!("failed to decode operation: {}", e)))?;

            if let Some(error) = operation.error {
                return Err(VideoError::ApiError(format!("video job failed: {}", error)));
            }

            if operation.done {
                return operation
                    .response
                    .and_then(|r| r.generate_video_response)
                    .and_then(|r| r.generated_samples.into_iter().next())
                    .and_then(|sample| sample.video)
                    .and_then(|video| video.uri)
                    .ok_or(VideoError::MissingUri);
            }
        }

        Err(VideoError::Timeout)
    }

    async fn download(&self, uri: &str) -> Result<Vec<u8>, VideoError> {
        // The result URI requires the API key appended to fetch the binary.
        let separator = if uri.contains('?') { '&' } else { '?' };
        let url = format!("{}{}key={}", uri, separator, self.api_key);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(VideoError::DownloadError(format!(
                "download failed with status {}",
                status
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| VideoError::DownloadError(format!("failed to read payload: {}", e)))?;

        Ok(bytes.to_vec())
    }
}

/// Server-owned store for downloaded video bytes. Bounded: inserting past
/// capacity releases the oldest entry, so repeated generations cannot grow
/// memory without bound. Entries are addressed by id via the video route
/// until evicted.
pub struct VideoStore {
    entries: Mutex<VecDeque<(Uuid, Vec<u8>)>>,
    capacity: usize,
}

impl VideoStore {
    pub fn new() -> Self {
        Self::with_capacity(STORE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn insert(&self, bytes: Vec<u8>) -> Uuid {
        let id = Uuid::new_v4();
        let mut entries = self.entries.lock().expect("video store lock poisoned");
        entries.push_back((id, bytes));
        while entries.len() > self.capacity {
            // Dropping the entry releases its bytes.
            entries.pop_front();
        }
        id
    }

    pub fn get(&self, id: Uuid) -> Option<Vec<u8>> {
        let entries = self.entries.lock().expect("video store lock poisoned");
        entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, bytes)| bytes.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("video store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for VideoStore {
    fn default() -> Self {
        Self::new()
    }
}
