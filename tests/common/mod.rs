#![allow(dead_code)]

use std::time::Duration;

use serde_json::json;

use roamly_api::services::chat_service::ChatService;
use roamly_api::services::gemini_service::{GeminiConfig, GeminiService};
use roamly_api::services::image_service::{ImageConfig, ImageService};
use roamly_api::services::place_service::PlaceService;
use roamly_api::services::video_service::{VideoConfig, VideoService, VideoStore};
use roamly_api::state::AppState;

pub const TEXT_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";
pub const IMAGE_PATH: &str = "/v1beta/models/imagen-3.0-generate-002:predict";
pub const VIDEO_SUBMIT_PATH: &str = "/v1beta/models/veo-2.0-generate-001:predictLongRunning";

pub fn gemini_service(base_url: &str) -> GeminiService {
    GeminiService::with_config(
        "test-key".to_string(),
        GeminiConfig {
            base_url: base_url.to_string(),
            model: "gemini-2.5-flash".to_string(),
        },
    )
}

pub fn image_service(base_url: &str) -> ImageService {
    ImageService::with_config(
        "test-key".to_string(),
        ImageConfig {
            base_url: base_url.to_string(),
            model: "imagen-3.0-generate-002".to_string(),
        },
    )
}

pub fn video_service(base_url: &str) -> VideoService {
    VideoService::with_config(
        "test-key".to_string(),
        VideoConfig {
            base_url: base_url.to_string(),
            model: "veo-2.0-generate-001".to_string(),
            poll_interval: Duration::from_millis(5),
            max_polls: 3,
        },
    )
}

pub fn app_state(base_url: &str) -> AppState {
    let gemini = gemini_service(base_url);
    let images = image_service(base_url);
    let videos = video_service(base_url);
    let places = PlaceService::new(gemini.clone(), images.clone());
    let chat = ChatService::new(gemini.clone());

    AppState {
        gemini,
        images,
        videos,
        places,
        chat,
        video_store: VideoStore::new(),
    }
}

/// Wrap a structured payload the way the text endpoint returns it: as the
/// text part of the first candidate.
pub fn text_envelope(payload: &str) -> String {
    json!({
        "candidates": [
            { "content": { "role": "model", "parts": [{ "text": payload }] } }
        ]
    })
    .to_string()
}

/// One successful image prediction with a small valid base64 payload.
pub fn image_payload() -> String {
    json!({
        "predictions": [
            { "bytesBase64Encoded": "aGVsbG8gd29ybGQ=", "mimeType": "image/jpeg" }
        ]
    })
    .to_string()
}

/// A schema-conformant plan with the given day numbers and activities per
/// day. Day numbers are taken verbatim so tests can produce gaps.
pub fn sample_plan_json(day_numbers: &[u32], activities_per_day: usize) -> serde_json::Value {
    let daily_plan: Vec<serde_json::Value> = day_numbers
        .iter()
        .map(|day| {
            let activities: Vec<serde_json::Value> = (0..activities_per_day)
                .map(|i| {
                    json!({
                        "time": format!("{}:00 AM", 9 + i),
                        "description": format!("Activity {} of day {}", i + 1, day),
                        "details": "Arrive early to beat the crowds.",
                        "imagePrompt": format!("photo spot {} day {}", i + 1, day),
                    })
                })
                .collect();

            json!({
                "day": day,
                "title": format!("Day {} Highlights", day),
                "activities": activities,
            })
        })
        .collect();

    json!({
        "title": "A Wonderful Trip",
        "destination": "Kyoto, Japan",
        "duration": format!("{} days", day_numbers.len()),
        "summary": "Temples, gardens, and remarkable food.",
        "heroImagePrompt": "kyoto skyline at dusk",
        "dailyPlan": daily_plan,
        "safetyTips": ["Stay hydrated in summer"],
        "culturalEtiquette": ["Remove shoes indoors"],
        "emergencyContacts": ["Police: 110"],
        "weatherNotes": "Mild and humid this season.",
        "musicSuggestion": {
            "theme": "Calm koto melodies",
            "searchQuery": "japanese koto instrumental playlist"
        }
    })
}
