use futures::future::join_all;

use crate::models::suggestion::PlaceSuggestion;
use crate::services::gemini_service::GeminiService;
use crate::services::image_service::ImageService;

/// Queries shorter than this never reach the network.
pub const MIN_QUERY_LEN: usize = 3;

const MAX_SUGGESTIONS: usize = 5;
const THUMBNAIL_ASPECT: &str = "1:1";
const THUMBNAIL_MIME: &str = "image/png";

/// Visibly-gray stand-in used when a thumbnail fails to generate; the
/// suggestion itself is kept.
pub const PLACEHOLDER_THUMBNAIL: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 64 64'%3E%3Crect width='64' height='64' fill='%23cbd5e1'/%3E%3C/svg%3E";

#[derive(Clone)]
pub struct PlaceService {
    gemini: GeminiService,
    images: ImageService,
}

impl PlaceService {
    pub fn new(gemini: GeminiService, images: ImageService) -> Self {
        Self { gemini, images }
    }

    /// Free-text query to a decorated suggestion list. Degrades, never
    /// errors: a failed text call yields an empty list, a failed thumbnail
    /// yields the placeholder. Callers are expected to debounce input;
    /// this method assumes it is not hit on every keystroke.
    pub async fn suggest(&self, query: &str) -> Vec<PlaceSuggestion> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let raw = match self.gemini.generate_suggestions(query).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                eprintln!("Place suggestion lookup for '{}' failed: {}", query, e);
                return Vec::new();
            }
        };

        let thumbnail_futures: Vec<_> = raw
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|suggestion| async move {
                let image_url = match self
                    .images
                    .generate_image(&suggestion.image_prompt, THUMBNAIL_ASPECT, THUMBNAIL_MIME)
                    .await
                {
                    Ok(uri) => uri,
                    Err(e) => {
                        eprintln!(
                            "Failed to generate thumbnail for '{}': {}",
                            suggestion.name, e
                        );
                        PLACEHOLDER_THUMBNAIL.to_string()
                    }
                };

                PlaceSuggestion {
                    name: suggestion.name,
                    image_url,
                }
            })
            .collect();

        join_all(thumbnail_futures).await
    }
}
