use crate::services::chat_service::ChatService;
use crate::services::gemini_service::GeminiService;
use crate::services::image_service::ImageService;
use crate::services::place_service::PlaceService;
use crate::services::video_service::{VideoService, VideoStore};

/// Shared handles the route handlers need. Built once at startup and
/// registered as actix app data; the video store is the only shared mutable
/// state in the process.
pub struct AppState {
    pub gemini: GeminiService,
    pub images: ImageService,
    pub videos: VideoService,
    pub places: PlaceService,
    pub chat: ChatService,
    pub video_store: VideoStore,
}

impl AppState {
    pub fn new(api_key: String) -> Self {
        let gemini = GeminiService::new(api_key.clone());
        let images = ImageService::new(api_key.clone());
        let videos = VideoService::new(api_key);
        let places = PlaceService::new(gemini.clone(), images.clone());
        let chat = ChatService::new(gemini.clone());

        Self {
            gemini,
            images,
            videos,
            places,
            chat,
            video_store: VideoStore::new(),
        }
    }
}
