pub mod chat_service;
pub mod enrichment_service;
pub mod gemini_service;
pub mod image_service;
pub mod place_service;
pub mod prompt_service;
pub mod response_schema;
pub mod video_service;
