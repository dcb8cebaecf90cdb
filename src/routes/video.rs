use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;

use crate::services::video_service::FALLBACK_VIDEO_URL;
use crate::state::AppState;

/*
    /api/videos/ambient
*/
pub async fn ambient(data: web::Data<AppState>) -> impl Responder {
    let bytes = data
        .videos
        .generate_random_travel(|label| println!("Ambient video: {}", label))
        .await;

    match bytes {
        Some(bytes) => {
            let id = data.video_store.insert(bytes);
            HttpResponse::Ok().json(json!({ "videoUrl": format!("/api/videos/{}", id) }))
        }
        // Generation resolved absent; hand the client the stock clip.
        None => HttpResponse::Ok().json(json!({ "videoUrl": FALLBACK_VIDEO_URL })),
    }
}

/*
    /api/videos/{id}
*/
pub async fn get_by_id(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    let id: Uuid = match Uuid::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    match data.video_store.get(id) {
        Some(bytes) => HttpResponse::Ok().content_type("video/mp4").body(bytes),
        None => HttpResponse::NotFound().body("Video not found"),
    }
}
