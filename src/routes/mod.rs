use actix_web::web;

pub mod chat;
pub mod health;
pub mod itinerary;
pub mod places;
pub mod video;

/// Route table, shared between `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/itineraries")
                        .route("/generate", web::post().to(itinerary::generate)),
                )
                .service(web::scope("/places").route("/suggest", web::get().to(places::suggest)))
                .service(web::scope("/chat").route("", web::post().to(chat::send)))
                .service(
                    web::scope("/videos")
                        .route("/ambient", web::get().to(video::ambient))
                        .route("/{id}", web::get().to(video::get_by_id)),
                ),
        );
}
