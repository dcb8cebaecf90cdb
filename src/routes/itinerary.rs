use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::itinerary::ItineraryRequest;
use crate::services::enrichment_service;
use crate::state::AppState;

/// Single generic failure message; no partial plan is ever shown.
const GENERATION_FAILURE_MESSAGE: &str =
    "Failed to generate itinerary. Please check your inputs or API key and try again.";

/*
    /api/itineraries/generate
*/
pub async fn generate(
    data: web::Data<AppState>,
    body: web::Json<ItineraryRequest>,
) -> impl Responder {
    let request = body.into_inner();

    if request.destination.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": "destination must not be empty" }));
    }

    println!("Generating itinerary for '{}'", request.destination);

    // Enrichment cannot start before the plan exists: the activity prompts
    // and the hero prompt come out of this call.
    let plan = match data.gemini.generate_plan(&request).await {
        Ok(plan) => plan,
        Err(err) => {
            eprintln!("Itinerary generation failed: {}", err);
            return HttpResponse::BadGateway().json(json!({ "error": GENERATION_FAILURE_MESSAGE }));
        }
    };

    println!(
        "Plan ready: {} days, {} activities. Generating visuals...",
        plan.daily_plan.len(),
        plan.activity_count()
    );

    let itinerary =
        enrichment_service::enrich_itinerary(&data.images, &data.videos, &data.video_store, plan)
            .await;

    HttpResponse::Ok().json(itinerary)
}
