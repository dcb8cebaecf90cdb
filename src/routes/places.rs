use actix_web::{web, HttpResponse, Responder};

use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    query: Option<String>,
}

/*
    /api/places/suggest?query=...
*/
pub async fn suggest(data: web::Data<AppState>, params: web::Query<QueryParams>) -> impl Responder {
    let query = params.query.clone().unwrap_or_default();

    // Always 200: the suggestion pipeline degrades to an empty list or
    // placeholder thumbnails, never an error the client must handle.
    let suggestions = data.places.suggest(&query).await;
    HttpResponse::Ok().json(suggestions)
}
