use actix_web::{web, HttpResponse, Responder};

use crate::models::chat::{ChatReply, ChatRequest};
use crate::state::AppState;

/*
    /api/chat
*/
pub async fn send(data: web::Data<AppState>, body: web::Json<ChatRequest>) -> impl Responder {
    let request = body.into_inner();

    let reply = data
        .chat
        .send(
            request.destination.as_deref(),
            &request.history,
            &request.message,
        )
        .await;

    HttpResponse::Ok().json(ChatReply { reply })
}
