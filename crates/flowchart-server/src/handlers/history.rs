use actix_web::{web, HttpResponse, Responder};
use flowchart_core::Exchange;
use serde::Serialize;

use super::session_key;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub session_id: String,
    pub exchanges: Vec<Exchange>,
}

pub async fn get_history(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let raw = path.into_inner();
    let (session_id, exchanges) = match session_key(&raw) {
        Some(id) => (id.to_string(), state.sessions().history(id).await),
        None => (String::new(), Vec::new()),
    };

    HttpResponse::Ok().json(HistoryResponse {
        session_id,
        exchanges,
    })
}

pub async fn clear_history(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let raw = path.into_inner();
    let cleared = match session_key(&raw) {
        Some(id) => state.sessions().clear(id).await,
        None => false,
    };

    if cleared {
        log::info!("[{}] Session history cleared", raw.trim());
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Session not found: {}", raw.trim())
        }))
    }
}
