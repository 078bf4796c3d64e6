use actix_web::{HttpResponse, Responder};
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to the Flowchart Generator API!";

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

pub async fn handler() -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}
