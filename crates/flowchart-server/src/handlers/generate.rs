use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::session_key;
use crate::error::Result;
use crate::logging::Timer;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub input: String,
    #[serde(default)]
    pub session_id: Option<String>,
    /// Sent by the web frontend; not used when building the prompt.
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MermaidResponse {
    pub mermaid_code: String,
}

pub async fn handler(
    state: web::Data<AppState>,
    req: web::Json<GenerateRequest>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    let session_id = req.session_id.as_deref().and_then(session_key);
    let scope = session_id.unwrap_or("one-shot");

    log::info!(
        "[{}] Generating flowchart with {} ({} chars of input)",
        scope,
        state.generator.model(),
        req.input.chars().count()
    );

    let timer = Timer::new("generate_flowchart");
    let mermaid_code = state
        .generator
        .generate(&req.input, session_id)
        .await
        .map_err(|e| {
            log::error!("[{}] Error generating flowchart: {}", scope, e);
            e
        })?;
    timer.debug(scope);

    Ok(HttpResponse::Ok().json(MermaidResponse { mermaid_code }))
}
