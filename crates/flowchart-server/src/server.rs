use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::io;

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::root::handler))
        .route(
            "/generate_flowchart",
            web::post().to(handlers::generate::handler),
        )
        .route(
            "/history/{session_id}",
            web::get().to(handlers::history::get_history),
        )
        .route(
            "/history/{session_id}",
            web::delete().to(handlers::history::clear_history),
        )
        .route("/health", web::get().to(handlers::health::handler));
}

pub fn cors(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

pub async fn run_server(config: ServerConfig) -> io::Result<()> {
    let state = web::Data::new(AppState::from_config(&config.llm));
    let cors_origin = config.cors_origin.clone();

    log::info!(
        "Starting Flowchart Generator API on http://{}:{} (CORS origin: {})",
        config.host,
        config.port,
        config.cors_origin
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors(&cors_origin))
            .configure(app_config)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
