use clap::Parser;

use flowchart_server::logging::init_logging;
use flowchart_server::{run_server, AppState, Cli};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    if cli.log_level.is_some() {
        env_logger::init();
    } else {
        init_logging(cli.debug);
    }

    if let Ok(path) = &dotenv {
        log::info!("Loaded environment from {}", path.display());
    }

    let once = cli.once.clone();
    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    log::info!("LLM Configuration:");
    log::info!("  Base URL: {}", config.llm.base_url);
    log::info!("  Model: {}", config.llm.model);
    log::info!("  Temperature: {}", config.llm.temperature);

    if let Some(text) = once {
        let state = AppState::from_config(&config.llm);
        let mermaid_code = match state.generator.generate(&text, None).await {
            Ok(code) => code,
            Err(e) => {
                log::error!("Error generating flowchart: {}", e);
                return Err(e.into());
            }
        };
        println!("{mermaid_code}");
        return Ok(());
    }

    run_server(config).await?;
    Ok(())
}
