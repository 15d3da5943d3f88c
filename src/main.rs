use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

mod config;
mod frame;
mod util;
mod web;

use crate::config::{AppConfig, CliArgs};
use crate::util::logging::init_tracing;
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Configuration decides the log format, so it is loaded first and a
    // failure here is reported by the returned error alone.
    let config = AppConfig::new(&args)?;

    init_tracing(&config.log);

    info!(
        "Frame images from {} ({}x{})",
        config.frame.image_base_url, config.frame.image_width, config.frame.image_height
    );
    info!("Uploads go to {}", config.storage.gateway_url);

    let web_config = config.web.clone();
    let app_state = Arc::new(AppState::new(config));

    info!("Starting frame server on {}:{}", web_config.host, web_config.port);
    match web::run_server(&web_config, app_state).await {
        Ok(_) => info!("Server stopped gracefully"),
        Err(e) => {
            error!("Server error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
