use std::sync::Arc;
use log::{info, warn};
use ideagen::config::Config;
use ideagen::handler::IdeaHandler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>>
{   env_logger::init();

    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);
    if config.api_key().is_none()
    {   warn!(
          "{} is not set; idea requests will fail",
          ideagen::config::API_KEY_VAR
        );
    }

    let addr = config.server_addr();
    let handler = Arc::new(IdeaHandler::new(config));
    let app = ideagen::server::router(handler);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
