//! The API proxy server
//!
//! Holds the Riot API key and exposes the stateless `/api` routes the
//! dashboard consumes. One shared HTTP client and the loaded config are the
//! only state; handlers never touch anything mutable.

pub mod routes;
pub mod upstream;

use actix_web::{App, HttpServer, web};
use reqwest::Client;
use tracing::info;

use crate::config::Config;
use crate::data_fetcher::http_client::create_http_client_with_timeout;
use crate::error::AppError;

/// Shared state handed to every route handler.
pub struct ProxyState {
    pub client: Client,
    pub config: Config,
}

/// Runs the proxy server on the configured address until interrupted.
/// Refuses to start without an API key; every upstream call would fail
/// with 401 anyway.
pub async fn run_server(config: Config) -> Result<(), AppError> {
    if config.api_key.trim().is_empty() {
        return Err(AppError::config_error(
            "No Riot API key configured. Set one with --set-api-key or the RIFT_API_KEY environment variable",
        ));
    }

    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let bind_address = config.proxy_address.clone();
    let state = web::Data::new(ProxyState { client, config });

    info!("Proxy listening on {bind_address}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(routes::config)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
