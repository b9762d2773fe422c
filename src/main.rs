// src/main.rs
use clap::Parser;
use rift_teletext::cli::{Args, is_config_operation};
use rift_teletext::config::Config;
use rift_teletext::data_fetcher::{create_http_client_with_timeout, fetch_player_report};
use rift_teletext::error::AppError;
use rift_teletext::{logging, server, ui};
use std::io::stdout;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Validate argument combinations
    if args.serve && args.riot_id.is_some() {
        return Err(AppError::config_error(
            "--serve runs the proxy and does not take a Riot ID",
        ));
    }

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    info!("Logs are being written to: {log_file_path}");

    // Handle configuration updates before anything needs a valid config
    if is_config_operation(&args) {
        if args.list_config {
            Config::display().await?;
            return Ok(());
        }

        let mut config = Config::load().await.unwrap_or_default();

        if let Some(new_api_key) = args.new_api_key {
            config.api_key = new_api_key;
        }
        if let Some(new_proxy_address) = args.new_proxy_address {
            config.proxy_address = new_proxy_address;
        }
        if let Some(new_log_path) = args.new_log_file_path {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    if args.serve {
        return server::run_server(config).await;
    }

    let Some(riot_id) = args.riot_id.clone() else {
        return Err(AppError::config_error(
            "Provide a Riot ID to look up (e.g. \"Faker#KR1\"), or run the proxy with --serve",
        ));
    };

    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    // Any stage failure is terminal for this search; it renders as a single
    // banner on an otherwise normal page
    let page = match fetch_player_report(&client, &config, &riot_id).await {
        Ok(report) => ui::create_report_page(&report, &args),
        Err(e) => ui::create_error_page(&format!("Search failed: {e}"), &args),
    };

    page.render_buffered(&mut stdout())?;
    println!();
    Ok(())
}
