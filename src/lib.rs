//! League of Legends Stats Teletext Viewer Library
//!
//! This library provides functionality for looking up a player's profile,
//! ranked standing and recent match history, and rendering the result in a
//! teletext-style format. It also hosts the API proxy that keeps the Riot
//! API key off client machines.
//!
//! # Examples
//!
//! ```rust,no_run
//! use rift_teletext::config::Config;
//! use rift_teletext::data_fetcher::{create_http_client_with_timeout, fetch_player_report};
//! use rift_teletext::error::AppError;
//! use rift_teletext::teletext_ui::{TeletextPage, TeletextRow};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     // Run the search pipeline against a running proxy
//!     let report = fetch_player_report(&client, &config, "Faker#KR1").await?;
//!
//!     // Render a page with one row per ranked standing
//!     let mut page = TeletextPage::new(
//!         520,
//!         "LOL STATS".to_string(),
//!         "SUMMONER SEARCH".to_string(),
//!         false,
//!         false,
//!     );
//!     page.add_row(TeletextRow::SummonerHeader {
//!         game_name: report.account.game_name.clone(),
//!         tag_line: report.account.tag_line.clone(),
//!         level: report.summoner.summoner_level,
//!     });
//!
//!     let mut stdout = std::io::stdout();
//!     page.render_buffered(&mut stdout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod server;
pub mod teletext_ui;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::fetch_player_report;
pub use data_fetcher::models::PlayerReport;
pub use error::AppError;
pub use teletext_ui::{TeletextPage, TeletextRow};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
