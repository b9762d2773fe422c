//! Data fetching and aggregation for player searches
//!
//! The dashboard's half of the system: proxy-facing URL builders, typed
//! JSON fetching, the ordered search pipeline and the pure stat processors
//! the renderer draws from.

pub mod http_client;
pub mod models;
pub mod pipeline;
pub mod processors;
pub mod urls;

mod fetch_utils;

pub use http_client::create_http_client_with_timeout;
pub use pipeline::{fetch_match_details, fetch_player_report, parse_riot_id};
