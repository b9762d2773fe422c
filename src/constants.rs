//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers, upstream endpoints and fixed
//! gameplay vocabulary so the rest of the codebase stays configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Number of recent matches fetched per search. The proxy pins this in the
/// upstream match-ids call, so clients cannot request more.
pub const RECENT_MATCH_COUNT: u32 = 3;

/// Number of champion mastery entries shown on the summary card
pub const MASTERY_DISPLAY_COUNT: usize = 3;

/// Data Dragon version used when the realm version lookup fails
pub const FALLBACK_DDRAGON_VERSION: &str = "14.23.1";

/// Default bind/connect address for the proxy server
pub const DEFAULT_PROXY_ADDRESS: &str = "127.0.0.1:8980";

/// Default platform-routed Riot API domain (summoner, league, mastery)
pub const DEFAULT_PLATFORM_DOMAIN: &str = "https://kr.api.riotgames.com";

/// Default region-routed Riot API domain (account, match history)
pub const DEFAULT_REGIONAL_DOMAIN: &str = "https://asia.api.riotgames.com";

/// Default Data Dragon domain (static champion metadata, no auth)
pub const DEFAULT_DDRAGON_DOMAIN: &str = "https://ddragon.leagueoflegends.com";

/// Team identifiers as used by the match API
pub mod teams {
    /// Blue side (displayed first)
    pub const BLUE_SIDE: i64 = 100;

    /// Red side
    pub const RED_SIDE: i64 = 200;
}

/// Map positions in display order
pub mod positions {
    /// Position labels as reported in `teamPosition`
    pub const LABELS: [&str; 5] = ["TOP", "JUNGLE", "MIDDLE", "BOTTOM", "UTILITY"];
}

/// Ranked queue identifiers
pub mod queues {
    /// Solo/duo ranked queue
    pub const RANKED_SOLO: &str = "RANKED_SOLO_5x5";

    /// Flex ranked queue
    pub const RANKED_FLEX: &str = "RANKED_FLEX_SR";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the Riot API key (proxy mode secret)
    pub const API_KEY: &str = "RIFT_API_KEY";

    /// Environment variable for the proxy address override
    pub const PROXY_ADDRESS: &str = "RIFT_PROXY_ADDRESS";

    /// Environment variable for the platform-routed API domain override
    pub const PLATFORM_DOMAIN: &str = "RIFT_PLATFORM_DOMAIN";

    /// Environment variable for the region-routed API domain override
    pub const REGIONAL_DOMAIN: &str = "RIFT_REGIONAL_DOMAIN";

    /// Environment variable for the Data Dragon domain override
    pub const DDRAGON_DOMAIN: &str = "RIFT_DDRAGON_DOMAIN";

    /// Environment variable for the log file path override
    pub const LOG_FILE: &str = "RIFT_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "RIFT_HTTP_TIMEOUT";
}

/// UI layout constants
pub mod ui {
    /// Teletext page number shown in the header
    pub const TELETEXT_PAGE: u16 = 520;

    /// Rendered page width in characters
    pub const PAGE_WIDTH: usize = 80;

    /// Content margin from the terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Maximum width of a chart bar in characters
    pub const CHART_BAR_WIDTH: usize = 20;
}
