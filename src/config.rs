use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Riot API key used by the proxy to authenticate upstream calls.
    /// The dashboard itself never needs it; it talks to the proxy.
    #[serde(default)]
    pub api_key: String,
    /// Platform-routed API domain (summoner, league, mastery lookups).
    #[serde(default = "default_platform_domain")]
    pub platform_domain: String,
    /// Region-routed API domain (account and match lookups).
    #[serde(default = "default_regional_domain")]
    pub regional_domain: String,
    /// Data Dragon domain for static champion metadata. No auth required.
    #[serde(default = "default_ddragon_domain")]
    pub ddragon_domain: String,
    /// Address the proxy binds to, and the dashboard connects to.
    #[serde(default = "default_proxy_address")]
    pub proxy_address: String,
    /// Path to the log file. If not specified, logs go to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_platform_domain() -> String {
    constants::DEFAULT_PLATFORM_DOMAIN.to_string()
}

fn default_regional_domain() -> String {
    constants::DEFAULT_REGIONAL_DOMAIN.to_string()
}

fn default_ddragon_domain() -> String {
    constants::DEFAULT_DDRAGON_DOMAIN.to_string()
}

fn default_proxy_address() -> String {
    constants::DEFAULT_PROXY_ADDRESS.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            platform_domain: default_platform_domain(),
            regional_domain: default_regional_domain(),
            ddragon_domain: default_ddragon_domain(),
            proxy_address: default_proxy_address(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, one is created with default values so the
    /// user has something to edit. Environment variables override file values.
    ///
    /// # Environment Variables
    /// - `RIFT_API_KEY` - Riot API key (proxy mode secret)
    /// - `RIFT_PROXY_ADDRESS` - Proxy bind/connect address
    /// - `RIFT_PLATFORM_DOMAIN` / `RIFT_REGIONAL_DOMAIN` - Upstream domains
    /// - `RIFT_DDRAGON_DOMAIN` - Data Dragon domain
    /// - `RIFT_LOG_FILE` - Log file path
    /// - `RIFT_HTTP_TIMEOUT` - HTTP timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            let config = Config::default();
            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of file values.
    fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = api_key;
        }
        if let Ok(proxy_address) = std::env::var(env_vars::PROXY_ADDRESS) {
            self.proxy_address = proxy_address;
        }
        if let Ok(platform_domain) = std::env::var(env_vars::PLATFORM_DOMAIN) {
            self.platform_domain = platform_domain;
        }
        if let Ok(regional_domain) = std::env::var(env_vars::REGIONAL_DOMAIN) {
            self.regional_domain = regional_domain;
        }
        if let Ok(ddragon_domain) = std::env::var(env_vars::DDRAGON_DOMAIN) {
            self.ddragon_domain = ddragon_domain;
        }
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        if self.proxy_address.trim().is_empty() {
            return Err(AppError::config_error("Proxy address cannot be empty"));
        }
        for (name, domain) in [
            ("platform_domain", &self.platform_domain),
            ("regional_domain", &self.regional_domain),
            ("ddragon_domain", &self.ddragon_domain),
        ] {
            if !domain.starts_with("http://") && !domain.starts_with("https://") {
                return Err(AppError::config_error(format!(
                    "{name} must start with http:// or https:// (got '{domain}')"
                )));
            }
        }
        if let Some(path) = &self.log_file_path
            && path.trim().is_empty()
        {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }
        if self.http_timeout_seconds == 0 {
            return Err(AppError::config_error(
                "HTTP timeout must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Base URL the dashboard uses to reach the proxy. The configured
    /// address is a bare host:port; a scheme is prepended when missing.
    pub fn proxy_base_url(&self) -> String {
        if self.proxy_address.starts_with("http://") || self.proxy_address.starts_with("https://") {
            self.proxy_address.trim_end_matches('/').to_string()
        } else {
            format!("http://{}", self.proxy_address.trim_end_matches('/'))
        }
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    /// The API key is masked; only its length is revealed.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Key:");
            if config.api_key.is_empty() {
                println!("(not set)");
            } else {
                println!("(set, {} characters)", config.api_key.len());
            }
            println!("────────────────────────────────────");
            println!("Proxy Address:");
            println!("{}", config.proxy_address);
            println!("────────────────────────────────────");
            println!("Upstream Domains:");
            println!("{}", config.platform_domain);
            println!("{}", config.regional_domain);
            println!("{}", config.ddragon_domain);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/rift_teletext.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    /// Creates the parent directory if it doesn't exist.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    #[allow(dead_code)] // Used in tests
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Returns the platform-specific path for the config file.
/// Falls back to the current directory if no config directory is available.
fn get_config_path() -> String {
    let config_dir = dirs::config_dir().unwrap_or_else(|| Path::new(".").to_path_buf());
    config_dir
        .join("rift_teletext")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
fn get_log_dir_path() -> String {
    let config_dir = dirs::config_dir().unwrap_or_else(|| Path::new(".").to_path_buf());
    config_dir
        .join("rift_teletext")
        .join("logs")
        .to_string_lossy()
        .to_string()
}
