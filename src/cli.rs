use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the invocation only manages configuration and should exit
/// without running the proxy or a search.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_key.is_some()
        || args.new_proxy_address.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// League of Legends Stats Teletext Viewer
///
/// Looks up a player by Riot ID and renders their profile, ranked standing
/// and recent matches as a teletext-style page. The Riot API key never
/// leaves the proxy: run `rift_teletext --serve` on a machine holding the
/// key, point `proxy_address` at it, then search from anywhere.
///
/// Examples:
///   rift_teletext --serve
///   rift_teletext "Faker#KR1"
///   rift_teletext -c "Faker#KR1"
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Riot ID to look up, in Name#TAG format (e.g. "Faker#KR1").
    pub riot_id: Option<String>,

    /// Run the API proxy server instead of the dashboard.
    /// Requires an API key in the config file or RIFT_API_KEY.
    #[arg(short = 's', long = "serve")]
    pub serve: bool,

    /// Display matches in compact format showing only result cards.
    /// Removes roster tables and chart panels for a condensed view.
    #[arg(short = 'c', long = "compact", help_heading = "Display Options")]
    pub compact: bool,

    /// Disable ANSI colors in the output.
    /// Useful for plain text output or terminals without color support.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Update the Riot API key in config.
    #[arg(
        long = "set-api-key",
        help_heading = "Configuration",
        value_name = "API_KEY"
    )]
    pub new_api_key: Option<String>,

    /// Update the proxy address in config (bind address in serve mode,
    /// target address in dashboard mode).
    #[arg(
        long = "set-proxy-address",
        help_heading = "Configuration",
        value_name = "ADDRESS"
    )]
    pub new_proxy_address: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode which logs to stdout in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_config_operation() {
        let mut args = Args::parse_from(["rift_teletext", "Faker#KR1"]);
        assert!(!is_config_operation(&args));

        args.list_config = true;
        assert!(is_config_operation(&args));

        let args = Args::parse_from(["rift_teletext", "--set-api-key", "RGAPI-key"]);
        assert!(is_config_operation(&args));
    }

    #[test]
    fn test_parse_search_invocation() {
        let args = Args::parse_from(["rift_teletext", "-c", "Faker#KR1"]);
        assert_eq!(args.riot_id.as_deref(), Some("Faker#KR1"));
        assert!(args.compact);
        assert!(!args.serve);
    }

    #[test]
    fn test_parse_serve_invocation() {
        let args = Args::parse_from(["rift_teletext", "--serve"]);
        assert!(args.serve);
        assert!(args.riot_id.is_none());
    }
}
