//! Configuration management module.
//!
//! Handles loading configuration from command-line arguments and environment
//! variables.

use std::time::Duration;

use clap::{error::ErrorKind, Parser};

use crate::error::AppError;

/// Default spot API endpoint (development environment).
///
/// This is a live host. Requests sent to it use this crate's own path layout
/// and signing scheme (see `exchange::endpoints`), so startup logs a warning
/// when it is used implicitly.
pub const DEFAULT_SPOT_URL: &str = "https://dev-spots-api.unift.xyz";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Command-line arguments. Every option can also come from the environment.
#[derive(Debug, Parser)]
#[command(name = "lnexchange-mcp", version, about = "LnExchange trading MCP server")]
struct Cli {
    /// Private key used to sign exchange requests (hex, optional 0x prefix).
    #[arg(env = "LNEXCHANGE_PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Spot API base URL.
    #[arg(long, env = "LNEXCHANGE_SPOT_URL", default_value = DEFAULT_SPOT_URL)]
    spot_url: String,

    /// Perpetual API base URL. Perpetual tools are only registered when set.
    #[arg(long, env = "LNEXCHANGE_PERPETUAL_URL")]
    perpetual_url: Option<String>,

    /// HTTP request timeout in seconds.
    #[arg(long, env = "LNEXCHANGE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Logging level (overridden by RUST_LOG).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

/// Application configuration.
#[derive(Clone)]
pub struct Config {
    /// Private key for request signing.
    pub private_key: String,
    /// Spot API base URL.
    pub spot_url: String,
    /// Perpetual API base URL, if perpetual trading is enabled.
    pub perpetual_url: Option<String>,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process arguments and environment.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn load() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        let cli = match Cli::try_parse() {
            Ok(cli) => cli,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => return Err(AppError::Config(e.to_string())),
        };
        Self::from_cli(cli)
    }

    /// Parse configuration from an explicit argument list.
    ///
    /// The first item is the program name, as with `std::env::args`.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|e| AppError::Config(e.to_string()))?;
        Self::from_cli(cli)
    }

    fn from_cli(cli: Cli) -> Result<Self, AppError> {
        let private_key = cli
            .private_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                AppError::Config(
                    "Please provide private key as startup parameter or LNEXCHANGE_PRIVATE_KEY"
                        .into(),
                )
            })?;

        let spot_url = normalize_url(&cli.spot_url)?;
        let perpetual_url = cli
            .perpetual_url
            .filter(|u| !u.trim().is_empty())
            .map(|u| normalize_url(&u))
            .transpose()?;

        if cli.timeout_secs == 0 {
            return Err(AppError::Config("timeout must be greater than zero".into()));
        }

        Ok(Self {
            private_key,
            spot_url,
            perpetual_url,
            timeout: Duration::from_secs(cli.timeout_secs),
            log_level: cli.log_level,
        })
    }

    /// Whether the spot URL is the built-in development host.
    pub fn uses_default_spot_url(&self) -> bool {
        self.spot_url == DEFAULT_SPOT_URL
    }

    /// Whether perpetual tools should be registered.
    pub fn perpetual_enabled(&self) -> bool {
        self.perpetual_url.is_some()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("spot_url", &self.spot_url)
            .field("perpetual_url", &self.perpetual_url)
            .field("timeout", &self.timeout)
            .field("log_level", &self.log_level)
            .finish_non_exhaustive()
    }
}

/// Validate a base URL and strip any trailing slash.
fn normalize_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(trimmed)
        .map_err(|e| AppError::Config(format!("Invalid URL '{}': {}", raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AppError::Config(format!("URL must be http or https: {}", raw)));
    }

    Ok(trimmed.to_string())
}
