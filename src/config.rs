//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATASET_PATH="data/universal_top_spotify_songs.csv"
//! export LISTEN="127.0.0.1:8050"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATASET_PATH` - CSV dataset (default: `universal_top_spotify_songs.csv`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8050`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `FOOTER_OFFSET_PX` - Footer distance from the page bottom (default: 60)
//! - `TOP_N` - Rows shown by ranked charts (default: 10, range: 1..=50)
//! - `RATE_LIMIT_PER_SECOND` - API token refill rate per client IP (default: 10)
//! - `RATE_LIMIT_BURST` - API burst size per client IP (default: 100)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::controls::DEFAULT_FOOTER_OFFSET_PX;

pub const DEFAULT_DATASET_PATH: &str = "universal_top_spotify_songs.csv";
pub const DEFAULT_TOP_N: usize = 10;
pub const MAX_TOP_N: usize = 50;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Pixels between the footer image and the bottom of the page.
    pub footer_offset_px: u32,
    /// Number of rows in the dance/energy and genre rankings.
    pub top_n: usize,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            listen_addr: "0.0.0.0:8050".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            footer_offset_px: DEFAULT_FOOTER_OFFSET_PX,
            top_n: DEFAULT_TOP_N,
            rate_limit_per_second: 10,
            rate_limit_burst: 100,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        Ok(Self {
            dataset_path: dataset_path_from_env(),
            listen_addr,
            log_level,
            log_format,
            footer_offset_px: parse_var("FOOTER_OFFSET_PX")?.unwrap_or(defaults.footer_offset_px),
            top_n: parse_var("TOP_N")?.unwrap_or(defaults.top_n),
            rate_limit_per_second: parse_var("RATE_LIMIT_PER_SECOND")?
                .unwrap_or(defaults.rate_limit_per_second),
            rate_limit_burst: parse_var("RATE_LIMIT_BURST")?.unwrap_or(defaults.rate_limit_burst),
            static_dir,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a socket address
    /// - `top_n` is outside `1..=50`
    /// - a rate limit value is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.top_n == 0 || self.top_n > MAX_TOP_N {
            anyhow::bail!("TOP_N must be between 1 and {MAX_TOP_N}, got {}", self.top_n);
        }

        if self.rate_limit_per_second == 0 {
            anyhow::bail!("RATE_LIMIT_PER_SECOND must be greater than 0");
        }
        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
        }

        if self.dataset_path.as_os_str().is_empty() {
            anyhow::bail!("DATASET_PATH must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Dataset: {}", self.dataset_path.display());
        tracing::info!("  Static files: {}", self.static_dir.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Footer offset: {}px", self.footer_offset_px);
        tracing::info!("  Top N: {}", self.top_n);
        tracing::info!(
            "  Rate limit: {}/s (burst {})",
            self.rate_limit_per_second,
            self.rate_limit_burst
        );
    }
}

/// Resolves `DATASET_PATH`, falling back to the default file name.
pub fn dataset_path_from_env() -> PathBuf {
    env::var("DATASET_PATH")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH))
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
