use crate::error::ConfigError;
use core_types::Symbol;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional in `config.toml`; omitted sections and fields fall
/// back to the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_source: DataSourceConfig,
    pub benchmark: BenchmarkConfig,
    pub indicators: IndicatorParams,
    pub analytics: AnalyticsParams,
    pub summarizer: SummarizerConfig,
    pub logging: LoggingConfig,
}

/// Connection settings for the market data provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataSourceConfig {
    /// Base URL of the quote/chart API (e.g., "https://query1.finance.yahoo.com").
    pub base_url: String,
    /// Page visited once per session to obtain the provider's session cookie.
    pub auth_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

/// The reference index every instrument is compared against.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub symbol: Symbol,
}

/// Parameters for the moving average and Bollinger bands.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndicatorParams {
    /// Number of trailing observations in the moving-average window.
    pub window: usize,
    /// Band half-width, in standard deviations.
    pub band_width: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyticsParams {
    /// Scaling convention for annualizing daily volatility.
    pub trading_days_per_year: u32,
}

/// Settings for the metadata translation/summary service.
///
/// An empty `api_key` disables the remote service; metadata is then rendered as-is.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    /// Language the summary is written in.
    pub language: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is not set.
    pub level: String,
    /// When set, logs are also written to a daily-rolling file in this directory.
    pub directory: Option<PathBuf>,
}

// --- Default Implementations ---

/// The provider answers scripted user agents with 429s.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            auth_url: "https://fc.yahoo.com".to_string(),
            timeout_secs: 10,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            symbol: Symbol::parse("SPY").expect("SPY is a well-formed symbol"),
        }
    }
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            window: 20,
            band_width: 2.0,
        }
    }
}

impl Default for AnalyticsParams {
    fn default() -> Self {
        Self {
            trading_days_per_year: 252,
        }
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-pro".to_string(),
            language: "English".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl Config {
    /// Rejects values that would make the analytics meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indicators.window == 0 {
            return Err(ConfigError::ValidationError(
                "indicators.window must be at least 1".to_string(),
            ));
        }
        if !(self.indicators.band_width > 0.0) {
            return Err(ConfigError::ValidationError(
                "indicators.band_width must be positive".to_string(),
            ));
        }
        if self.analytics.trading_days_per_year == 0 {
            return Err(ConfigError::ValidationError(
                "analytics.trading_days_per_year must be at least 1".to_string(),
            ));
        }
        if self.data_source.timeout_secs == 0 || self.summarizer.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeouts must be at least one second".to_string(),
            ));
        }
        Ok(())
    }
}
