use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{
    AnalyticsParams, BenchmarkConfig, Config, DataSourceConfig, IndicatorParams, LoggingConfig,
    SummarizerConfig,
};

/// Prefix for environment overrides, e.g. `TICKERLENS__SUMMARIZER__API_KEY`.
pub const ENV_PREFIX: &str = "TICKERLENS";

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, an optional `config.toml`
/// in the working directory, then `TICKERLENS__*` environment variables.
pub fn load_config() -> Result<Config, ConfigError> {
    build(config::File::with_name("config").required(false))
}

/// Same as [`load_config`], but reads an explicit file that must exist.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    build(config::File::from(path).required(true))
}

fn build<S>(file: S) -> Result<Config, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}
