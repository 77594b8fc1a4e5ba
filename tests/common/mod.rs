//! Shared helpers for integration tests.

use serde::Deserialize;

use modlog::LoggingConfig;

/// Parse a `[logging]` table from inline TOML.
pub fn config_from_toml(toml_str: &str) -> LoggingConfig {
    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct Root {
        logging: LoggingConfig,
    }
    toml::from_str::<Root>(toml_str)
        .expect("test config must parse")
        .logging
}

/// A config with no sinks at all, for tests that only exercise resolution.
pub fn quiet_config(level_table: &str) -> LoggingConfig {
    let mut config = config_from_toml(level_table);
    config.output.console = None;
    config.output.file = None;
    config
}
