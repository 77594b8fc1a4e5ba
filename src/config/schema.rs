//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Defaults mirror what an empty config must mean: INFO at the root, JSON
//! encoding, a single asynchronous console sink.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The `[logging]` configuration table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Verbosity: a single level string for the root module, or a table of
    /// module name → level string.
    pub level: Option<LevelSpec>,

    /// Record encoding.
    pub encoding: Encoding,

    /// Optional record-field-name overrides passed through to the encoder.
    pub encoder: Option<EncoderOverrides>,

    /// Output sinks.
    pub output: OutputConfig,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            encoding: Encoding::Json,
            encoder: None,
            output: OutputConfig::console_default(),
        }
    }
}

/// Polymorphic `logging.level` value.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LevelSpec {
    /// A single level string, applied to the root module.
    Single(String),

    /// Per-module level strings.
    PerModule(HashMap<String, String>),
}

/// Record encoding selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Structured JSON records (default).
    #[default]
    Json,
    /// Human-readable text records.
    Console,
}

/// Optional overrides for the field names used in encoded records.
///
/// Unset fields keep the encoder defaults (`ts`, `level`, `module`, `msg`).
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EncoderOverrides {
    pub time_key: Option<String>,
    pub level_key: Option<String>,
    pub module_key: Option<String>,
    pub message_key: Option<String>,
}

/// Output sink selection.
///
/// When the `output` key is absent entirely, the default is a single async
/// console sink. When `output` is present, only the sinks it names are
/// built: a file-only config does not get an implicit console sink.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub console: Option<ConsoleOutput>,

    #[serde(default)]
    pub file: Option<FileOutput>,
}

impl OutputConfig {
    /// The default when no `output` key is configured.
    pub fn console_default() -> Self {
        Self {
            console: Some(ConsoleOutput::default()),
            file: None,
        }
    }
}

/// Console sink settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleOutput {
    /// Write through a background thread instead of inline.
    #[serde(rename = "async")]
    pub async_write: bool,
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self { async_write: true }
    }
}

/// File sink settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileOutput {
    /// Path of the log file; created if missing, appended to otherwise.
    pub path: String,

    /// Write through a background thread instead of inline.
    #[serde(default, rename = "async")]
    pub async_write: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> LoggingConfig {
        #[derive(Deserialize, Default)]
        #[serde(default)]
        struct Root {
            logging: LoggingConfig,
        }
        toml::from_str::<Root>(toml_str).expect("parse failed").logging
    }

    #[test]
    fn test_empty_config_defaults() {
        let cfg = parse("");
        assert!(cfg.level.is_none());
        assert_eq!(cfg.encoding, Encoding::Json);
        assert!(cfg.encoder.is_none());
        let console = cfg.output.console.expect("default console sink");
        assert!(console.async_write);
        assert!(cfg.output.file.is_none());
    }

    #[test]
    fn test_scalar_level() {
        let cfg = parse("[logging]\nlevel = \"DEBUG\"\n");
        match cfg.level {
            Some(LevelSpec::Single(ref s)) => assert_eq!(s, "DEBUG"),
            other => panic!("expected scalar level, got {:?}", other),
        }
    }

    #[test]
    fn test_per_module_level() {
        let cfg = parse("[logging.level]\n\"module1.child1\" = \"DEBUG\"\nmodule2 = \"ERROR\"\n");
        match cfg.level {
            Some(LevelSpec::PerModule(ref m)) => {
                assert_eq!(m["module1.child1"], "DEBUG");
                assert_eq!(m["module2"], "ERROR");
            }
            other => panic!("expected per-module level, got {:?}", other),
        }
    }

    #[test]
    fn test_file_only_output_excludes_console() {
        let cfg = parse("[logging.output.file]\npath = \"/tmp/app.log\"\nasync = true\n");
        assert!(cfg.output.console.is_none());
        let file = cfg.output.file.expect("file sink");
        assert_eq!(file.path, "/tmp/app.log");
        assert!(file.async_write);
    }

    #[test]
    fn test_encoding_and_encoder_overrides() {
        let cfg = parse(
            "[logging]\nencoding = \"console\"\n[logging.encoder]\ntime_key = \"time\"\nmessage_key = \"message\"\n",
        );
        assert_eq!(cfg.encoding, Encoding::Console);
        let enc = cfg.encoder.expect("encoder overrides");
        assert_eq!(enc.time_key.as_deref(), Some("time"));
        assert_eq!(enc.message_key.as_deref(), Some("message"));
        assert!(enc.level_key.is_none());
    }
}
