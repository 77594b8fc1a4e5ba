//! Record encoding.
//!
//! Encodes one record to one line, either as a JSON object or as
//! tab-separated text. Field names are configurable through
//! `EncoderOverrides`; timestamps are ISO 8601 UTC with millisecond
//! precision.

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::config::schema::{EncoderOverrides, Encoding};
use crate::level::Level;

const DEFAULT_TIME_KEY: &str = "ts";
const DEFAULT_LEVEL_KEY: &str = "level";
const DEFAULT_MODULE_KEY: &str = "module";
const DEFAULT_MESSAGE_KEY: &str = "msg";

/// Encodes records into output lines.
#[derive(Debug, Clone)]
pub struct Encoder {
    format: Encoding,
    time_key: String,
    level_key: String,
    module_key: String,
    message_key: String,
}

impl Encoder {
    /// Build an encoder from the configured encoding and optional
    /// field-name overrides.
    pub fn from_config(format: Encoding, overrides: Option<&EncoderOverrides>) -> Self {
        let pick = |value: Option<&String>, default: &str| {
            value.cloned().unwrap_or_else(|| default.to_string())
        };
        Self {
            format,
            time_key: pick(overrides.and_then(|o| o.time_key.as_ref()), DEFAULT_TIME_KEY),
            level_key: pick(
                overrides.and_then(|o| o.level_key.as_ref()),
                DEFAULT_LEVEL_KEY,
            ),
            module_key: pick(
                overrides.and_then(|o| o.module_key.as_ref()),
                DEFAULT_MODULE_KEY,
            ),
            message_key: pick(
                overrides.and_then(|o| o.message_key.as_ref()),
                DEFAULT_MESSAGE_KEY,
            ),
        }
    }

    /// Encode one record. `fields` are the static key/values baked into the
    /// logger; `extra` are per-call key/values.
    pub fn encode(
        &self,
        level: Level,
        module: &str,
        message: &str,
        fields: &[(String, String)],
        extra: &[(&str, &str)],
    ) -> String {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        match self.format {
            Encoding::Json => self.encode_json(&timestamp, level, module, message, fields, extra),
            Encoding::Console => {
                self.encode_console(&timestamp, level, module, message, fields, extra)
            }
        }
    }

    fn encode_json(
        &self,
        timestamp: &str,
        level: Level,
        module: &str,
        message: &str,
        fields: &[(String, String)],
        extra: &[(&str, &str)],
    ) -> String {
        let mut record = Map::new();
        record.insert(self.time_key.clone(), Value::from(timestamp));
        record.insert(self.level_key.clone(), Value::from(level.as_str()));
        record.insert(self.module_key.clone(), Value::from(module));
        record.insert(self.message_key.clone(), Value::from(message));
        for (key, value) in fields {
            record.insert(key.clone(), Value::from(value.as_str()));
        }
        for (key, value) in extra {
            record.insert((*key).to_string(), Value::from(*value));
        }
        // Serializing a map of strings cannot fail.
        serde_json::to_string(&record).unwrap_or_default()
    }

    fn encode_console(
        &self,
        timestamp: &str,
        level: Level,
        module: &str,
        message: &str,
        fields: &[(String, String)],
        extra: &[(&str, &str)],
    ) -> String {
        let mut line = format!("{}\t{}\t{}\t{}", timestamp, level, module, message);
        for (key, value) in fields {
            line.push_str(&format!("\t{}={}", key, value));
        }
        for (key, value) in extra {
            line.push_str(&format!("\t{}={}", key, value));
        }
        line
    }
}
