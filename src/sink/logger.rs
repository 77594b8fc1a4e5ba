//! A fully configured logger: minimum level over a shared pipeline.

use std::fmt;
use std::sync::Arc;

use crate::level::Level;
use crate::sink::encoder::Encoder;
use crate::sink::writer::MultiWriter;

/// A logger instance with its minimum emission level baked in.
///
/// All loggers built from one configuration snapshot share the same encoder
/// settings and the same writer pipeline; only the minimum level differs.
pub struct Logger {
    min_level: Level,
    encoder: Encoder,
    writer: Arc<MultiWriter>,
    fields: Vec<(String, String)>,
}

impl Logger {
    pub(crate) fn new(
        min_level: Level,
        encoder: Encoder,
        writer: Arc<MultiWriter>,
        fields: Vec<(String, String)>,
    ) -> Self {
        Self {
            min_level,
            encoder,
            writer,
            fields,
        }
    }

    /// The minimum level this logger emits at.
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Whether a record at `level` would be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Emit a record.
    pub fn log(&self, level: Level, module: &str, message: &str) {
        self.log_kv(level, module, message, &[]);
    }

    /// Emit a record with extra key/value pairs.
    pub fn log_kv(&self, level: Level, module: &str, message: &str, extra: &[(&str, &str)]) {
        if !self.enabled(level) {
            return;
        }
        let line = self.encoder.encode(level, module, message, &self.fields, extra);
        self.writer.write_line(&line);
    }

    /// Block until everything emitted so far has reached the sinks.
    pub fn flush(&self) {
        self.writer.flush();
    }
}

// The writer pipeline holds boxed `Write` targets, so Debug is manual.
impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
