//! Sink factory: builds the shared pipeline once, stamps per-level loggers.

use std::fmt;
use std::io;
use std::io::Write;
use std::sync::Arc;

use crate::config::schema::LoggingConfig;
use crate::error::LoggingResult;
use crate::level::Level;
use crate::sink::encoder::Encoder;
use crate::sink::logfile::open_log_file;
use crate::sink::logger::Logger;
use crate::sink::writer::{LineWriter, MultiWriter};

/// Options applied to every logger built for one configuration snapshot.
#[derive(Debug, Clone)]
pub enum LoggerOption {
    /// A static key/value pair attached to every emitted record.
    Field(String, String),
}

impl LoggerOption {
    pub fn field(key: impl Into<String>, value: impl Into<String>) -> Self {
        LoggerOption::Field(key.into(), value.into())
    }
}

/// Trait for producing a ready logger for a given minimum level.
///
/// The pool only depends on this seam, so tests can drive it with counting
/// or buffer-backed factories.
pub trait LoggerFactory: Send + Sync {
    fn build(&self, level: Level) -> Logger;
}

/// The production factory: one encoder and one writer pipeline, shared by
/// every logger built from it.
pub struct SinkFactory {
    encoder: Encoder,
    writer: Arc<MultiWriter>,
    fields: Vec<(String, String)>,
}

impl SinkFactory {
    /// Build the pipeline described by `config`.
    ///
    /// This is the only point where initialization touches I/O; an unusable
    /// log file path fails here, before any shared state is modified.
    pub fn from_config(config: &LoggingConfig, options: &[LoggerOption]) -> LoggingResult<Self> {
        let encoder = Encoder::from_config(config.encoding, config.encoder.as_ref());

        let mut targets = Vec::new();
        if let Some(console) = &config.output.console {
            let stdout: Box<dyn Write + Send> = Box::new(io::stdout());
            targets.push(if console.async_write {
                LineWriter::background(stdout)
            } else {
                LineWriter::direct(stdout)
            });
        }
        if let Some(file) = &config.output.file {
            let handle: Box<dyn Write + Send> = Box::new(open_log_file(&file.path)?);
            targets.push(if file.async_write {
                LineWriter::background(handle)
            } else {
                LineWriter::direct(handle)
            });
        }

        let fields = options
            .iter()
            .map(|option| match option {
                LoggerOption::Field(key, value) => (key.clone(), value.clone()),
            })
            .collect();

        Ok(Self {
            encoder,
            writer: Arc::new(MultiWriter::new(targets)),
            fields,
        })
    }

    /// The baseline pipeline every context starts with before any
    /// configuration is applied: JSON records to an async console sink.
    pub fn default_console() -> Self {
        Self {
            encoder: Encoder::from_config(Default::default(), None),
            writer: Arc::new(MultiWriter::new(vec![LineWriter::background(Box::new(
                io::stdout(),
            ))])),
            fields: Vec::new(),
        }
    }
}

// The shared pipeline holds boxed `Write` targets, so Debug is manual.
impl fmt::Debug for SinkFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkFactory")
            .field("encoder", &self.encoder)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl LoggerFactory for SinkFactory {
    fn build(&self, level: Level) -> Logger {
        Logger::new(
            level,
            self.encoder.clone(),
            Arc::clone(&self.writer),
            self.fields.clone(),
        )
    }
}
