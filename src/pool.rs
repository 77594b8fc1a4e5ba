//! Per-level logger pool.
//!
//! One fully configured logger per distinct level referenced by the
//! registry, built once while a configuration snapshot is applied and
//! read-only afterwards.

use std::sync::Arc;

use dashmap::DashMap;

use crate::error::{LoggingError, LoggingResult};
use crate::level::Level;
use crate::sink::factory::LoggerFactory;
use crate::sink::logger::Logger;

/// Pool of level → logger instance.
pub struct LevelLoggerPool {
    loggers: DashMap<Level, Arc<Logger>>,
}

impl LevelLoggerPool {
    pub fn new() -> Self {
        Self {
            loggers: DashMap::new(),
        }
    }

    /// Build (at most once) and return the logger for `level`.
    pub fn build(&self, level: Level, factory: &dyn LoggerFactory) -> Arc<Logger> {
        let entry = self
            .loggers
            .entry(level)
            .or_insert_with(|| Arc::new(factory.build(level)));
        Arc::clone(entry.value())
    }

    /// The previously built logger for `level`.
    ///
    /// Failing here means the initializer's contract was violated: every
    /// level stored in the registry gets a pool entry in the same pass.
    pub fn get(&self, level: Level) -> LoggingResult<Arc<Logger>> {
        self.loggers
            .get(&level)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(LoggingError::LevelNotBuilt(level))
    }

    /// Drop every built logger.
    pub(crate) fn reset(&self) {
        self.loggers.clear();
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

impl Default for LevelLoggerPool {
    fn default() -> Self {
        Self::new()
    }
}
