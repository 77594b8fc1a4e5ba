//! Logging context: initialization, resolution front door, refresh.
//!
//! # Data Flow
//! ```text
//! LoggingConfig snapshot
//!     → init_from_config (gated, idempotent) / reconfigure (administrative)
//!     → apply: build sink factory → rebuild registry + pool wholesale
//!     → refresh: retarget every cached handle in place
//!     → install the root-resolved logger as the context default
//!
//! handle(module):
//!     cache hit → existing handle
//!     cache miss → registry.resolve → pool.get → new handle, cached
//! ```
//!
//! # Design Decisions
//! - The context is an explicit object: production code uses the shared
//!   `global()` context, tests create their own and tear nothing down
//! - The miss path in `handle` takes no lock across resolve → fetch →
//!   store; racing first-requests are benign (last store wins)
//! - `handle` and `refresh` are total: a pool inconsistency falls back to
//!   the context default logger instead of failing the caller

pub mod gate;

use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use crate::config::schema::{LevelSpec, LoggingConfig};
use crate::context::gate::InitGate;
use crate::error::{LoggingError, LoggingResult};
use crate::handle::{ModuleHandle, ModuleHandleCache};
use crate::level::Level;
use crate::pool::LevelLoggerPool;
use crate::registry::{LevelRegistry, ROOT_MODULE};
use crate::sink::factory::{LoggerOption, SinkFactory};
use crate::sink::logger::Logger;

/// Owns the registry, pool, handle cache, init gate and default logger.
pub struct LoggingContext {
    registry: LevelRegistry,
    pool: LevelLoggerPool,
    handles: ModuleHandleCache,
    gate: InitGate,
    default_logger: ArcSwap<Logger>,
    sink: ArcSwap<SinkFactory>,
}

impl LoggingContext {
    /// Create a context with the baseline configuration: root at INFO,
    /// JSON records to an async console sink.
    pub fn new() -> Self {
        let registry = LevelRegistry::new();
        let pool = LevelLoggerPool::new();
        let factory = SinkFactory::default_console();
        let root_logger = pool.build(Level::Info, &factory);
        Self {
            registry,
            pool,
            handles: ModuleHandleCache::new(),
            gate: InitGate::new(),
            default_logger: ArcSwap::from(root_logger),
            sink: ArcSwap::from(Arc::new(factory)),
        }
    }

    /// Apply a configuration snapshot exactly once.
    ///
    /// The first caller (racing first-callers included) runs the build;
    /// subsequent calls are no-ops. Invalid level strings and sink
    /// construction failures are fatal and surfaced to the first caller.
    pub fn init_from_config(
        &self,
        config: &LoggingConfig,
        options: &[LoggerOption],
    ) -> LoggingResult<()> {
        self.gate.enter(|| self.apply(config, options))
    }

    /// Apply a configuration snapshot unconditionally.
    ///
    /// Administrative reconfiguration path: bypasses the init gate, rebuilds
    /// registry and pool wholesale, and refreshes every issued handle.
    pub fn reconfigure(
        &self,
        config: &LoggingConfig,
        options: &[LoggerOption],
    ) -> LoggingResult<()> {
        self.apply(config, options)
    }

    fn apply(&self, config: &LoggingConfig, options: &[LoggerOption]) -> LoggingResult<()> {
        let factory = Arc::new(SinkFactory::from_config(config, options)?);

        // Parse every level string before touching shared state, so a bad
        // snapshot leaves the previous configuration intact.
        let entries: Vec<(String, Level)> = match &config.level {
            None => Vec::new(),
            Some(LevelSpec::Single(value)) => {
                vec![(ROOT_MODULE.to_string(), value.parse()?)]
            }
            Some(LevelSpec::PerModule(map)) => map
                .iter()
                .map(|(module, value)| {
                    value
                        .parse()
                        .map(|level| (module.clone(), level))
                        .map_err(|_| LoggingError::ModuleLevel {
                            module: module.clone(),
                            value: value.clone(),
                        })
                })
                .collect::<LoggingResult<_>>()?,
        };

        // Wholesale rebuild: stale entries from a previous snapshot must
        // not survive a reconfiguration.
        self.registry.reset();
        self.pool.reset();
        for (module, level) in entries {
            self.registry.set_level(module, level);
            self.pool.build(level, factory.as_ref());
        }
        // Root fallback guarantee: the reset seeds root at INFO, so a
        // per-module map without a root entry still resolves. The pool must
        // cover whatever level the root ended up at.
        let root_logger = self.pool.build(self.registry.root_level(), factory.as_ref());

        self.sink.store(factory);
        self.refresh();
        self.default_logger.store(root_logger);
        Ok(())
    }

    /// Adjust one module's level at runtime.
    ///
    /// Builds the pooled logger for `level` from the current sink pipeline
    /// if none exists yet and retargets issued handles immediately.
    pub fn set_module_level(&self, module: impl Into<String>, level: Level) {
        let factory = self.sink.load_full();
        self.registry.set_level(module, level);
        self.pool.build(level, factory.as_ref());
        self.refresh();
    }

    /// Retarget every issued handle against the current registry and pool.
    ///
    /// Correct under repeated invocation; handles keep their identity and
    /// callers holding them observe the new configuration on next use.
    pub fn refresh(&self) {
        self.handles.for_each(|handle| {
            let level = self.registry.resolve(handle.module());
            let logger = self
                .pool
                .get(level)
                .unwrap_or_else(|_| self.default_logger.load_full());
            handle.retarget(logger);
        });
    }

    /// The stable logging handle for `module`. Total: never fails.
    pub fn handle(&self, module: &str) -> Arc<ModuleHandle> {
        if let Some(handle) = self.handles.get(module) {
            return handle;
        }
        let level = self.registry.resolve(module);
        let logger = self
            .pool
            .get(level)
            .unwrap_or_else(|_| self.default_logger.load_full());
        let handle = Arc::new(ModuleHandle::new(module.to_string(), logger));
        self.handles.insert(Arc::clone(&handle));
        handle
    }

    /// Resolve `module` to its effective level. Total: never fails.
    pub fn resolve_level(&self, module: &str) -> Level {
        self.registry.resolve(module)
    }

    /// The current default logger (root-resolved after initialization).
    pub fn default_logger(&self) -> Arc<Logger> {
        self.default_logger.load_full()
    }

    /// The level registry, for administrative level adjustments.
    ///
    /// Changes only reach already-issued handles after [`refresh`].
    ///
    /// [`refresh`]: Self::refresh
    pub fn registry(&self) -> &LevelRegistry {
        &self.registry
    }

    /// Whether a configuration snapshot has been applied through the gate.
    pub fn initialized(&self) -> bool {
        self.gate.completed()
    }
}

impl Default for LoggingContext {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<LoggingContext> = OnceLock::new();

/// The process-wide logging context, created lazily.
///
/// Ambient callers anywhere in a larger system share this context; its
/// default logger is replaced by the root-resolved logger once
/// [`init_from_config`] runs.
pub fn global() -> &'static LoggingContext {
    GLOBAL.get_or_init(LoggingContext::new)
}

/// Apply a configuration snapshot to the global context. Idempotent.
pub fn init_from_config(config: &LoggingConfig, options: &[LoggerOption]) -> LoggingResult<()> {
    global().init_from_config(config, options)
}

/// The stable handle for `module` from the global context.
pub fn get_handle(module: &str) -> Arc<ModuleHandle> {
    global().handle(module)
}

/// Resolve `module` against the global context.
pub fn resolve_level(module: &str) -> Level {
    global().resolve_level(module)
}

/// The global context's current default logger.
pub fn default_logger() -> Arc<Logger> {
    global().default_logger()
}
