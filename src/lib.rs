//! Per-module leveled logging with live reconfiguration.
//!
//! Resolves, per dot-separated module name, which verbosity level applies
//! and hands out a stable, cheaply reusable logging handle per module.
//! Handles keep their identity across reconfiguration: refresh retargets
//! them in place, so references callers already hold observe new
//! configuration on their next use.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │               LoggingContext                  │
//!                      │                                               │
//!  handle("a.b.c") ────┼─▶ ModuleHandleCache ──hit──▶ Arc<ModuleHandle>│
//!                      │        │ miss                      ▲          │
//!                      │        ▼                           │          │
//!                      │   LevelRegistry ──level──▶ LevelLoggerPool    │
//!                      │   (longest-prefix)         (one logger/level) │
//!                      │        ▲                           ▲          │
//!  init_from_config ───┼────────┴───── rebuild ─────────────┘          │
//!  (gated, idempotent) │                   │                           │
//!                      │                   ▼                           │
//!                      │    refresh: retarget every cached handle      │
//!                      └───────────────────────────────────────────────┘
//!
//!  Sink layer (config → encoder + writers → per-level Logger):
//!      SinkFactory ──▶ Logger { min level, shared pipeline }
//! ```
//!
//! # Example
//!
//! ```no_run
//! use modlog::{LoggingConfig, Level};
//!
//! let config: LoggingConfig = Default::default();
//! modlog::init_from_config(&config, &[]).expect("logging misconfigured");
//!
//! let log = modlog::get_handle("billing.invoices");
//! log.info("invoice generated");
//! if log.enabled(Level::Debug) {
//!     log.debug("retry state dump");
//! }
//! ```

// Core resolution
pub mod handle;
pub mod level;
pub mod pool;
pub mod registry;

// Configuration & sinks
pub mod config;
pub mod sink;

// Cross-cutting
pub mod context;
pub mod error;

pub use config::{load_config, ConfigError, LevelSpec, LoggingConfig};
pub use context::{
    default_logger, get_handle, global, init_from_config, resolve_level, LoggingContext,
};
pub use error::{LoggingError, LoggingResult};
pub use handle::{ModuleHandle, ModuleHandleCache};
pub use level::Level;
pub use pool::LevelLoggerPool;
pub use registry::{LevelRegistry, ROOT_MODULE};
pub use sink::{Logger, LoggerFactory, LoggerOption, SinkFactory};
