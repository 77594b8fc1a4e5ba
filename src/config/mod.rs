//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, [logging] table)
//!     → loader.rs (parse & deserialize)
//!     → LoggingConfig (defaults applied by serde)
//!     → LoggingContext::init_from_config (interpretation)
//! ```
//!
//! # Design Decisions
//! - Absent keys receive defaults at deserialization time: root level INFO,
//!   JSON encoding, asynchronous console output
//! - `logging.level` is polymorphic: a single level string applies to the
//!   root module, a table maps module names to level strings
//! - Level strings stay strings in the schema; parsing them is part of
//!   configuration interpretation so that bad values fail initialization

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ConsoleOutput, EncoderOverrides, Encoding, FileOutput, LevelSpec, LoggingConfig, OutputConfig,
};
