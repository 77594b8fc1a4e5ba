//! Sink layer: the writer/encoder pipeline behind every logger.
//!
//! # Data Flow
//! ```text
//! LoggingConfig
//!     → factory.rs (build shared encoder + writers once)
//!     → logger.rs  (per-level Logger over the shared pipeline)
//!         → encoder.rs (record → line, JSON or text)
//!         → writer.rs  (line → console/file, sync or background thread)
//! ```
//!
//! # Design Decisions
//! - The encoder and writers are built once per configuration snapshot and
//!   shared by every per-level logger stamped from them
//! - Sink construction is the only I/O during initialization and its
//!   failure is fatal
//! - Emitting never fails: write errors are swallowed, a logger must not
//!   take the process down

pub mod encoder;
pub mod factory;
pub mod logfile;
pub mod logger;
pub mod writer;

pub use encoder::Encoder;
pub use factory::{LoggerFactory, LoggerOption, SinkFactory};
pub use logfile::open_log_file;
pub use logger::Logger;
pub use writer::{LineWriter, MultiWriter};
