//! Module handles and the handle cache.
//!
//! # Responsibilities
//! - Hand out one long-lived handle per module name
//! - Keep handle identity stable across reconfiguration
//! - Let refresh swap a handle's underlying logger without touching the
//!   references callers already hold
//!
//! # Design Decisions
//! - A handle is an indirection cell (`ArcSwap<Logger>`): readers load the
//!   target at call time, refresh stores through it
//! - Cache entries are never removed; the cache lives as long as its context
//! - The miss path takes no lock across resolve → fetch → store. Two
//!   concurrent first-requests for a module may each build a handle; the
//!   later store wins, which is benign because both handles are
//!   behaviorally equivalent at that instant

use std::sync::Arc;

use arc_swap::ArcSwap;
use dashmap::DashMap;

use crate::level::Level;
use crate::sink::logger::Logger;

/// A stable, long-lived logging handle for one module.
///
/// Callers hold the handle, not the logger: reconfiguration retargets the
/// handle in place and every held reference observes the new configuration
/// on its next use.
pub struct ModuleHandle {
    module: String,
    target: ArcSwap<Logger>,
}

impl ModuleHandle {
    pub(crate) fn new(module: String, logger: Arc<Logger>) -> Self {
        Self {
            module,
            target: ArcSwap::from(logger),
        }
    }

    /// The module name this handle was issued for.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// The logger currently behind this handle.
    pub fn logger(&self) -> Arc<Logger> {
        self.target.load_full()
    }

    /// Swap the underlying logger in place.
    pub(crate) fn retarget(&self, logger: Arc<Logger>) {
        self.target.store(logger);
    }

    /// Whether a record at `level` would currently be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        self.target.load().enabled(level)
    }

    /// Emit a record through the current target.
    pub fn log(&self, level: Level, message: &str) {
        self.target.load().log(level, &self.module, message);
    }

    /// Emit a record with extra key/value pairs.
    pub fn log_kv(&self, level: Level, message: &str, extra: &[(&str, &str)]) {
        self.target.load().log_kv(level, &self.module, message, extra);
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}

/// Cache of module name → handle, lazily populated, never pruned.
pub struct ModuleHandleCache {
    handles: DashMap<String, Arc<ModuleHandle>>,
}

impl ModuleHandleCache {
    pub fn new() -> Self {
        Self {
            handles: DashMap::new(),
        }
    }

    /// The cached handle for `module`, if one was ever issued.
    pub fn get(&self, module: &str) -> Option<Arc<ModuleHandle>> {
        self.handles.get(module).map(|entry| Arc::clone(entry.value()))
    }

    /// Store a freshly built handle, keyed by its module name. Last writer
    /// wins if two builders race.
    pub(crate) fn insert(&self, handle: Arc<ModuleHandle>) {
        self.handles.insert(handle.module().to_string(), handle);
    }

    /// Visit every cached handle.
    pub(crate) fn for_each(&self, mut visit: impl FnMut(&ModuleHandle)) {
        for entry in self.handles.iter() {
            visit(entry.value());
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Default for ModuleHandleCache {
    fn default() -> Self {
        Self::new()
    }
}
