//! Hierarchical level registry.
//!
//! # Responsibilities
//! - Map dot-separated module names to verbosity levels
//! - Resolve a module to its level by longest-matching-prefix
//! - Guarantee a root entry so resolution is total
//!
//! # Design Decisions
//! - Concurrent map, no snapshot isolation: a lookup racing a `set_level`
//!   may observe a partially updated registry, which is acceptable because
//!   wholesale rebuilds happen under the init gate and steady-state level
//!   changes are rare administrative operations
//! - An exact match short-circuits the scan: it is at least as long as any
//!   proper-prefix match, so it is optimal no matter when the unordered
//!   iteration encounters it

use dashmap::DashMap;

use crate::level::Level;

/// Name of the fallback module every unmatched lookup resolves through.
pub const ROOT_MODULE: &str = "root";

/// Registry of module name → level with hierarchical resolution.
pub struct LevelRegistry {
    levels: DashMap<String, Level>,
}

impl LevelRegistry {
    /// Create a registry seeded with the root entry at INFO.
    pub fn new() -> Self {
        let registry = Self {
            levels: DashMap::new(),
        };
        registry.levels.insert(ROOT_MODULE.to_string(), Level::Info);
        registry
    }

    /// Insert or overwrite the entry for `module`.
    pub fn set_level(&self, module: impl Into<String>, level: Level) {
        self.levels.insert(module.into(), level);
    }

    /// Whether an entry exists for exactly `module`.
    pub fn contains(&self, module: &str) -> bool {
        self.levels.contains_key(module)
    }

    /// The level of the root entry.
    pub fn root_level(&self) -> Level {
        self.levels
            .get(ROOT_MODULE)
            .map(|entry| *entry.value())
            .unwrap_or(Level::Info)
    }

    /// Resolve `module` to a level by longest-matching-prefix.
    ///
    /// An entry matches if it equals `module` or if `module` starts with the
    /// entry followed by a dot. The longest match wins; with no match the
    /// root level applies. Total: never fails.
    pub fn resolve(&self, module: &str) -> Level {
        let mut best_len = 0;
        let mut best: Option<Level> = None;
        for entry in self.levels.iter() {
            let key = entry.key().as_str();
            if key == module {
                return *entry.value();
            }
            if is_parent(key, module) && key.len() > best_len {
                best_len = key.len();
                best = Some(*entry.value());
            }
        }
        best.unwrap_or_else(|| self.root_level())
    }

    /// Drop every entry and re-seed the root at INFO.
    pub(crate) fn reset(&self) {
        self.levels.clear();
        self.levels.insert(ROOT_MODULE.to_string(), Level::Info);
    }

    /// Number of entries, root included.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// True if `key` is a proper hierarchical prefix of `module`.
fn is_parent(key: &str, module: &str) -> bool {
    module.len() > key.len()
        && module.as_bytes()[key.len()] == b'.'
        && module.starts_with(key)
}
