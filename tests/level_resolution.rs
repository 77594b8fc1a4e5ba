//! End-to-end level resolution against a real configuration snapshot.

mod common;

use std::fs;
use std::sync::Arc;

use modlog::{Level, LoggingContext};

use common::{config_from_toml, quiet_config};

const SCENARIO: &str = r#"
[logging.level]
"module1.child1" = "DEBUG"
module2 = "ERROR"
"#;

#[test]
fn resolves_configured_hierarchy() {
    let context = LoggingContext::new();
    context
        .init_from_config(&quiet_config(SCENARIO), &[])
        .unwrap();

    assert_eq!(context.resolve_level("test"), Level::Info);
    assert_eq!(context.resolve_level("module1.child1"), Level::Debug);
    assert_eq!(context.resolve_level("module1.child1.child"), Level::Debug);
    assert_eq!(context.resolve_level("module"), Level::Info);
    assert_eq!(context.resolve_level("module2"), Level::Error);
}

#[test]
fn handles_enforce_resolved_levels() {
    let context = LoggingContext::new();
    context
        .init_from_config(&quiet_config(SCENARIO), &[])
        .unwrap();

    let root_ish = context.handle("test");
    assert!(root_ish.enabled(Level::Info));
    assert!(!root_ish.enabled(Level::Debug));

    let verbose = context.handle("module1.child1");
    assert!(verbose.enabled(Level::Debug));

    let inherited = context.handle("module1.child1.child");
    assert!(inherited.enabled(Level::Debug));

    let quiet = context.handle("module2");
    assert!(quiet.enabled(Level::Error));
    assert!(!quiet.enabled(Level::Warn));
}

#[test]
fn repeated_requests_return_the_same_handle() {
    let context = LoggingContext::new();
    context
        .init_from_config(&quiet_config(SCENARIO), &[])
        .unwrap();

    let first = context.handle("module2");
    let second = context.handle("module2");
    assert!(Arc::ptr_eq(&first, &second));

    // Unconfigured module inherits root but gets its own handle.
    let other = context.handle("module3");
    assert!(!Arc::ptr_eq(&first, &other));
    assert_eq!(other.logger().min_level(), Level::Info);
}

#[test]
fn records_reach_the_configured_file_sink() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let config = config_from_toml(&format!(
        r#"
[logging.level]
"module1.child1" = "DEBUG"
module2 = "ERROR"

[logging.output.file]
path = "{}"
async = false
"#,
        path.display()
    ));

    let context = LoggingContext::new();
    context.init_from_config(&config, &[]).unwrap();

    let verbose = context.handle("module1.child1");
    verbose.debug("debug must show");

    let quiet = context.handle("module2");
    quiet.warn("warn must hide");
    quiet.error("error must show");

    let root_ish = context.handle("test");
    root_ish.info("info must show");
    root_ish.debug("debug must hide");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("debug must show"));
    assert!(content.contains("error must show"));
    assert!(content.contains("info must show"));
    assert!(!content.contains("warn must hide"));
    assert!(!content.contains("debug must hide"));

    // Records are JSON objects carrying module and level.
    let first: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(first["module"], "module1.child1");
    assert_eq!(first["level"], "debug");
}

#[test]
fn global_context_hands_out_stable_handles() {
    let first = modlog::get_handle("integration.global");
    let second = modlog::get_handle("integration.global");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(modlog::resolve_level("integration.global"), Level::Info);
    assert_eq!(modlog::default_logger().min_level(), Level::Info);
}
