//! Tests for logging functionality
//!
//! Only one global subscriber can be installed per process, so these tests
//! check that initialization never panics rather than inspecting output.

use classplot::core::logging::{init_default_logging, init_logging, LogFormat};
use classplot::prelude::*;
use std::str::FromStr;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert_eq!(LogFormat::from_str("COMPACT").unwrap(), LogFormat::Compact);
    assert!(LogFormat::from_str("invalid").is_err());
}

#[test]
fn test_log_format_variants() {
    let variants = LogFormat::variants();
    assert_eq!(variants, &["compact", "pretty", "json"]);
}

#[test]
fn test_init_logging_with_levels() {
    let _ = init_logging(Some("trace"), Some("compact"));
    let _ = init_logging(Some("debug"), Some("compact"));
    let _ = init_logging(Some("warn"), Some("compact"));
    let _ = init_logging(Some("off"), Some("compact"));
    let _ = init_logging(Some("classplot::compiler=trace"), Some("compact"));
}

#[test]
fn test_init_logging_with_formats() {
    let _ = init_logging(Some("info"), Some("pretty"));
    let _ = init_logging(Some("info"), Some("json"));
    let _ = init_default_logging();
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}

#[test]
fn test_compile_and_render_with_logging_enabled() {
    let _ = init_logging(Some("trace"), Some("compact"));

    let mut realm = Realm::new();
    let scope = realm.add_object();
    let class = realm.add_class(ClassDef::new().method("run", "function(a) {}"));
    realm.set_entry(scope, "Job", class).unwrap();
    let stray = realm.add_class(ClassDef::new().extends(class));

    let mut compiler = Compiler::with_roots(&realm, [stray], [("Jobs", scope)]).unwrap();
    let output = compiler.render().unwrap();
    assert!(output.contains("class Anonymous1 extends Jobs.Job {"));
}
