//! Structured logging for the compile and emit pipeline
//!
//! Logging goes through `tracing`. Native builds install a
//! `tracing-subscriber` registry; wasm32 builds forward events to the
//! browser console through `tracing-wasm`.
//!
//! # Usage
//!
//! ```rust
//! use classplot::core::logging::init_logging;
//!
//! // Defaults: level from the environment or `info`, compact output
//! let _ = init_logging(None, None);
//! ```
//!
//! # Environment Variables
//!
//! - `CLASSPLOT_LOG_LEVEL`: level or filter directive (trace|debug|info|warn|error|off)
//! - `CLASSPLOT_LOG_FORMAT`: output format (compact|pretty|json)
//! - `RUST_LOG`: standard `tracing-subscriber` filter, used when no level is given
//!
//! # Filtering
//!
//! ```bash
//! # Trace name resolution only
//! RUST_LOG="classplot::compiler::resolver=trace" classplot render -i model.json
//!
//! # Dump the rendered diagram through the debug channel
//! RUST_LOG="info,classplot::compiler::emitter=debug" classplot render -i model.json
//! ```

use std::str::FromStr;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

#[cfg(target_arch = "wasm32")]
use tracing_wasm::WASMLayerConfig;

const LEVEL_VAR: &str = "CLASSPLOT_LOG_LEVEL";
const FORMAT_VAR: &str = "CLASSPLOT_LOG_FORMAT";

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Multi-line format with source locations
    Pretty,
    /// JSON lines for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Pick the explicit value, then the first set environment variable, then the fallback.
fn resolve_setting(explicit: Option<&str>, vars: &[&str], fallback: &str) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| vars.iter().find_map(|var| std::env::var(var).ok()))
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn build_filter(level: &str) -> EnvFilter {
    if level == "off" {
        return EnvFilter::new("off");
    }
    EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber
///
/// * `level` - filter directive; falls back to `CLASSPLOT_LOG_LEVEL`, then
///   `RUST_LOG`, then `info`.
/// * `format` - `compact`, `pretty` or `json`; falls back to
///   `CLASSPLOT_LOG_FORMAT`, then `compact`.
///
/// Fails on an unknown format or when a global subscriber is already set.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_format = resolve_setting(format, &[FORMAT_VAR], "compact");
    let format =
        LogFormat::from_str(&log_format).map_err(|e| format!("Invalid log format: {}", e))?;

    #[cfg(target_arch = "wasm32")]
    {
        // tracing-wasm has no level filter; the console decides what to show
        let _ = (level, format);
        tracing_wasm::set_as_global_default_with_config(WASMLayerConfig::default());
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let log_level = resolve_setting(level, &[LEVEL_VAR, "RUST_LOG"], "info");
        let filter = build_filter(&log_level);

        match format {
            LogFormat::Compact => {
                Registry::default()
                    .with(filter)
                    .with(
                        fmt::Layer::default()
                            .with_writer(std::io::stderr)
                            .with_target(false)
                            .with_level(true)
                            .with_span_events(FmtSpan::NONE),
                    )
                    .try_init()?;
            }
            LogFormat::Pretty => {
                Registry::default()
                    .with(filter)
                    .with(
                        fmt::Layer::default()
                            .with_writer(std::io::stderr)
                            .with_target(true)
                            .with_file(true)
                            .with_line_number(true)
                            .with_span_events(FmtSpan::ACTIVE)
                            .pretty(),
                    )
                    .try_init()?;
            }
            LogFormat::Json => {
                Registry::default()
                    .with(filter)
                    .with(
                        fmt::Layer::default()
                            .with_writer(std::io::stderr)
                            .with_target(true)
                            .with_file(true)
                            .with_line_number(true)
                            .with_span_events(FmtSpan::ACTIVE)
                            .json(),
                    )
                    .try_init()?;
            }
        }

        Ok(())
    }
}

/// Initialize logging with default settings (info level, compact format)
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}
