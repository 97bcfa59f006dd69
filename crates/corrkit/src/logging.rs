//! Stderr diagnostics for the corrkit binary.
//!
//! Decoded records go to stdout; everything tracing emits goes to
//! stderr so piped output stays machine-readable. The `CORRKIT_LOG`
//! environment variable overrides `--log-level`, letting batch
//! invocations inside pipelines be quieted or turned verbose without
//! editing the command line.

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

/// Environment variable overriding the `--log-level` flag.
pub const LOG_LEVEL_ENV: &str = "CORRKIT_LOG";

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }

    fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Level in effect for this invocation.
///
/// A parseable `CORRKIT_LOG` value wins over the flag; an unset or
/// unrecognized value falls back to it.
pub fn effective_level(flag: LogLevel) -> LogLevel {
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value))
        .unwrap_or(flag)
}

pub fn init_logging(format: LogFormat, level: LogLevel) {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(effective_level(level).as_filter())
        .with_ansi(false)
        .with_target(false);

    match format {
        LogFormat::Text => {
            let _ = builder.try_init();
        }
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
    }
}
