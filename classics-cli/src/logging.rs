//! Structured logging setup for the `classics` binary.
//!
//! Diagnostics go to stderr so demo output and JSON documents on stdout stay
//! clean. `RUST_LOG` selects the level (default `info`) and
//! `CLASSICS_LOG_FORMAT` selects `human` or `json` lines.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "CLASSICS_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// Output format of the stderr log layer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Plain human-readable lines.
    #[default]
    Human,
    /// One JSON object per line, including the current span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

impl LogFormat {
    fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }
}

/// Errors raised while setting up logging.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoggingError {
    /// An environment variable held bytes that are not UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Offending variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `CLASSICS_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Value supplied by the user, lowercased.
        provided: String,
    },
}

/// Installs the global subscriber once and returns the active format.
///
/// Later calls return the format chosen by the first call. If another
/// subscriber already owns the global slot it is left in place.
///
/// # Errors
/// Returns [`LoggingError`] when `CLASSICS_LOG_FORMAT` is not valid UTF-8 or
/// names an unsupported format.
pub fn init_logging() -> Result<LogFormat, LoggingError> {
    if let Some(format) = INSTALLED.get() {
        return Ok(*format);
    }

    let format = LogFormat::from_env()?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let layer = match format {
        LogFormat::Human => layer.boxed(),
        LogFormat::Json => layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // Both installs fail only when a logger is already present; keep it.
    let _ = LogTracer::init();
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();

    Ok(*INSTALLED.get_or_init(|| format))
}
