//! Tracing subscriber setup.
//!
//! Two JSON sinks share one registry:
//!
//! 1. **Console** - stdout, read by the APM agent, filtered by `RUST_LOG` or the
//!    configured APM log level
//! 2. **File** - `<LOG_DIR>/application-YYYY-MM-DD.log`, `info` and above

use tracing::Subscriber;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::server::{
    config::Config, error::AppError, observability::file_writer::RollingFileWriter,
};

const LOG_FILE_PREFIX: &str = "application";
const FALLBACK_LEVEL: &str = "info";

/// Installs the global subscriber with the console and file sinks.
///
/// # Errors
/// - `AppError::IoErr` - Log directory could not be created
/// - `AppError::LoggingErr` - A global subscriber is already installed
pub fn init_tracing(config: &Config) -> Result<(), AppError> {
    let file_writer = RollingFileWriter::new(
        &config.log_dir,
        LOG_FILE_PREFIX,
        config.log_retention_days,
    )?;

    subscriber(
        std::io::stdout,
        console_filter(&config.apm.log_level),
        file_writer,
    )
    .try_init()?;

    if config.apm.license_key.is_empty() {
        tracing::warn!(
            app = %config.apm.app_name,
            "APM_LICENSE_KEY is not set, console records will not be attributed to an account"
        );
    }

    tracing::info!(
        log_dir = %config.log_dir.display(),
        retention_days = config.log_retention_days,
        "Logging initialized"
    );

    Ok(())
}

/// Builds the registry with both JSON sinks over the given writers.
///
/// Events are flattened and carry the current span; the file sink keeps
/// `info` and above regardless of the console filter.
pub(crate) fn subscriber<C, F>(
    console_writer: C,
    console_filter: EnvFilter,
    file_writer: F,
) -> impl Subscriber + Send + Sync + 'static
where
    C: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    F: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let console = fmt::layer()
        .json()
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_writer(console_writer)
        .with_filter(console_filter);

    let file = fmt::layer()
        .json()
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_ansi(false)
        .with_writer(file_writer)
        .with_filter(LevelFilter::INFO);

    tracing_subscriber::registry().with(console).with(file)
}

/// `RUST_LOG` wins over the configured level; an unparsable level falls back to `info`.
fn console_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}
