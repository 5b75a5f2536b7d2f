use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "info";
pub const LOG_FILE: &str = "spring-widgets.log";

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Logs to stderr for the one-shot CLI commands. Idempotent.
pub fn init_stderr_logging() {
    LOGGING_INITIALIZED.get_or_init(|| {
        let _ = fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Logs to `dir/spring-widgets.log` so output never lands on the alternate screen.
///
/// The returned guard flushes the writer when dropped; keep it alive for the
/// lifetime of the TUI. Returns `None` if logging was already initialized.
pub fn init_file_logging(dir: &Path) -> Result<Option<WorkerGuard>> {
    if LOGGING_INITIALIZED.get().is_some() {
        return Ok(None);
    }
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create log dir {}", dir.display()))?;
    let file = std::fs::File::create(dir.join(LOG_FILE))
        .with_context(|| format!("Failed to create log file in {}", dir.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    LOGGING_INITIALIZED.get_or_init(|| {
        let _ = fmt()
            .with_env_filter(env_filter())
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .try_init();
    });
    Ok(Some(guard))
}
