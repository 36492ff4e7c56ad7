use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use market_core::settings::APP_DIR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name used when `--log-file` is not given.
const DEFAULT_LOG_FILE: &str = "luxe-market.log";

fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure `~/.luxe-market/` and its `logs/` subdirectory exist, creating
/// any missing parents.
pub fn ensure_directories() -> anyhow::Result<PathBuf> {
    let dir = app_dir();
    std::fs::create_dir_all(dir.join("logs"))?;
    Ok(dir)
}

/// Where log output goes: `log_file` if given, else the default log under
/// `app_dir`.
pub fn log_path(app_dir: &Path, log_file: Option<&PathBuf>) -> PathBuf {
    log_file
        .cloned()
        .unwrap_or_else(|| app_dir.join("logs").join(DEFAULT_LOG_FILE))
}

/// Map a `--log-level` name to an [`EnvFilter`] directive.
pub fn filter_directive(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_lowercase(),
    }
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber, appending to `path`.
///
/// The terminal belongs to the TUI, so nothing is written to stdout or
/// stderr. Unrecognised levels fall back to `"info"`.
pub fn setup_logging(log_level: &str, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_new(filter_directive(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry().with(filter).with(layer).init();

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
