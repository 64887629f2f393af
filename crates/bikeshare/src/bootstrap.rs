use anyhow::Context;
use bikeshare_core::models::City;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a Python-style level name to a `tracing` filter directive.
///
/// Unknown names pass through unchanged so that full `EnvFilter` directives
/// (e.g. `bikeshare_data=debug`) also work.
fn level_directive(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_string(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Events go to stderr, or only to `log_file` when one is given so that log
/// lines never interleave with the interactive prompts. Falls back to `warn`
/// if the level string is not a valid filter.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(level_directive(log_level)).unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };
    let stderr_layer = file_layer.is_none().then(|| {
        fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

// ── Data-path discovery ────────────────────────────────────────────────────────

/// Locate the directory holding the city CSV files.
///
/// Checks the following paths in order and returns the first that contains
/// at least one city file:
/// 1. `base`
/// 2. `base/data`
///
/// Falls back to `base` so that the load step reports the missing file.
pub fn discover_data_dir(base: &Path) -> PathBuf {
    let candidates = [base.to_path_buf(), base.join("data")];
    candidates
        .iter()
        .find(|dir| City::all().iter().any(|c| dir.join(c.file_name()).is_file()))
        .cloned()
        .unwrap_or_else(|| base.to_path_buf())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
