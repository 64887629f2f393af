use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Interactive explorer for US bikeshare trip data
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bikeshare",
    about = "Interactive explorer for US bikeshare trip data",
    version
)]
pub struct Settings {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, env = "BIKESHARE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Logging level
    #[arg(
        long,
        default_value = "WARNING",
        value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]
    )]
    pub log_level: String,

    /// Log file path (logs go to stderr when absent)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::load_from(std::env::args_os())
    }

    /// Same as [`Settings::load`] but with an explicit argument list.
    pub fn load_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut settings = Settings::parse_from(args);
        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
