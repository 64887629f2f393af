mod bootstrap;
mod prompt;
mod report;
mod session;

use std::path::Path;

use anyhow::Result;
use bikeshare_core::settings::Settings;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("bikeshare v{} starting", env!("CARGO_PKG_VERSION"));

    let data_dir = settings
        .data_dir
        .clone()
        .unwrap_or_else(|| bootstrap::discover_data_dir(Path::new(".")));
    tracing::info!("Reading city data from {}", data_dir.display());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::run(&data_dir, stdin.lock(), stdout.lock())
}
