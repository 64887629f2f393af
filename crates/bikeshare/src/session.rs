use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Context;
use bikeshare_data::analysis::load_data;
use tracing::info;

use crate::prompt::Prompter;
use crate::report;

/// Run the collect → load → report loop until the user declines a restart.
///
/// Any load or statistics failure ends the session with an error; nothing is
/// retried.
pub fn run<R: BufRead, W: Write>(data_dir: &Path, input: R, output: W) -> anyhow::Result<()> {
    let mut prompter = Prompter::new(input, output);
    let mut runs = 0u32;

    loop {
        let selection = prompter
            .get_filters()
            .context("Failed to read filter selection")?;
        runs += 1;
        info!(
            "Run {}: city={} month={} day={} raw={}",
            runs,
            selection.city,
            selection.month.token(),
            selection.day.token(),
            selection.show_raw
        );

        let table = load_data(data_dir, &selection, prompter.output()).with_context(|| {
            format!("Failed to load {} data", selection.city.display_name())
        })?;

        report::print_all(prompter.output(), &table).with_context(|| {
            format!(
                "Failed to compute statistics for {} (month={}, day={})",
                selection.city.display_name(),
                selection.month.token(),
                selection.day.token()
            )
        })?;

        if !prompter.ask_restart()? {
            break;
        }
    }

    info!("Session finished after {} run(s)", runs);
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
