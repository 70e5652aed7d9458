//! Look up a single part number

use std::process::ExitCode;

use partlookup::config::LookupConfig;
use partlookup::output::{LookupReport, OutputMode};

/// Run the full pipeline for `part` and render the result
pub async fn lookup(
    config: &LookupConfig,
    part: &str,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let result = config.orchestrator().lookup(part).await;

    let report = LookupReport::from_result(&result);
    report.render(mode);
    Ok(ExitCode::from(report.exit_code()))
}
