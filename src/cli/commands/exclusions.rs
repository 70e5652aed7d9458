//! List the exclusion registry

use std::process::ExitCode;
use std::sync::Arc;

use log::error;
use partlookup::adapters::JsonFileRegistry;
use partlookup::config::LookupConfig;
use partlookup::core::services::{ExclusionChecker, GENERIC_FAILURE_MESSAGE, LookupError};
use partlookup::output::{ExclusionListReport, OutputMode};

/// Load a registry snapshot and print it
pub async fn exclusions(config: &LookupConfig, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let registry = JsonFileRegistry::new(config.registry.path.clone());
    let checker = ExclusionChecker::new(Arc::new(registry)).with_timeout(config.timeout());

    match checker.load_registry().await {
        Ok(exclusions) => {
            ExclusionListReport { exclusions }.render(mode);
            Ok(ExitCode::SUCCESS)
        },
        Err(err) => {
            error!("{}", LookupError::from(err).detail());
            if mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "error": GENERIC_FAILURE_MESSAGE }));
            } else {
                println!("{GENERIC_FAILURE_MESSAGE}");
            }
            Ok(ExitCode::FAILURE)
        },
    }
}
