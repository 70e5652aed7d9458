//! Check part number format without touching any source

use std::process::ExitCode;

use partlookup::core::services::validate as validate_part;
use partlookup::output::{OutputMode, ValidateReport};

/// Validate `part` and print its normalized and display forms
pub fn validate(part: &str, mode: OutputMode) -> ExitCode {
    let result = validate_part(part);
    ValidateReport::from_result(&result).render(mode);

    if result.is_ok() { ExitCode::SUCCESS } else { ExitCode::from(2) }
}
