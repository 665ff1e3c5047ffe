//! Profile validation command

use anyhow::Result;
use washout_config::{load_config_file, parse_filter_string, save_config_file};
use washout_engine::calculate_config_hash;

use crate::commands::CheckArgs;
use crate::error::CliError;
use crate::output;

/// Load a profile, report what was accepted, optionally write it back.
pub fn execute(args: &CheckArgs, json: bool) -> Result<()> {
    let report = match (&args.config, &args.filter) {
        (Some(path), _) => load_config_file(path).map_err(CliError::from)?,
        (None, Some(spec)) => parse_filter_string(spec).map_err(CliError::from)?,
        (None, None) => return Err(CliError::Config(washout_config::LoadError::MissingActive).into()),
    };

    let config_hash = calculate_config_hash(&report.config);
    output::print_check_report(&report, config_hash, json);

    if let Some(path) = &args.write {
        save_config_file(path, &report.config, &report.metadata).map_err(CliError::from)?;
    }

    if args.strict && !report.is_clean() {
        return Err(CliError::StrictWarnings {
            count: report.warnings.len(),
        }
        .into());
    }
    Ok(())
}
