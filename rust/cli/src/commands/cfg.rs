//! Configuration command handler: prints the resolved settings with the
//! source each value came from (default, file, or environment).

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_bankroll": {
            "value": config.starting_bankroll,
            "source": sources.starting_bankroll
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed
        },
        "log_path": {
            "value": config.log_path,
            "source": sources.log_path
        }
    });
    let pretty =
        serde_json::to_string_pretty(&display).map_err(|e| CliError::Config(e.to_string()))?;
    writeln!(out, "{}", pretty)?;
    Ok(())
}
