//! `cfg`: the resolved configuration with the source of every value.
//!
//! ```json
//! {
//!   "starting_stack": { "value": 100, "source": "default" },
//!   "bots": { "value": 3, "source": "env" },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::cli::TableArgs;
use crate::config::{self, ConfigResolved};
use crate::error::CliError;

pub fn handle_cfg_command(table: &TableArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = config::load_with_sources(&table.overrides())?;
    let display = serde_json::json!({
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "small_blind": {
            "value": config.small_blind,
            "source": sources.small_blind,
        },
        "big_blind": {
            "value": config.big_blind,
            "source": sources.big_blind,
        },
        "bots": {
            "value": config.bots,
            "source": sources.bots,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "human_name": {
            "value": config.human_name,
            "source": sources.human_name,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
