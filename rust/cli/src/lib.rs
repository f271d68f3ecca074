//! # shortstack CLI Library
//!
//! Command-line front end for the shortstack engine: an interactive table
//! against personality-driven bots plus bot-only simulation, a single-hand
//! deal, policy evaluation and configuration display.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to the subcommand handler and
//! returns the process exit code.
//!
//! ```
//! use std::io;
//! let args = vec!["shortstack", "deal", "--seed", "42"];
//! let code = shortstack_cli::run(args, &mut io::sink(), &mut io::sink());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play against the bot roster on stdin
//! - `sim`: Bot-only session with an optional JSONL hand history
//! - `deal`: Deal one hand to showdown
//! - `eval`: Measure a bot policy against a passive seat
//! - `cfg`: Display the resolved configuration

use std::io::{BufRead, Write};

use clap::Parser;

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, ShortstackCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
    handle_sim_command,
};
pub use error::CliError;
use error::{EXIT_ERROR, EXIT_SUCCESS};

const COMMANDS: &[&str] = &["play", "sim", "deal", "eval", "cfg"];

/// Runs the CLI with stdin as the human seat's input.
///
/// Exit code: `0` for success, `2` for errors, `130` when the human quits
/// mid-hand.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    run_with_input(args, &mut input, out, err)
}

/// [`run`] with an injected input stream.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ShortstackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage(&e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play { table, hands } => handle_play_command(&table, hands, input, out),
        Commands::Sim {
            table,
            hands,
            output,
        } => handle_sim_command(&table, hands, output.as_deref(), out),
        Commands::Deal { table } => handle_deal_command(&table, out),
        Commands::Eval { table, hands, ai } => handle_eval_command(&table, hands, &ai, out),
        Commands::Cfg { table } => handle_cfg_command(&table, out),
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e @ CliError::Interrupted(_)) => {
            let _ = writeln!(err, "{}", e);
            e.exit_code()
        }
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            e.exit_code()
        }
    }
}

fn report_usage(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => EXIT_SUCCESS,
            Err(_) => EXIT_ERROR,
        };
    }
    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Usage: shortstack <command> [options]\n\nCommands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: shortstack --help");
    EXIT_ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_list_matches_subcommands() {
        let cmd = ShortstackCli::command();
        let mut names: Vec<&str> = cmd.get_subcommands().map(|c| c.get_name()).collect();
        names.sort_unstable();
        let mut listed = COMMANDS.to_vec();
        listed.sort_unstable();
        assert_eq!(names, listed);
    }

    #[test]
    fn clap_definition_is_consistent() {
        ShortstackCli::command().debug_assert();
    }
}
