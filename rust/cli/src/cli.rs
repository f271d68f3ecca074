//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "shortstack",
    version,
    about = "Short-stack Texas Hold'em against personality-driven bots"
)]
pub struct ShortstackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Table options shared by every command. Unset flags fall back to the
/// environment, the config file and then the defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Base seed; hand `i` is dealt from `seed + i`
    #[arg(long)]
    pub seed: Option<u64>,
    /// Starting chips per player
    #[arg(long)]
    pub stack: Option<u32>,
    /// Number of bot opponents
    #[arg(long)]
    pub bots: Option<usize>,
}

impl TableArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            seed: self.seed,
            starting_stack: self.stack,
            bots: self.bots,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play against the bot roster, reading actions from stdin
    Play {
        #[command(flatten)]
        table: TableArgs,
        /// Stop after this many hands (default: until the game is over)
        #[arg(long)]
        hands: Option<u32>,
    },
    /// Play bots against each other
    Sim {
        #[command(flatten)]
        table: TableArgs,
        #[arg(long, default_value_t = 100)]
        hands: u32,
        /// Write a JSONL hand history
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Deal one hand to showdown and show every seat's best hand
    Deal {
        #[command(flatten)]
        table: TableArgs,
    },
    /// Measure a bot policy against a passive reference seat
    Eval {
        #[command(flatten)]
        table: TableArgs,
        #[arg(long, default_value_t = 100)]
        hands: u32,
        /// Policy for the roster seats
        #[arg(long, default_value = "heuristic")]
        ai: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg {
        #[command(flatten)]
        table: TableArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subcommand_parses() {
        for argv in [
            vec!["shortstack", "play"],
            vec!["shortstack", "play", "--hands", "3", "--seed", "7"],
            vec!["shortstack", "sim", "--hands", "5", "--output", "h.jsonl"],
            vec!["shortstack", "deal", "--bots", "2"],
            vec!["shortstack", "eval", "--ai", "passive"],
            vec!["shortstack", "cfg", "--stack", "50"],
        ] {
            assert!(ShortstackCli::try_parse_from(&argv).is_ok(), "{argv:?}");
        }
    }

    #[test]
    fn table_flags_become_overrides() {
        let cli = ShortstackCli::try_parse_from([
            "shortstack", "sim", "--seed", "9", "--stack", "40", "--bots", "3",
        ])
        .unwrap();
        let Commands::Sim { table, hands, output } = cli.cmd else {
            panic!("expected sim");
        };
        assert_eq!(hands, 100);
        assert!(output.is_none());
        assert_eq!(
            table.overrides(),
            Overrides {
                seed: Some(9),
                starting_stack: Some(40),
                bots: Some(3),
            }
        );
    }

    #[test]
    fn rejects_negative_seed() {
        assert!(ShortstackCli::try_parse_from(["shortstack", "deal", "--seed", "-1"]).is_err());
    }
}
