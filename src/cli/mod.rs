// src/cli/mod.rs
use clap::Parser;

use crate::core::config::parse_max_attempts;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::{CliCommand, GenerateArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random passwords and score their strength", long_about = None)]
pub struct Args {
    /// Use JSON for output
    #[arg(long, global = true)]
    pub json: bool,

    /// Maximum generation attempts before giving up (overrides MAX_GENERATION_ATTEMPTS)
    #[arg(long, global = true, value_parser = parse_max_attempts)]
    pub max_attempts: Option<usize>,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let args = Args::try_parse_from([
            "rust_passgen", "generate", "--no-special", "--extended",
            "--length", "6", "--parts", "4", "--delimiter", ".", "--count", "2", "--seed", "9", "--json",
        ])
        .unwrap();

        assert!(args.json);
        match args.command {
            Some(CliCommand::Generate(generate)) => {
                assert!(generate.no_special);
                assert!(generate.extended);
                assert_eq!(generate.length, Some(6));
                assert_eq!(generate.parts, Some(4));
                assert_eq!(generate.delimiter.as_deref(), Some("."));
                assert_eq!(generate.count, 2);
                assert_eq!(generate.seed, Some(9));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_score() {
        let args = Args::try_parse_from(["rust_passgen", "score", "hunter2"]).unwrap();
        match args.command {
            Some(CliCommand::Score { password }) => assert_eq!(password, "hunter2"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_max_attempts_flag() {
        let args = Args::try_parse_from(["rust_passgen", "--max-attempts", "50", "score", "x"]).unwrap();
        assert_eq!(args.max_attempts, Some(50));

        assert!(Args::try_parse_from(["rust_passgen", "--max-attempts", "0", "score", "x"]).is_err());
        assert!(Args::try_parse_from(["rust_passgen", "--max-attempts", "lots", "score", "x"]).is_err());
    }

    #[test]
    fn test_extended_flags_conflict() {
        let result = Args::try_parse_from(["rust_passgen", "generate", "--extended", "--no-extended"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_command_means_menu() {
        let args = Args::try_parse_from(["rust_passgen"]).unwrap();
        assert!(args.command.is_none());
    }
}
