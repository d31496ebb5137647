// src/cli/commands.rs
use clap::{Args, Subcommand};

use crate::core::config::Config;
use crate::models::{PartsOptions, PasswordGenerationOptions};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Score the strength of a password
    Score {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Interactive generator
    Menu,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out special characters
    #[arg(long)]
    pub no_special: bool,

    /// Include extended (Latin-1) characters
    #[arg(long)]
    pub extended: bool,

    /// Leave out extended characters even when enabled by default
    #[arg(long, conflicts_with = "extended")]
    pub no_extended: bool,

    /// Characters per part
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Number of parts
    #[arg(long, short)]
    pub parts: Option<usize>,

    /// Separator placed between parts
    #[arg(long, short)]
    pub delimiter: Option<String>,

    /// How many passwords to generate
    #[arg(long, short, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    // Flags override the configured defaults
    pub fn to_options(&self, config: &Config) -> PasswordGenerationOptions {
        let defaults = config.default_options();
        PasswordGenerationOptions {
            lowercase: !self.no_lowercase,
            uppercase: !self.no_uppercase,
            numbers: !self.no_numbers,
            special: !self.no_special,
            extended: match (self.extended, self.no_extended) {
                (true, _) => true,
                (_, true) => false,
                _ => defaults.extended,
            },
            parts: PartsOptions {
                amount: self.parts.unwrap_or(defaults.parts.amount),
                length: self.length.unwrap_or(defaults.parts.length),
                delimiter: self.delimiter.clone().unwrap_or(defaults.parts.delimiter),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_options_uses_config_defaults() {
        let config = Config {
            default_password_length: 8,
            default_password_parts: 2,
            default_password_extended: true,
            ..Default::default()
        };
        let options = GenerateArgs::default().to_options(&config);

        assert_eq!(options.count_active_charsets(), 5);
        assert_eq!(options.parts.length, 8);
        assert_eq!(options.parts.amount, 2);
        assert_eq!(options.parts.delimiter, "-");
    }

    #[test]
    fn test_no_extended_overrides_config() {
        let config = Config {
            default_password_extended: true,
            ..Default::default()
        };
        let args = GenerateArgs {
            no_extended: true,
            ..Default::default()
        };
        assert!(!args.to_options(&config).extended);
        assert!(GenerateArgs::default().to_options(&config).extended);
    }

    #[test]
    fn test_flags_map_to_matching_charsets() {
        let args = GenerateArgs {
            no_lowercase: true,
            no_numbers: true,
            length: Some(4),
            ..Default::default()
        };
        let options = args.to_options(&Config::default());

        assert!(!options.lowercase);
        assert!(options.uppercase);
        assert!(!options.numbers);
        assert!(options.special);
        assert!(!options.extended);
        assert_eq!(options.parts.length, 4);
    }
}
