// src/cli/commands.rs
use clap::{Subcommand, ValueEnum};

use crate::core::config::Config;
use crate::i18n::Locale;
use crate::models::GenerationRequest;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password and print it
    Generate(GenerateOptions),

    /// Open the interactive password form
    Interactive,

    /// Run the HTTP API
    Serve {
        /// API server port
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        address: Option<String>,
    },

    /// Turn dark mode on or off
    DarkMode {
        #[arg(value_enum)]
        mode: DarkModeSwitch,
    },

    /// Set the interface language
    Language {
        /// Language code (en, fa)
        locale: Locale,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Password length
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Seed for reproducible output (not for real secrets)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Copy the password to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}

impl GenerateOptions {
    pub fn to_request(&self, config: &Config) -> GenerationRequest {
        GenerationRequest {
            length: self.length.unwrap_or(config.default_password_length),
            include_uppercase: !self.no_uppercase,
            include_lowercase: !self.no_lowercase,
            include_numbers: !self.no_numbers,
            include_symbols: !self.no_symbols,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DarkModeSwitch {
    On,
    Off,
    Toggle,
}

impl DarkModeSwitch {
    /// The dark-mode value after applying this switch to `current`.
    pub fn apply(self, current: bool) -> bool {
        match self {
            DarkModeSwitch::On => true,
            DarkModeSwitch::Off => false,
            DarkModeSwitch::Toggle => !current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;

    #[test]
    fn generate_flags_build_request() {
        let args = Args::try_parse_from([
            "rust_passgen", "generate", "--length", "20", "--no-symbols", "--seed", "7",
        ])
        .unwrap();

        let Some(CliCommand::Generate(options)) = args.command else {
            panic!("expected generate");
        };
        assert_eq!(options.seed, Some(7));

        let request = options.to_request(&Config::default());
        assert_eq!(request.length, 20);
        assert!(request.include_uppercase && request.include_lowercase && request.include_numbers);
        assert!(!request.include_symbols);
    }

    #[test]
    fn generate_defaults_come_from_config() {
        let config = Config { default_password_length: 12, ..Config::default() };
        let request = GenerateOptions::default().to_request(&config);
        assert_eq!(request, GenerationRequest { length: 12, ..GenerationRequest::default() });
    }

    #[test]
    fn dark_mode_switch() {
        assert!(DarkModeSwitch::On.apply(false));
        assert!(!DarkModeSwitch::Off.apply(true));
        assert!(DarkModeSwitch::Toggle.apply(false));
        assert!(!DarkModeSwitch::Toggle.apply(true));

        let args = Args::try_parse_from(["rust_passgen", "dark-mode", "toggle"]).unwrap();
        assert!(matches!(args.command, Some(CliCommand::DarkMode { mode: DarkModeSwitch::Toggle })));
    }
}
