// src/cli/mod.rs
use clap::Parser;

use crate::core::config::Config;
use crate::core::preferences::{Preferences, PreferencesStore};
use crate::i18n::Locale;
use crate::ui::Theme;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Random password generator", long_about = None)]
pub struct Args {
    /// Use JSON for output (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Interface language (en, fa)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Force dark mode on or off for this run
    #[arg(long, global = true)]
    pub dark_mode: Option<bool>,

    /// Command to execute (defaults to the interactive form)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Everything a command needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub store: Option<PreferencesStore>,
    pub preferences: Preferences,
    pub json: bool,
}

impl Context {
    /// Stored preferences, overridden by the environment and then by flags.
    pub fn new(args: &Args, config: Config, store: Option<PreferencesStore>) -> Self {
        let fallback = Preferences {
            dark_mode: false,
            locale: config.default_locale,
        };

        let store = store.map(|s| s.with_fallback(fallback));

        let mut preferences = match &store {
            Some(store) => store.load().unwrap_or_else(|e| {
                log::warn!("Could not read preferences from {}: {}", store.path().display(), e);
                fallback
            }),
            None => fallback,
        };

        if let Some(dark_mode) = config.dark_mode {
            preferences.dark_mode = dark_mode;
        }
        if let Some(dark_mode) = args.dark_mode {
            preferences.dark_mode = dark_mode;
        }
        if let Some(locale) = args.locale {
            preferences.locale = locale;
        }

        Self {
            config,
            store,
            preferences,
            json: args.json,
        }
    }

    pub fn locale(&self) -> Locale {
        self.preferences.locale
    }

    pub fn theme(&self) -> Theme {
        Theme::from_preferences(&self.preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn no_subcommand_means_interactive() {
        let args = Args::try_parse_from(["rust_passgen"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.json);
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let args = Args::try_parse_from(["rust_passgen", "generate", "--locale", "fa", "--json"]).unwrap();
        assert_eq!(args.locale, Some(Locale::Fa));
        assert!(args.json);
    }

    #[test]
    fn unknown_locale_is_rejected() {
        assert!(Args::try_parse_from(["rust_passgen", "--locale", "xx"]).is_err());
    }

    #[test]
    fn flags_override_stored_preferences() {
        let dir = tempdir().unwrap();
        let store = PreferencesStore::new(dir.path().join("preferences.json"));
        store.save(&Preferences { dark_mode: false, locale: Locale::En }).unwrap();

        let args = Args::try_parse_from(["rust_passgen", "--dark-mode", "true", "--locale", "fa"]).unwrap();
        let ctx = Context::new(&args, Config::default(), Some(store));

        assert!(ctx.preferences.dark_mode);
        assert_eq!(ctx.locale(), Locale::Fa);
    }

    #[test]
    fn config_locale_applies_until_something_is_saved() {
        let dir = tempdir().unwrap();
        let store = PreferencesStore::new(dir.path().join("preferences.json"));
        let config = Config { default_locale: Locale::Fa, ..Config::default() };

        let args = Args::try_parse_from(["rust_passgen"]).unwrap();
        let ctx = Context::new(&args, config, Some(store));
        assert_eq!(ctx.locale(), Locale::Fa);
    }
}
