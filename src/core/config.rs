// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::i18n::Locale;
use crate::models::GenerationRequest;

// Configuration for the generator, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub min_slider_length: usize,
    pub max_slider_length: usize,
    pub max_password_length: usize,

    // Appearance
    pub default_locale: Locale,
    pub dark_mode: Option<bool>,
    pub preferences_file: Option<PathBuf>,

    // Clipboard
    pub clipboard_clear_after: Option<Duration>,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    /// Rejected variables, reported once logging is up.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 8,
            min_slider_length: 4,
            max_slider_length: 32,
            max_password_length: 128,

            // Appearance
            default_locale: Locale::En,
            dark_mode: None,
            preferences_file: None,

            // Clipboard
            clipboard_clear_after: None,

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    // Build configuration from any key lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(length) = parse_var(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut config.warnings) {
            config.default_password_length = length;
        }

        if let Some(min) = parse_var(&lookup, "MIN_PASSWORD_LENGTH", &mut config.warnings) {
            config.min_slider_length = min;
        }

        if let Some(max) = parse_var(&lookup, "MAX_SLIDER_LENGTH", &mut config.warnings) {
            config.max_slider_length = max;
        }

        if let Some(max) = parse_var(&lookup, "MAX_PASSWORD_LENGTH", &mut config.warnings) {
            config.max_password_length = max;
        }

        if config.min_slider_length > config.max_slider_length {
            config.warnings.push(format!(
                "MIN_PASSWORD_LENGTH {} is above MAX_SLIDER_LENGTH {}, using defaults",
                config.min_slider_length, config.max_slider_length
            ));
            let defaults = Config::default();
            config.min_slider_length = defaults.min_slider_length;
            config.max_slider_length = defaults.max_slider_length;
        }

        // Appearance
        if let Some(locale) = parse_var(&lookup, "DEFAULT_LOCALE", &mut config.warnings) {
            config.default_locale = locale;
        }

        if let Some(dark_mode) = parse_var(&lookup, "DARK_MODE", &mut config.warnings) {
            config.dark_mode = Some(dark_mode);
        }

        if let Some(path) = lookup("PREFERENCES_FILE") {
            if !path.trim().is_empty() {
                config.preferences_file = Some(PathBuf::from(path));
            }
        }

        // Clipboard
        if let Some(seconds) = parse_var::<u64, _>(&lookup, "CLIPBOARD_CLEAR_SECONDS", &mut config.warnings) {
            config.clipboard_clear_after = if seconds == 0 {
                None
            } else {
                Some(Duration::from_secs(seconds))
            };
        }

        // Web Interface
        if let Some(port) = parse_var(&lookup, "WEB_PORT", &mut config.warnings) {
            config.web_port = port;
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                "off" => config.log_level = LevelFilter::Off,
                _ => config
                    .warnings
                    .push(format!("Unknown log level '{}' for LOG_LEVEL, using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    /// Emit the warnings collected while reading the environment.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
    }

    /// The request the form starts from.
    pub fn default_request(&self) -> GenerationRequest {
        GenerationRequest {
            length: self.default_password_length,
            ..GenerationRequest::default()
        }
    }

    /// Clamp a length into the interactive slider range.
    pub fn clamp_to_slider(&self, length: usize) -> usize {
        length.clamp(self.min_slider_length, self.max_slider_length)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str, warnings: &mut Vec<String>) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!("Ignoring invalid value '{}' for {}", raw, key));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]);
        assert_eq!(config.default_password_length, 8);
        assert_eq!((config.min_slider_length, config.max_slider_length), (4, 32));
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.dark_mode, None);
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.clipboard_clear_after.is_none());
    }

    #[test]
    fn reads_variables() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "16"),
            ("DEFAULT_LOCALE", "fa"),
            ("DARK_MODE", "true"),
            ("WEB_PORT", "8088"),
            ("LOG_LEVEL", "DEBUG"),
            ("CLIPBOARD_CLEAR_SECONDS", "15"),
            ("PREFERENCES_FILE", "/tmp/prefs.json"),
        ]);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.default_locale, Locale::Fa);
        assert_eq!(config.dark_mode, Some(true));
        assert_eq!(config.web_port, 8088);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.clipboard_clear_after, Some(Duration::from_secs(15)));
        assert_eq!(config.preferences_file, Some(PathBuf::from("/tmp/prefs.json")));
    }

    #[test]
    fn invalid_values_are_ignored() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "lots"),
            ("WEB_PORT", "99999"),
            ("DEFAULT_LOCALE", "klingon"),
        ]);
        assert_eq!(config.default_password_length, 8);
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.default_locale, Locale::En);
    }

    #[test]
    fn rejected_values_are_reported() {
        let config = config_from(&[("WEB_PORT", "99999"), ("LOG_LEVEL", "loud"), ("DARK_MODE", "true")]);
        assert_eq!(config.warnings.len(), 2);
        assert!(config.warnings[0].contains("WEB_PORT"));
        assert!(config.warnings[1].contains("LOG_LEVEL"));
        assert!(config_from(&[("DARK_MODE", "true")]).warnings.is_empty());
    }

    #[test]
    fn inverted_slider_bounds_fall_back() {
        let config = config_from(&[("MIN_PASSWORD_LENGTH", "40"), ("MAX_SLIDER_LENGTH", "10")]);
        assert_eq!((config.min_slider_length, config.max_slider_length), (4, 32));
        assert!(config.warnings[0].contains("MIN_PASSWORD_LENGTH"));
    }

    #[test]
    fn slider_clamp() {
        let config = Config::default();
        assert_eq!(config.clamp_to_slider(2), 4);
        assert_eq!(config.clamp_to_slider(12), 12);
        assert_eq!(config.clamp_to_slider(64), 32);
    }
}
