// src/cli/handlers.rs
use anyhow::{bail, Context as _, Result};
use serde::Serialize;

use crate::cli::commands::{DarkModeSwitch, GenerateOptions};
use crate::cli::Context;
use crate::generators::PasswordGenerator;
use crate::i18n::{self, Locale, MessageKey};
use crate::models::{Adjustment, GeneratedPassword, GenerationRequest};
use crate::ui::{self, clipboard, Toast};

#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub password: GeneratedPassword,
    pub request: GenerationRequest,
    pub adjustments: Vec<Adjustment>,
    pub notices: Vec<String>,
    pub copied: bool,
}

/// Generate one password, applying any corrections the request needs.
pub fn generate_once(ctx: &Context, options: &GenerateOptions) -> Result<GenerateOutput> {
    let request = options.to_request(&ctx.config);

    if request.length == 0 || request.length > ctx.config.max_password_length {
        bail!(
            "Password length must be between 1 and {} characters",
            ctx.config.max_password_length
        );
    }

    let (password, adjustments) = match options.seed {
        Some(seed) => {
            log::warn!("Using a fixed seed, the password is reproducible");
            PasswordGenerator::with_seed(seed).resolve(&request)
        }
        None => PasswordGenerator::new().resolve(&request),
    };

    let request = adjustments
        .last()
        .map(|a| a.corrected.clone())
        .unwrap_or(request);

    let notices = adjustments
        .iter()
        .map(|a| i18n::adjustment_notice(ctx.locale(), a))
        .collect();

    Ok(GenerateOutput {
        password,
        request,
        adjustments,
        notices,
        copied: false,
    })
}

pub fn handle_generate(ctx: &Context, options: &GenerateOptions) -> Result<()> {
    let theme = ctx.theme();
    let mut output = generate_once(ctx, options)?;

    if !ctx.json {
        for notice in &output.notices {
            Toast::warning(notice.as_str()).show(&theme);
        }
    }

    let mut pending_clear = Vec::new();
    if options.copy {
        let result = clipboard::copy_to_clipboard(output.password.as_str(), ctx.config.clipboard_clear_after);
        output.copied = result.is_ok();
        if !ctx.json {
            ui::copy_toast(ctx.locale(), &result).show(&theme);
        }
        match result {
            Ok(handle) => pending_clear.extend(handle),
            Err(e) => log::error!("{}", e),
        }
    }

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.password);
    }

    clipboard::wait_for_clear(pending_clear);

    Ok(())
}

pub fn handle_dark_mode(ctx: &Context, mode: DarkModeSwitch) -> Result<()> {
    let store = ctx
        .store
        .as_ref()
        .context("No preferences file available to store dark mode")?;

    let preferences = store
        .update(|p| p.dark_mode = mode.apply(p.dark_mode))
        .with_context(|| format!("Failed to save preferences to {}", store.path().display()))?;

    let key = if preferences.dark_mode {
        MessageKey::DarkModeOn
    } else {
        MessageKey::DarkModeOff
    };
    report(ctx, &preferences, i18n::message(preferences.locale, key))
}

pub fn handle_language(ctx: &Context, locale: Locale) -> Result<()> {
    let store = ctx
        .store
        .as_ref()
        .context("No preferences file available to store the language")?;

    let preferences = store
        .update(|p| p.locale = locale)
        .with_context(|| format!("Failed to save preferences to {}", store.path().display()))?;

    report(ctx, &preferences, locale.native_name())
}

fn report(ctx: &Context, preferences: &crate::core::preferences::Preferences, message: &str) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(preferences)?);
    } else {
        Toast::info(message).show(&ui::Theme::from_preferences(preferences));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use crate::core::config::Config;
    use crate::core::preferences::PreferencesStore;
    use crate::models::AdjustmentReason;
    use clap::Parser;
    use tempfile::tempdir;

    fn context(store: Option<PreferencesStore>) -> Context {
        let args = Args::try_parse_from(["rust_passgen"]).unwrap();
        Context::new(&args, Config::default(), store)
    }

    #[test]
    fn generate_once_with_seed_is_reproducible() {
        let ctx = context(None);
        let options = GenerateOptions { length: Some(14), seed: Some(11), ..Default::default() };

        let first = generate_once(&ctx, &options).unwrap();
        let second = generate_once(&ctx, &options).unwrap();
        assert_eq!(first.password, second.password);
        assert_eq!(first.password.as_str().len(), 14);
        assert!(first.adjustments.is_empty());
    }

    #[test]
    fn generate_once_reports_corrections() {
        let ctx = context(None);
        let options = GenerateOptions {
            length: Some(2),
            seed: Some(5),
            ..Default::default()
        };

        let output = generate_once(&ctx, &options).unwrap();
        assert_eq!(output.password.as_str().len(), 4);
        assert_eq!(output.request.length, 4);
        assert_eq!(
            output.adjustments[0].reason,
            AdjustmentReason::LengthBelowClassCount { requested: 2, required: 4 }
        );
        assert_eq!(output.notices.len(), 1);
    }

    #[test]
    fn generate_once_with_no_classes_falls_back_to_lowercase() {
        let ctx = context(None);
        let options = GenerateOptions {
            no_uppercase: true,
            no_lowercase: true,
            no_numbers: true,
            no_symbols: true,
            ..Default::default()
        };

        let output = generate_once(&ctx, &options).unwrap();
        assert!(output.request.include_lowercase);
        assert!(output.password.as_str().chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn generate_once_rejects_out_of_range_lengths() {
        let ctx = context(None);
        assert!(generate_once(&ctx, &GenerateOptions { length: Some(0), ..Default::default() }).is_err());
        assert!(generate_once(&ctx, &GenerateOptions { length: Some(129), ..Default::default() }).is_err());
    }

    #[test]
    fn dark_mode_command_persists() {
        let dir = tempdir().unwrap();
        let store = PreferencesStore::new(dir.path().join("preferences.json"));
        let ctx = context(Some(store.clone()));

        handle_dark_mode(&ctx, DarkModeSwitch::On).unwrap();
        assert!(store.load().unwrap().dark_mode);

        handle_dark_mode(&ctx, DarkModeSwitch::Toggle).unwrap();
        assert!(!store.load().unwrap().dark_mode);
    }

    #[test]
    fn language_command_persists() {
        let dir = tempdir().unwrap();
        let store = PreferencesStore::new(dir.path().join("preferences.json"));
        let ctx = context(Some(store.clone()));

        handle_language(&ctx, Locale::Fa).unwrap();
        assert_eq!(store.load().unwrap().locale, Locale::Fa);
    }

    #[test]
    fn preference_commands_need_a_store() {
        let ctx = context(None);
        assert!(handle_dark_mode(&ctx, DarkModeSwitch::On).is_err());
    }
}
