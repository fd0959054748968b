// src/cli/menu.rs
use std::fmt;
use std::thread::JoinHandle;

use anyhow::Result;
use inquire::error::InquireResult;
use inquire::validator::Validation;
use inquire::{CustomType, InquireError, MultiSelect, Select};
use rand::Rng;

use crate::cli::Context;
use crate::core::preferences::Preferences;
use crate::generators::PasswordGenerator;
use crate::i18n::{self, Locale, MessageKey};
use crate::models::{Adjustment, CharacterClass, GeneratedPassword, GenerationOutcome, GenerationRequest};
use crate::ui::{self, clipboard, Theme, Toast};

/// What the form currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub request: GenerationRequest,
    pub password: Option<GeneratedPassword>,
}

impl FormState {
    pub fn new(request: GenerationRequest) -> Self {
        Self { request, password: None }
    }

    /// Press "Generate". A corrected request replaces the form state and the
    /// previous password stays on screen until the next press.
    pub fn generate<R: Rng>(&mut self, generator: &mut PasswordGenerator<R>) -> Option<Adjustment> {
        match generator.generate(&self.request) {
            GenerationOutcome::Generated(password) => {
                self.password = Some(password);
                None
            }
            GenerationOutcome::NeedsAdjustment(adjustment) => {
                self.request = adjustment.corrected.clone();
                Some(adjustment)
            }
        }
    }

    pub fn set_classes(&mut self, selected: &[CharacterClass]) {
        for class in CharacterClass::ALL {
            self.request.set_included(class, selected.contains(&class));
        }
    }

    pub fn render(&self, theme: &Theme, locale: Locale) -> String {
        let mut lines = Vec::new();

        lines.push(theme.title().apply_to(format!("🔐 {}", i18n::message(locale, MessageKey::Title))).to_string());

        let shown = self.password.as_ref().map(GeneratedPassword::as_str).unwrap_or("");
        lines.push(format!("  {}", theme.password().apply_to(format!(" {} ", shown))));
        lines.push(format!("  {}", theme.muted().apply_to(i18n::message(locale, MessageKey::PasswordPlaceholder))));

        let length = self.request.length.to_string();
        lines.push(format!(
            "  {}",
            theme.text().apply_to(i18n::format_message(locale, MessageKey::LengthLabel, &[("length", &length)]))
        ));

        for class in CharacterClass::ALL {
            lines.push(format!(
                "  {} {}",
                theme.checkbox(self.request.includes(class)),
                theme.text().apply_to(i18n::class_label(locale, class))
            ));
        }

        lines.join("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Generate,
    Copy,
    SetLength,
    ChooseClasses,
    ToggleDarkMode,
    ChangeLanguage,
    Exit,
}

impl Action {
    const ALL: [Action; 7] = [
        Action::Generate,
        Action::Copy,
        Action::SetLength,
        Action::ChooseClasses,
        Action::ToggleDarkMode,
        Action::ChangeLanguage,
        Action::Exit,
    ];

    fn key(self) -> MessageKey {
        match self {
            Action::Generate => MessageKey::GenerateButton,
            Action::Copy => MessageKey::CopyAction,
            Action::SetLength => MessageKey::SetLengthAction,
            Action::ChooseClasses => MessageKey::ChooseClassesAction,
            Action::ToggleDarkMode => MessageKey::DarkModeAction,
            Action::ChangeLanguage => MessageKey::LanguageAction,
            Action::Exit => MessageKey::ExitAction,
        }
    }
}

/// A prompt option carrying its localized label.
struct Labeled<T> {
    value: T,
    label: String,
}

impl<T> fmt::Display for Labeled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// How a prompt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Answer<T> {
    Value(T),
    Skipped,
    Quit,
}

/// Esc skips a prompt; Ctrl+C leaves the form from any prompt.
fn answer<T>(result: InquireResult<Option<T>>) -> Result<Answer<T>> {
    match result {
        Ok(Some(value)) => Ok(Answer::Value(value)),
        Ok(None) => Ok(Answer::Skipped),
        Err(InquireError::OperationInterrupted) | Err(InquireError::OperationCanceled) => Ok(Answer::Quit),
        Err(e) => Err(e.into()),
    }
}

pub fn run_form(mut ctx: Context) -> Result<()> {
    let mut generator = PasswordGenerator::new();
    let mut form = FormState::new(GenerationRequest {
        length: ctx.config.clamp_to_slider(ctx.config.default_password_length),
        ..ctx.config.default_request()
    });

    // A password is ready as soon as the form opens
    if let Some(adjustment) = form.generate(&mut generator) {
        ui::adjustment_toast(ctx.locale(), &adjustment).show(&ctx.theme());
    }

    let mut pending_clear = Vec::new();
    let result = run_actions(&mut ctx, &mut form, &mut generator, &mut pending_clear);
    clipboard::wait_for_clear(pending_clear);
    result
}

fn run_actions(
    ctx: &mut Context,
    form: &mut FormState,
    generator: &mut PasswordGenerator,
    pending_clear: &mut Vec<JoinHandle<()>>,
) -> Result<()> {
    loop {
        let theme = ctx.theme();
        let locale = ctx.locale();

        println!();
        println!("{}", form.render(&theme, locale));
        println!();

        let options: Vec<Labeled<Action>> = Action::ALL
            .into_iter()
            .map(|action| Labeled {
                value: action,
                label: i18n::message(locale, action.key()).to_string(),
            })
            .collect();

        let selection = Select::new(i18n::message(locale, MessageKey::Title), options)
            .with_page_size(Action::ALL.len())
            .prompt_skippable();

        let action = match answer(selection)? {
            Answer::Value(option) => option.value,
            Answer::Skipped => continue,
            Answer::Quit => return Ok(()),
        };

        match action {
            Action::Generate => {
                if let Some(adjustment) = form.generate(generator) {
                    ui::adjustment_toast(locale, &adjustment).show(&theme);
                }
            }
            Action::Copy => {
                if let Some(password) = &form.password {
                    let result = clipboard::copy_to_clipboard(password.as_str(), ctx.config.clipboard_clear_after);
                    ui::copy_toast(locale, &result).show(&theme);
                    if let Ok(handle) = result {
                        pending_clear.extend(handle);
                    }
                }
            }
            Action::SetLength => match answer(prompt_length(ctx, form.request.length))? {
                Answer::Value(length) => form.request.length = length,
                Answer::Skipped => {}
                Answer::Quit => return Ok(()),
            },
            Action::ChooseClasses => match answer(prompt_classes(locale, &form.request))? {
                Answer::Value(selected) => form.set_classes(&selected),
                Answer::Skipped => {}
                Answer::Quit => return Ok(()),
            },
            Action::ToggleDarkMode => {
                let dark = ctx.preferences.toggle_dark_mode();
                persist(ctx, |p| p.dark_mode = dark);
                let key = if dark { MessageKey::DarkModeOn } else { MessageKey::DarkModeOff };
                Toast::info(i18n::message(locale, key)).show(&ctx.theme());
            }
            Action::ChangeLanguage => match answer(prompt_locale(locale))? {
                Answer::Value(selected) => {
                    ctx.preferences.locale = selected;
                    persist(ctx, |p| p.locale = selected);
                }
                Answer::Skipped => {}
                Answer::Quit => return Ok(()),
            },
            Action::Exit => return Ok(()),
        }
    }
}

fn prompt_length(ctx: &Context, current: usize) -> InquireResult<Option<usize>> {
    let min = ctx.config.min_slider_length;
    let max = ctx.config.max_slider_length;
    let label = i18n::format_message(ctx.locale(), MessageKey::LengthLabel, &[("length", &current.to_string())]);

    CustomType::<usize>::new(&label)
        .with_default(current)
        .with_help_message(&format!("{} - {}", min, max))
        .with_validator(move |value: &usize| {
            if (min..=max).contains(value) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(format!("{} - {}", min, max).into()))
            }
        })
        .prompt_skippable()
}

fn prompt_classes(locale: Locale, request: &GenerationRequest) -> InquireResult<Option<Vec<CharacterClass>>> {
    let options: Vec<Labeled<CharacterClass>> = CharacterClass::ALL
        .into_iter()
        .map(|class| Labeled {
            value: class,
            label: i18n::class_label(locale, class).to_string(),
        })
        .collect();

    let checked: Vec<usize> = CharacterClass::ALL
        .iter()
        .enumerate()
        .filter(|(_, class)| request.includes(**class))
        .map(|(index, _)| index)
        .collect();

    let selected = MultiSelect::new(i18n::message(locale, MessageKey::ChooseClassesAction), options)
        .with_default(&checked)
        .prompt_skippable()?;

    Ok(selected.map(|chosen| chosen.into_iter().map(|option| option.value).collect()))
}

fn prompt_locale(current: Locale) -> InquireResult<Option<Locale>> {
    let options: Vec<Labeled<Locale>> = Locale::ALL
        .into_iter()
        .map(|locale| Labeled {
            value: locale,
            label: locale.native_name().to_string(),
        })
        .collect();

    let selected = Select::new(i18n::message(current, MessageKey::LanguageAction), options).prompt_skippable()?;
    Ok(selected.map(|option| option.value))
}

/// Save one changed field on top of what is stored, leaving one-run
/// overrides from flags or the environment out of the file.
fn persist<F>(ctx: &Context, change: F)
where
    F: FnOnce(&mut Preferences),
{
    if let Some(store) = &ctx.store {
        if let Err(e) = store.update(change) {
            log::warn!("Could not save preferences: {}", e);
        }
    }
}
