// src/i18n/mod.rs
//! Localized interface strings.
//!
//! Lookup is a pure function of locale, key and parameters. Placeholders use
//! the `{{name}}` form; unknown placeholders are left untouched.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::{Adjustment, AdjustmentReason, CharacterClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fa,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown locale '{0}', expected one of: en, fa")]
pub struct UnknownLocale(pub String);

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fa];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fa => "fa",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fa => "فارسی",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "fa" | "fa-ir" => Ok(Locale::Fa),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    Title,
    PasswordPlaceholder,
    LengthLabel,
    IncludeUppercase,
    IncludeLowercase,
    IncludeNumbers,
    IncludeSymbols,
    GenerateButton,
    CopiedMessage,
    CopyFailedMessage,
    NoClassSelected,
    LengthAdjusted,
    CopyAction,
    SetLengthAction,
    ChooseClassesAction,
    DarkModeAction,
    LanguageAction,
    ExitAction,
    DarkModeOn,
    DarkModeOff,
}

impl MessageKey {
    pub const ALL: [MessageKey; 20] = [
        MessageKey::Title,
        MessageKey::PasswordPlaceholder,
        MessageKey::LengthLabel,
        MessageKey::IncludeUppercase,
        MessageKey::IncludeLowercase,
        MessageKey::IncludeNumbers,
        MessageKey::IncludeSymbols,
        MessageKey::GenerateButton,
        MessageKey::CopiedMessage,
        MessageKey::CopyFailedMessage,
        MessageKey::NoClassSelected,
        MessageKey::LengthAdjusted,
        MessageKey::CopyAction,
        MessageKey::SetLengthAction,
        MessageKey::ChooseClassesAction,
        MessageKey::DarkModeAction,
        MessageKey::LanguageAction,
        MessageKey::ExitAction,
        MessageKey::DarkModeOn,
        MessageKey::DarkModeOff,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::Title => "title",
            MessageKey::PasswordPlaceholder => "passwordPlaceholder",
            MessageKey::LengthLabel => "lengthLabel",
            MessageKey::IncludeUppercase => "includeUppercase",
            MessageKey::IncludeLowercase => "includeLowercase",
            MessageKey::IncludeNumbers => "includeNumbers",
            MessageKey::IncludeSymbols => "includeSymbols",
            MessageKey::GenerateButton => "generateButton",
            MessageKey::CopiedMessage => "copiedMessage",
            MessageKey::CopyFailedMessage => "copyFailedMessage",
            MessageKey::NoClassSelected => "noClassSelected",
            MessageKey::LengthAdjusted => "lengthAdjusted",
            MessageKey::CopyAction => "copyAction",
            MessageKey::SetLengthAction => "setLengthAction",
            MessageKey::ChooseClassesAction => "chooseClassesAction",
            MessageKey::DarkModeAction => "darkModeAction",
            MessageKey::LanguageAction => "languageAction",
            MessageKey::ExitAction => "exitAction",
            MessageKey::DarkModeOn => "darkModeOn",
            MessageKey::DarkModeOff => "darkModeOff",
        }
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "Password Generator",
        MessageKey::PasswordPlaceholder => "Click to copy",
        MessageKey::LengthLabel => "Password Length: {{length}}",
        MessageKey::IncludeUppercase => "Include Uppercase",
        MessageKey::IncludeLowercase => "Include Lowercase",
        MessageKey::IncludeNumbers => "Include Numbers",
        MessageKey::IncludeSymbols => "Include Symbols",
        MessageKey::GenerateButton => "Generate Password",
        MessageKey::CopiedMessage => "Password copied to clipboard!",
        MessageKey::CopyFailedMessage => "Could not copy the password: {{error}}",
        MessageKey::NoClassSelected => "No character type was selected, lowercase letters have been enabled.",
        MessageKey::LengthAdjusted => "Password length was raised to {{length}} so every selected character type fits.",
        MessageKey::CopyAction => "Copy password",
        MessageKey::SetLengthAction => "Change length",
        MessageKey::ChooseClassesAction => "Choose character types",
        MessageKey::DarkModeAction => "Toggle dark mode",
        MessageKey::LanguageAction => "Change language",
        MessageKey::ExitAction => "Exit",
        MessageKey::DarkModeOn => "Dark mode enabled",
        MessageKey::DarkModeOff => "Dark mode disabled",
    }
}

fn persian(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "تولید کننده پسورد",
        MessageKey::PasswordPlaceholder => "کلیک کنید تا کپی شود",
        MessageKey::LengthLabel => "طول پسورد: {{length}}",
        MessageKey::IncludeUppercase => "شامل حروف بزرگ",
        MessageKey::IncludeLowercase => "شامل حروف کوچک",
        MessageKey::IncludeNumbers => "شامل اعداد",
        MessageKey::IncludeSymbols => "شامل نمادها",
        MessageKey::GenerateButton => "تولید پسورد",
        MessageKey::CopiedMessage => "!پسورد در کلیپ‌بورد کپی شد",
        MessageKey::CopyFailedMessage => "کپی پسورد انجام نشد: {{error}}",
        MessageKey::NoClassSelected => "هیچ نوع کاراکتری انتخاب نشده بود، حروف کوچک فعال شد.",
        MessageKey::LengthAdjusted => "طول پسورد به {{length}} افزایش یافت تا همه انواع انتخاب‌شده جا شوند.",
        MessageKey::CopyAction => "کپی پسورد",
        MessageKey::SetLengthAction => "تغییر طول",
        MessageKey::ChooseClassesAction => "انتخاب انواع کاراکتر",
        MessageKey::DarkModeAction => "تغییر حالت تاریک",
        MessageKey::LanguageAction => "تغییر زبان",
        MessageKey::ExitAction => "خروج",
        MessageKey::DarkModeOn => "حالت تاریک فعال شد",
        MessageKey::DarkModeOff => "حالت تاریک غیرفعال شد",
    }
}

/// Raw template for `key`.
pub fn message(locale: Locale, key: MessageKey) -> &'static str {
    match locale {
        Locale::En => english(key),
        Locale::Fa => persian(key),
    }
}

/// Template for `key` with every `{{name}}` replaced from `params`.
pub fn format_message(locale: Locale, key: MessageKey, params: &[(&str, &str)]) -> String {
    let mut text = message(locale, key).to_string();
    for (name, value) in params {
        text = text.replace(&format!("{{{{{}}}}}", name), value);
    }
    text
}

/// Every template for a locale, keyed by its wire name.
pub fn messages(locale: Locale) -> BTreeMap<&'static str, &'static str> {
    MessageKey::ALL
        .into_iter()
        .map(|key| (key.as_str(), message(locale, key)))
        .collect()
}

/// Checkbox label for a character class.
pub fn class_label(locale: Locale, class: CharacterClass) -> &'static str {
    let key = match class {
        CharacterClass::Uppercase => MessageKey::IncludeUppercase,
        CharacterClass::Lowercase => MessageKey::IncludeLowercase,
        CharacterClass::Numbers => MessageKey::IncludeNumbers,
        CharacterClass::Symbols => MessageKey::IncludeSymbols,
    };
    message(locale, key)
}

/// The notice shown when a request had to be corrected.
pub fn adjustment_notice(locale: Locale, adjustment: &Adjustment) -> String {
    match adjustment.reason {
        AdjustmentReason::NoClassSelected => message(locale, MessageKey::NoClassSelected).to_string(),
        AdjustmentReason::LengthBelowClassCount { required, .. } => format_message(
            locale,
            MessageKey::LengthAdjusted,
            &[("length", &required.to_string())],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenerationRequest;

    #[test]
    fn length_label_interpolates() {
        assert_eq!(
            format_message(Locale::En, MessageKey::LengthLabel, &[("length", "12")]),
            "Password Length: 12"
        );
        assert_eq!(
            format_message(Locale::Fa, MessageKey::LengthLabel, &[("length", "12")]),
            "طول پسورد: 12"
        );
    }

    #[test]
    fn unknown_placeholders_are_kept() {
        assert_eq!(
            format_message(Locale::En, MessageKey::LengthLabel, &[("size", "12")]),
            "Password Length: {{length}}"
        );
    }

    #[test]
    fn persian_strings_resolve() {
        assert_eq!(message(Locale::Fa, MessageKey::Title), "تولید کننده پسورد");
        assert_eq!(message(Locale::En, MessageKey::CopiedMessage), "Password copied to clipboard!");
    }

    #[test]
    fn locale_parsing() {
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("fa-IR".parse::<Locale>(), Ok(Locale::Fa));
        assert_eq!("de".parse::<Locale>(), Err(UnknownLocale("de".to_string())));
    }

    #[test]
    fn every_locale_has_every_key() {
        for locale in Locale::ALL {
            let all = messages(locale);
            assert_eq!(all.len(), MessageKey::ALL.len());
            assert!(all.values().all(|text| !text.is_empty()));
        }
    }

    #[test]
    fn locale_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::Fa).unwrap(), "\"fa\"");
    }

    #[test]
    fn adjustment_notices() {
        let adjustment = Adjustment {
            reason: AdjustmentReason::LengthBelowClassCount { requested: 2, required: 4 },
            corrected: GenerationRequest { length: 4, ..GenerationRequest::default() },
        };
        assert_eq!(
            adjustment_notice(Locale::En, &adjustment),
            "Password length was raised to 4 so every selected character type fits."
        );

        let adjustment = Adjustment {
            reason: AdjustmentReason::NoClassSelected,
            corrected: GenerationRequest::default(),
        };
        assert_eq!(
            adjustment_notice(Locale::Fa, &adjustment),
            message(Locale::Fa, MessageKey::NoClassSelected)
        );
    }
}
