// src/api/types.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::i18n::Locale;
use crate::models::Adjustment;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Password length (default: configured length)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include numbers (default: true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
    /// Language of the notice (default: stored preference)
    pub locale: Option<Locale>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether a password was produced
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Correction to apply before asking again
    pub adjustment: Option<Adjustment>,
    /// Localized notice describing the correction
    pub notice: Option<String>,
    /// Error message (if the request was rejected)
    pub error: Option<String>,
}

impl PasswordGenerationResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            password: None,
            adjustment: None,
            notice: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessagesResponse {
    pub locale: Locale,
    /// Message templates keyed by name; `{{length}}` style placeholders
    pub messages: BTreeMap<String, String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePreferencesRequest {
    pub dark_mode: Option<bool>,
    pub locale: Option<Locale>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}
