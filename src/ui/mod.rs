//! Terminal presentation: theme, notices and clipboard.
//!
//! Nothing in here knows how passwords are built.

pub mod clipboard;
pub mod theme;
pub mod toast;

use crate::i18n::{self, Locale, MessageKey};
use crate::models::Adjustment;

pub use self::clipboard::ClipboardError;
pub use theme::Theme;
pub use toast::Toast;

/// Toast for the outcome of a copy.
pub fn copy_toast<T>(locale: Locale, result: &Result<T, ClipboardError>) -> Toast {
    match result {
        Ok(_) => Toast::success(i18n::message(locale, MessageKey::CopiedMessage)),
        Err(e) => Toast::error(i18n::format_message(
            locale,
            MessageKey::CopyFailedMessage,
            &[("error", &e.to_string())],
        )),
    }
}

/// Warning toast describing a corrected request.
pub fn adjustment_toast(locale: Locale, adjustment: &Adjustment) -> Toast {
    Toast::warning(i18n::adjustment_notice(locale, adjustment))
}
