use console::Style;

use crate::core::preferences::Preferences;

// Ubuntu orange, the accent used on the slider, checkboxes and button
const ACCENT: u8 = 202;
const DARK_TEXT: u8 = 236;
const LIGHT_TEXT: u8 = 255;
const MUTED: u8 = 245;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
}

impl Theme {
    pub fn from_preferences(preferences: &Preferences) -> Self {
        Self { dark: preferences.dark_mode }
    }

    pub fn text(&self) -> Style {
        if self.dark {
            Style::new().color256(LIGHT_TEXT).on_black()
        } else {
            Style::new().color256(DARK_TEXT)
        }
    }

    pub fn title(&self) -> Style {
        self.text().bold()
    }

    pub fn muted(&self) -> Style {
        Style::new().color256(MUTED)
    }

    pub fn accent(&self) -> Style {
        Style::new().color256(ACCENT).bold()
    }

    pub fn password(&self) -> Style {
        if self.dark {
            Style::new().color256(LIGHT_TEXT).on_color256(DARK_TEXT).bold()
        } else {
            Style::new().color256(DARK_TEXT).on_color256(LIGHT_TEXT).bold()
        }
    }

    /// `[x]` or `[ ]`, the checked box drawn in the accent colour.
    pub fn checkbox(&self, checked: bool) -> String {
        if checked {
            self.accent().apply_to("[x]").to_string()
        } else {
            self.muted().apply_to("[ ]").to_string()
        }
    }
}
