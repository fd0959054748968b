use console::Style;

use super::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Info => "ℹ️",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "❌",
        }
    }

    fn style(self) -> Style {
        match self {
            ToastKind::Success => Style::new().green(),
            ToastKind::Info => Style::new().cyan(),
            ToastKind::Warning => Style::new().yellow(),
            ToastKind::Error => Style::new().red().bold(),
        }
    }
}

/// A short notification line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn render(&self, theme: &Theme) -> String {
        let body = self.kind.style().apply_to(&self.message);
        if theme.dark {
            format!("{} {}", self.kind.icon(), body.on_black())
        } else {
            format!("{} {}", self.kind.icon(), body)
        }
    }

    /// Print to stderr so stdout stays clean for the password itself.
    pub fn show(&self, theme: &Theme) {
        match self.kind {
            ToastKind::Warning => log::warn!("{}", self.message),
            ToastKind::Error => log::error!("{}", self.message),
            _ => log::debug!("{}", self.message),
        }
        eprintln!("{}", self.render(theme));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_render_has_icon_and_message() {
        console::set_colors_enabled(false);
        let toast = Toast::success("Password copied to clipboard!");
        assert_eq!(toast.render(&Theme { dark: false }), "✅ Password copied to clipboard!");
    }

    #[test]
    fn render_keeps_message_text() {
        console::set_colors_enabled(false);
        let toast = Toast::warning("length raised");
        let rendered = toast.render(&Theme { dark: true });
        assert!(rendered.ends_with("length raised"));
        assert!(rendered.starts_with("⚠️"));
    }
}
