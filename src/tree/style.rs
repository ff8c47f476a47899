use colored::{Color, Colorize};
use supports_color::Stream;

use super::EntryKind;

/// Accent per entry kind. `None` leaves the text in the terminal's default
/// style; the reset sequence is emitted by `colored` after every accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayStyle {
    directory: Option<Color>,
    file: Option<Color>,
}

impl DisplayStyle {
    pub const fn colored() -> Self {
        Self {
            directory: Some(Color::BrightBlue),
            file: None,
        }
    }

    pub const fn plain() -> Self {
        Self {
            directory: None,
            file: None,
        }
    }

    /// Picks the colored style only when allowed and stdout can show it.
    pub fn detect(allow_color: bool) -> Self {
        if allow_color && supports_color::on(Stream::Stdout).is_some() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn accent(&self, kind: EntryKind) -> Option<Color> {
        match kind {
            EntryKind::Directory => self.directory,
            EntryKind::File => self.file,
        }
    }

    pub fn paint(&self, kind: EntryKind, text: &str) -> String {
        match self.accent(kind) {
            Some(color) => text.color(color).to_string(),
            None => text.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(EntryKind::Directory)]
    #[case(EntryKind::File)]
    fn plain_style_never_emits_escapes(#[case] kind: EntryKind) {
        assert_eq!(DisplayStyle::plain().paint(kind, "src"), "src");
    }

    #[test]
    fn colored_style_accents_directories_only() {
        colored::control::set_override(true);
        let style = DisplayStyle::colored();

        assert_eq!(
            style.paint(EntryKind::Directory, "src/"),
            "\u{1b}[94msrc/\u{1b}[0m"
        );
        assert_eq!(style.paint(EntryKind::File, "main.rs"), "main.rs");
    }

    #[test]
    fn detect_without_permission_is_plain() {
        assert_eq!(DisplayStyle::detect(false), DisplayStyle::plain());
    }
}
