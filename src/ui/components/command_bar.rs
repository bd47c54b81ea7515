// Command bar component - key hints on the bottom line

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::i18n::{I18n, TextKey};
use crate::ui::Theme;

#[derive(Debug, Clone)]
pub struct CommandItem {
    pub key: String,
    pub label: String,
}

impl CommandItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

pub struct CommandBar {
    commands: Vec<CommandItem>,
    bg_color: Color,
    key_fg_color: Color,
    label_fg_color: Color,
}

impl CommandBar {
    pub fn new(i18n: I18n) -> Self {
        Self {
            commands: Self::default_commands(i18n),
            bg_color: Color::Rgb(30, 30, 30),
            key_fg_color: Color::Rgb(109, 179, 63),
            label_fg_color: Color::Rgb(212, 212, 212),
        }
    }

    fn default_commands(i18n: I18n) -> Vec<CommandItem> {
        vec![
            CommandItem::new("F1", i18n.tr(TextKey::CommandHelp)),
            CommandItem::new("F2", i18n.tr(TextKey::CommandLanguage)),
            CommandItem::new("F8", i18n.tr(TextKey::CommandTheme)),
            CommandItem::new("Enter", i18n.tr(TextKey::CommandSelect)),
            CommandItem::new("Q", i18n.tr(TextKey::CommandQuit)),
        ]
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.command_bar_bg.to_color();
        self.key_fg_color = theme.accent.to_color();
        self.label_fg_color = theme.command_bar_fg.to_color();
        self
    }
}

impl Widget for CommandBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut spans = vec![Span::raw(" ")];
        for (i, cmd) in self.commands.iter().enumerate() {
            spans.push(Span::styled(
                cmd.key.clone(),
                Style::default()
                    .fg(self.key_fg_color)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(":{}", cmd.label),
                Style::default().fg(self.label_fg_color),
            ));
            if i < self.commands.len() - 1 {
                spans.push(Span::raw("  "));
            }
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::i18n::Language;

    #[test]
    fn test_default_commands() {
        let bar = CommandBar::new(I18n::new(Language::English));
        assert_eq!(bar.commands.len(), 5);
        assert_eq!(bar.commands[0].key, "F1");
    }

    #[test]
    fn test_commands_localized() {
        let bar = CommandBar::new(I18n::new(Language::Chinese));
        assert_eq!(bar.commands[4].label, "退出");
    }
}
