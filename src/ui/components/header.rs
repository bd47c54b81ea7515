// Page header component
//
// Localized title and description. The quick-links row is rendered on top
// of the first header line by the caller.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::i18n::{I18n, TextKey};
use crate::ui::Theme;

pub struct PageHeader {
    i18n: I18n,
    fg_color: Color,
    strong_color: Color,
    dimmed_color: Color,
}

impl PageHeader {
    pub fn new(i18n: I18n) -> Self {
        Self {
            i18n,
            fg_color: Color::Rgb(212, 212, 212),
            strong_color: Color::Rgb(109, 179, 63),
            dimmed_color: Color::Rgb(150, 150, 150),
        }
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.fg_color = theme.fg_primary.to_color();
        self.strong_color = theme.header_strong.to_color();
        self.dimmed_color = theme.dimmed.to_color();
        self
    }
}

impl Widget for PageHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::styled(
                self.i18n.tr(TextKey::HeaderTitle),
                Style::default()
                    .fg(self.fg_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                self.i18n.tr(TextKey::HeaderTitleStrong),
                Style::default()
                    .fg(self.strong_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let description = Line::from(Span::styled(
            self.i18n.tr(TextKey::HeaderDescription),
            Style::default().fg(self.dimmed_color),
        ));

        Paragraph::new(vec![title, description]).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::i18n::Language;

    #[test]
    fn test_header_renders_localized_title() {
        let header = PageHeader::new(I18n::new(Language::English));
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        header.render(area, &mut buf);

        let first_row: String = (0..60)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert!(first_row.contains("Base Framework"));
        assert!(first_row.contains("Initializr"));
    }
}
