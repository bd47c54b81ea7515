// 404 view - shown for an unknown route argument
//
// A banner plus two navigation fallbacks: back to the form, or the
// project site in the browser.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::i18n::{I18n, TextKey};
use crate::ui::Theme;

/// Number of selectable fallback links.
pub const LINK_COUNT: usize = 2;

const LINK_INDENT: u16 = 2;
const FIRST_LINK_ROW: u16 = 4;

/// Row of each link relative to the view area, for mouse hit-testing.
pub fn link_at(area: Rect, x: u16, y: u16) -> Option<usize> {
    if x < area.x + LINK_INDENT || x >= area.x + area.width {
        return None;
    }
    let row = y.checked_sub(area.y + FIRST_LINK_ROW)?;
    ((row as usize) < LINK_COUNT).then_some(row as usize)
}

pub struct NotFoundScreen {
    i18n: I18n,
    hover: usize,
    fg_color: Color,
    error_color: Color,
    link_color: Color,
    hover_bg: Color,
    hover_fg: Color,
}

impl NotFoundScreen {
    pub fn new(i18n: I18n) -> Self {
        Self {
            i18n,
            hover: 0,
            fg_color: Color::Rgb(212, 212, 212),
            error_color: Color::Red,
            link_color: Color::Rgb(55, 148, 255),
            hover_bg: Color::Rgb(0, 120, 212),
            hover_fg: Color::White,
        }
    }

    pub fn hover(mut self, hover: usize) -> Self {
        self.hover = hover;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.fg_color = theme.fg_primary.to_color();
        self.error_color = theme.error.to_color();
        self.link_color = theme.link.to_color();
        self.hover_bg = theme.menu_selected_bg.to_color();
        self.hover_fg = theme.menu_selected_fg.to_color();
        self
    }

    fn link_line(&self, index: usize, key: TextKey) -> Line<'_> {
        let style = if index == self.hover {
            Style::default().fg(self.hover_fg).bg(self.hover_bg)
        } else {
            Style::default().fg(self.link_color)
        };
        Line::from(vec![
            Span::raw(" ".repeat(LINK_INDENT as usize)),
            Span::styled(self.i18n.tr(key), style),
        ])
    }
}

impl Widget for NotFoundScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let banner = Line::from(vec![
            Span::styled(
                "/404",
                Style::default()
                    .fg(self.error_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  NOT FOUND",
                Style::default()
                    .fg(self.fg_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let hint = Line::from(Span::styled(
            self.i18n.tr(TextKey::NotFoundHint),
            Style::default().fg(self.fg_color),
        ));

        let lines = vec![
            banner,
            Line::default(),
            hint,
            Line::default(),
            self.link_line(0, TextKey::NotFoundStart),
            self.link_line(1, TextKey::NotFoundSite),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::i18n::Language;

    #[test]
    fn test_link_hit_testing() {
        let area = Rect::new(0, 3, 60, 10);
        assert_eq!(link_at(area, LINK_INDENT, 3 + FIRST_LINK_ROW), Some(0));
        assert_eq!(link_at(area, 10, 3 + FIRST_LINK_ROW + 1), Some(1));
        // above the links / past them
        assert_eq!(link_at(area, 10, 3 + FIRST_LINK_ROW - 1), None);
        assert_eq!(link_at(area, 10, 3 + FIRST_LINK_ROW + 2), None);
        // left of the indent
        assert_eq!(link_at(area, 0, 3 + FIRST_LINK_ROW), None);
    }

    #[test]
    fn test_banner_rendered() {
        let screen = NotFoundScreen::new(I18n::new(Language::English));
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf);

        let first_row: String = (0..60)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert!(first_row.contains("/404"));
        assert!(first_row.contains("NOT FOUND"));
    }
}
