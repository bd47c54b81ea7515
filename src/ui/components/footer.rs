// Page footer component
//
// Copyright range and the powered-by links.
#![allow(dead_code)]

use chrono::{Datelike, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::i18n::{I18n, TextKey};
use crate::ui::Theme;

pub const INITIALIZR_DOCS_URL: &str = "https://wiki.megvii-inc.com/x/zQ1wB";
pub const HOSTING_URL: &str = "https://run.pivotal.io/";

const INITIALIZR_LINK_LABEL: &str = "Base Framework Initializr";
const HOSTING_LINK_LABEL: &str = "Pivotal Web Services";
const LINK_SEPARATOR: &str = " and ";
const LINK_ROW: u16 = 2;

/// Column spans of the two powered-by links on their row, for mouse
/// hit-testing. Must stay in step with the render layout below.
fn link_spans() -> [(u16, u16); 2] {
    let first_width = INITIALIZR_LINK_LABEL.width() as u16;
    let second_x = first_width + LINK_SEPARATOR.width() as u16;
    [
        (0, first_width),
        (second_x, HOSTING_LINK_LABEL.width() as u16),
    ]
}

/// Link URL at the given position, relative to the footer area.
pub fn link_at(area: Rect, x: u16, y: u16) -> Option<&'static str> {
    if area.height <= LINK_ROW || y != area.y + LINK_ROW || x < area.x {
        return None;
    }
    let column = x - area.x;
    let [(docs_x, docs_width), (hosting_x, hosting_width)] = link_spans();
    if column >= docs_x && column < docs_x + docs_width {
        Some(INITIALIZR_DOCS_URL)
    } else if column >= hosting_x && column < hosting_x + hosting_width {
        Some(HOSTING_URL)
    } else {
        None
    }
}

pub struct PageFooter {
    i18n: I18n,
    year: i32,
    fg_color: Color,
    link_color: Color,
    dimmed_color: Color,
}

impl PageFooter {
    pub fn new(i18n: I18n) -> Self {
        Self {
            i18n,
            year: Local::now().year(),
            fg_color: Color::Rgb(212, 212, 212),
            link_color: Color::Rgb(55, 148, 255),
            dimmed_color: Color::Rgb(150, 150, 150),
        }
    }

    /// Fixed year for deterministic tests.
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.fg_color = theme.fg_primary.to_color();
        self.link_color = theme.link.to_color();
        self.dimmed_color = theme.dimmed.to_color();
        self
    }
}

impl Widget for PageFooter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let copyright = Line::from(Span::styled(
            format!("© 2019.8-{} Pivotal Software", self.year),
            Style::default().fg(self.dimmed_color),
        ));
        let powered_by = Line::from(Span::styled(
            self.i18n.tr(TextKey::FooterPoweredBy).to_string(),
            Style::default().fg(self.dimmed_color),
        ));
        let links = Line::from(vec![
            Span::styled(
                INITIALIZR_LINK_LABEL,
                Style::default().fg(self.link_color),
            ),
            Span::styled(LINK_SEPARATOR, Style::default().fg(self.fg_color)),
            Span::styled(HOSTING_LINK_LABEL, Style::default().fg(self.link_color)),
        ]);

        Paragraph::new(vec![copyright, powered_by, links]).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::i18n::Language;

    #[test]
    fn test_footer_copyright_range() {
        let footer = PageFooter::new(I18n::new(Language::English)).year(2026);
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        footer.render(area, &mut buf);

        let first_row: String = (0..60)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert!(first_row.contains("© 2019.8-2026"));
    }

    #[test]
    fn test_link_hit_testing() {
        let area = Rect::new(0, 19, 60, 3);
        let [(docs_x, docs_width), (hosting_x, _)] = link_spans();

        assert_eq!(link_at(area, docs_x, 21), Some(INITIALIZR_DOCS_URL));
        assert_eq!(link_at(area, hosting_x, 21), Some(HOSTING_URL));
        // the separator between the links hits nothing
        assert_eq!(link_at(area, docs_x + docs_width, 21), None);
        // wrong row hits nothing
        assert_eq!(link_at(area, docs_x, 20), None);
    }
}
