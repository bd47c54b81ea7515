// Status bar component
//
// Selection summary line; a transient toast takes priority while active.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::Theme;

pub struct StatusBar<'a> {
    summary: &'a str,
    toast: Option<&'a str>,
    bg_color: Color,
    fg_color: Color,
    toast_color: Color,
}

impl<'a> StatusBar<'a> {
    pub fn new(summary: &'a str) -> Self {
        Self {
            summary,
            toast: None,
            bg_color: Color::Rgb(37, 37, 38),
            fg_color: Color::Rgb(212, 212, 212),
            toast_color: Color::Green,
        }
    }

    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.toast_color = theme.success.to_color();
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let line = match self.toast {
            Some(toast) => Line::from(Span::styled(
                format!(" {}", toast),
                Style::default()
                    .fg(self.toast_color)
                    .add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(
                format!(" {}", self.summary),
                Style::default().fg(self.fg_color),
            )),
        };
        Paragraph::new(line).render(area, buf);
    }
}
