// Radio group component
//
// Controlled selection: the authoritative key lives in the form model and
// is re-synced into the group state before every render, so the transient
// mirror only bridges the gap between an activation and the next externally
// driven update.
#![allow(dead_code)]

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::models::option::{RadioGroupConfig, SelectionChange};
use crate::ui::Theme;

const OPTION_INDENT: u16 = 2;
const OPTION_GAP: u16 = 3;
const MARKER_CHECKED: &str = "◉ ";
const MARKER_UNCHECKED: &str = "○ ";

/// Transient per-group UI state: the selection mirror and the keyboard
/// hover cursor.
#[derive(Debug, Clone)]
pub struct RadioGroupState {
    selected: String,
    hover: usize,
}

impl RadioGroupState {
    pub fn new(selected: impl Into<String>) -> Self {
        Self {
            selected: selected.into(),
            hover: 0,
        }
    }

    /// Re-bind the mirror to the externally owned selection. Called before
    /// every render; external truth always wins over a stale local copy.
    pub fn sync(&mut self, selected: &str) {
        if self.selected != selected {
            self.selected = selected.to_string();
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Rendering input for a single option.
    pub fn checked(&self, key: &str) -> bool {
        self.selected == key
    }

    /// Number of options this state would render as checked.
    pub fn checked_count(&self, config: &RadioGroupConfig) -> usize {
        config
            .options
            .iter()
            .filter(|option| self.checked(&option.key))
            .count()
    }

    pub fn hover(&self) -> usize {
        self.hover
    }

    pub fn set_hover(&mut self, index: usize) {
        self.hover = index;
    }

    pub fn hover_next(&mut self, config: &RadioGroupConfig) {
        if !config.options.is_empty() {
            self.hover = (self.hover + 1) % config.options.len();
        }
    }

    pub fn hover_prev(&mut self, config: &RadioGroupConfig) {
        if !config.options.is_empty() {
            self.hover = if self.hover == 0 {
                config.options.len() - 1
            } else {
                self.hover - 1
            };
        }
    }

    /// Activate the option with the given key. Updates the mirror first,
    /// then reports the change exactly once; a disabled group or option is
    /// a guaranteed no-op.
    pub fn activate(&mut self, config: &RadioGroupConfig, key: &str) -> Option<SelectionChange> {
        if config.disabled {
            return None;
        }
        let option = config.option(key)?;
        if option.disabled {
            return None;
        }

        self.selected = option.key.clone();
        Some(SelectionChange {
            group_id: config.id.clone(),
            value: option.key.clone(),
            version_tag: option.version_tag.clone(),
        })
    }

    /// Activate the option under the keyboard hover cursor.
    pub fn activate_hovered(&mut self, config: &RadioGroupConfig) -> Option<SelectionChange> {
        let key = config.options.get(self.hover)?.key.clone();
        self.activate(config, &key)
    }
}

/// Column spans of each option within the option row, for mouse
/// hit-testing. Must stay in step with the render layout below.
pub fn option_spans(config: &RadioGroupConfig) -> Vec<(u16, u16)> {
    let mut spans = Vec::with_capacity(config.options.len());
    let mut x = OPTION_INDENT;
    for option in &config.options {
        let width = MARKER_CHECKED.width() as u16 + option.label.width() as u16;
        spans.push((x, width));
        x += width + OPTION_GAP;
    }
    spans
}

/// Option key at the given position, relative to the group's two-row area.
/// A collapsed area renders no option row, so it hit-tests nothing.
pub fn option_at<'a>(config: &'a RadioGroupConfig, area: Rect, x: u16, y: u16) -> Option<&'a str> {
    if area.height < 2 {
        return None;
    }
    // options live on the second row
    if y != area.y + 1 || x < area.x {
        return None;
    }
    let column = x - area.x;
    option_spans(config)
        .iter()
        .zip(&config.options)
        .find(|((start, width), _)| column >= *start && column < start + width)
        .map(|(_, option)| option.key.as_str())
}

/// Radio group widget: a title row and one row of options.
pub struct RadioGroup<'a> {
    config: &'a RadioGroupConfig,
    state: &'a RadioGroupState,
    focused: bool,
    fg_color: Color,
    accent_color: Color,
    disabled_color: Color,
    hover_bg: Color,
    hover_fg: Color,
}

impl<'a> RadioGroup<'a> {
    pub fn new(config: &'a RadioGroupConfig, state: &'a RadioGroupState) -> Self {
        Self {
            config,
            state,
            focused: false,
            fg_color: Color::Rgb(212, 212, 212),
            accent_color: Color::Rgb(109, 179, 63),
            disabled_color: Color::Rgb(100, 100, 100),
            hover_bg: Color::Rgb(0, 120, 212),
            hover_fg: Color::White,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.fg_color = theme.fg_primary.to_color();
        self.accent_color = theme.accent.to_color();
        self.disabled_color = theme.dimmed.to_color();
        self.hover_bg = theme.menu_selected_bg.to_color();
        self.hover_fg = theme.menu_selected_fg.to_color();
        self
    }

    fn option_style(&self, index: usize, checked: bool, disabled: bool) -> Style {
        if disabled {
            return Style::default().fg(self.disabled_color);
        }
        let mut style = if checked {
            Style::default()
                .fg(self.accent_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.fg_color)
        };
        if self.focused && index == self.state.hover() {
            style = style.bg(self.hover_bg).fg(self.hover_fg);
        }
        style
    }
}

impl Widget for RadioGroup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let title_style = if self.focused {
            Style::default()
                .fg(self.accent_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.fg_color)
        };
        let title = Paragraph::new(Line::from(Span::styled(&self.config.title, title_style)));
        title.render(
            Rect {
                height: 1,
                ..area
            },
            buf,
        );

        if area.height < 2 {
            return;
        }

        let mut spans = vec![Span::raw(" ".repeat(OPTION_INDENT as usize))];
        for (i, option) in self.config.options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(OPTION_GAP as usize)));
            }
            let checked = self.state.checked(&option.key);
            let disabled = self.config.disabled || option.disabled;
            let marker = if checked {
                MARKER_CHECKED
            } else {
                MARKER_UNCHECKED
            };
            let style = self.option_style(i, checked, disabled);
            spans.push(Span::styled(format!("{}{}", marker, option.label), style));
        }

        let options_area = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        Paragraph::new(Line::from(spans)).render(options_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::option::RadioOption;

    fn sample_group() -> RadioGroupConfig {
        RadioGroupConfig::new(
            "project",
            "Project",
            vec![
                RadioOption::new("a", "Maven Project", "2.1.8.RELEASE").unwrap(),
                RadioOption::new("b", "Gradle Project", "2.2.0.M5").unwrap(),
            ],
            "a",
        )
        .unwrap()
    }

    #[test]
    fn test_exactly_one_checked_when_selected_matches() {
        let config = sample_group();
        let state = RadioGroupState::new("a");
        assert_eq!(state.checked_count(&config), 1);
        assert!(state.checked("a"));
        assert!(!state.checked("b"));
    }

    #[test]
    fn test_zero_checked_when_selected_matches_none() {
        let config = sample_group();
        let state = RadioGroupState::new("nope");
        assert_eq!(state.checked_count(&config), 0);
    }

    #[test]
    fn test_activate_updates_mirror_then_reports_change() {
        let config = sample_group();
        let mut state = RadioGroupState::new("a");

        let change = state.activate(&config, "b").unwrap();
        // mirror already reflects the new value when the change is delivered
        assert_eq!(state.selected(), "b");
        assert_eq!(change.group_id, "project");
        assert_eq!(change.value, "b");
        assert_eq!(change.version_tag, "2.2.0.M5");
        assert_eq!(state.checked_count(&config), 1);
        assert!(state.checked("b"));
    }

    #[test]
    fn test_activate_disabled_group_is_noop() {
        let config = sample_group().disabled(true);
        let mut state = RadioGroupState::new("a");
        assert!(state.activate(&config, "b").is_none());
        assert_eq!(state.selected(), "a");
    }

    #[test]
    fn test_activate_disabled_option_is_noop() {
        let config = RadioGroupConfig::new(
            "project",
            "Project",
            vec![
                RadioOption::new("a", "Maven Project", "x").unwrap(),
                RadioOption::new("b", "Gradle Project", "x")
                    .unwrap()
                    .disabled(true),
            ],
            "a",
        )
        .unwrap();
        let mut state = RadioGroupState::new("a");
        assert!(state.activate(&config, "b").is_none());
        assert_eq!(state.selected(), "a");
    }

    #[test]
    fn test_activate_unknown_key_is_noop() {
        let config = sample_group();
        let mut state = RadioGroupState::new("a");
        assert!(state.activate(&config, "zzz").is_none());
        assert_eq!(state.selected(), "a");
    }

    #[test]
    fn test_sync_is_idempotent() {
        let config = sample_group();
        let mut state = RadioGroupState::new("a");
        state.sync("b");
        let first = state.selected().to_string();
        state.sync("b");
        assert_eq!(state.selected(), first);
        assert_eq!(state.checked_count(&config), 1);
    }

    #[test]
    fn test_sync_overwrites_stale_mirror() {
        let config = sample_group();
        let mut state = RadioGroupState::new("a");
        state.activate(&config, "b").unwrap();
        // the parent ignored the callback; its truth still says "a"
        state.sync("a");
        assert!(state.checked("a"));
        assert!(!state.checked("b"));
    }

    #[test]
    fn test_hover_wraps() {
        let config = sample_group();
        let mut state = RadioGroupState::new("a");
        assert_eq!(state.hover(), 0);
        state.hover_next(&config);
        assert_eq!(state.hover(), 1);
        state.hover_next(&config);
        assert_eq!(state.hover(), 0);
        state.hover_prev(&config);
        assert_eq!(state.hover(), 1);
    }

    #[test]
    fn test_activate_hovered() {
        let config = sample_group();
        let mut state = RadioGroupState::new("a");
        state.hover_next(&config);
        let change = state.activate_hovered(&config).unwrap();
        assert_eq!(change.value, "b");
    }

    #[test]
    fn test_option_hit_testing() {
        let config = sample_group();
        let area = Rect::new(0, 5, 60, 2);
        let spans = option_spans(&config);
        assert_eq!(spans.len(), 2);

        // first option starts after the indent
        let (start_a, width_a) = spans[0];
        assert_eq!(option_at(&config, area, start_a, 6), Some("a"));
        assert_eq!(option_at(&config, area, start_a + width_a - 1, 6), Some("a"));
        // gap between options hits nothing
        assert_eq!(option_at(&config, area, start_a + width_a, 6), None);

        let (start_b, _) = spans[1];
        assert_eq!(option_at(&config, area, start_b, 6), Some("b"));
        // wrong row hits nothing
        assert_eq!(option_at(&config, area, start_b, 5), None);
    }

    #[test]
    fn test_option_at_ignores_collapsed_area() {
        let config = sample_group();
        let (start, _) = option_spans(&config)[0];
        // a zero-height area's "second row" would be y = 1; it must not match
        assert_eq!(option_at(&config, Rect::default(), start, 1), None);
        assert_eq!(
            option_at(&config, Rect::new(0, 0, 60, 1), start, 1),
            None
        );
    }
}
