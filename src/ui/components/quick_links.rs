// Quick-links component - the header dropdown menus
//
// Two toggleable menus (language switch, help links). A menu closes on a
// repeat toggle, on item activation, or on a pointer press outside its
// rendered bounds; the outside-press routing lives in the app, driven by
// the geometry helpers here so hit-testing stays in step with rendering.
#![allow(dead_code)]

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::i18n::{I18n, TextKey};
use crate::ui::Theme;
use crate::utils::error::{Result, StartuiError};

const CARET: &str = " ▾";
const TOGGLE_GAP: u16 = 2;
const RIGHT_MARGIN: u16 = 1;

/// A single menu entry: an internal or external link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkItem {
    pub id: String,
    pub label: String,
    pub href: String,
    pub external: bool,
}

impl LinkItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        href: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        let label = label.into();
        let href = href.into();
        if id.is_empty() || label.is_empty() || href.is_empty() {
            return Err(StartuiError::Config(
                "link item requires a non-empty id, label and href".to_string(),
            ));
        }
        Ok(Self {
            id,
            label,
            href,
            external: false,
        })
    }

    pub fn external(mut self, external: bool) -> Self {
        self.external = external;
        self
    }
}

/// Which dropdown a toggle or press refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickMenu {
    Language,
    Help,
}

impl QuickMenu {
    pub fn toggle_label(self, i18n: I18n) -> String {
        let key = match self {
            QuickMenu::Language => TextKey::QuickLanguage,
            QuickMenu::Help => TextKey::QuickHelp,
        };
        format!("{}{}", i18n.tr(key), CARET)
    }
}

/// Navigation request produced by activating a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub href: String,
    pub external: bool,
}

/// Open/closed state of the quick-links menus. At most one menu is open.
#[derive(Debug, Clone, Default)]
pub struct QuickLinksState {
    open: Option<QuickMenu>,
    hover: usize,
}

impl QuickLinksState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_menu(&self) -> Option<QuickMenu> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn hover(&self) -> usize {
        self.hover
    }

    pub fn open(&mut self, menu: QuickMenu) {
        self.open = Some(menu);
        self.hover = 0;
    }

    pub fn close(&mut self) {
        self.open = None;
        self.hover = 0;
    }

    /// Flip a menu: opening it closes the other one.
    pub fn toggle(&mut self, menu: QuickMenu) {
        if self.open == Some(menu) {
            self.close();
        } else {
            self.open(menu);
        }
    }

    pub fn hover_next(&mut self, item_count: usize) {
        if item_count > 0 {
            self.hover = (self.hover + 1) % item_count;
        }
    }

    pub fn hover_prev(&mut self, item_count: usize) {
        if item_count > 0 {
            self.hover = if self.hover == 0 {
                item_count - 1
            } else {
                self.hover - 1
            };
        }
    }

    pub fn set_hover(&mut self, index: usize) {
        self.hover = index;
    }

    /// Activate the hovered item: the menu closes first, then the item's
    /// navigation is handed to the caller.
    pub fn activate(&mut self, items: &[LinkItem]) -> Option<Navigation> {
        let item = items.get(self.hover)?;
        let navigation = Navigation {
            href: item.href.clone(),
            external: item.external,
        };
        self.close();
        Some(navigation)
    }
}

/// Toggle rects on the quick-links row, right-aligned in render order.
pub fn toggle_rects(area: Rect, i18n: I18n) -> [(QuickMenu, Rect); 2] {
    let lang_width = QuickMenu::Language.toggle_label(i18n).width() as u16;
    let help_width = QuickMenu::Help.toggle_label(i18n).width() as u16;

    let help_x = (area.x + area.width)
        .saturating_sub(RIGHT_MARGIN + help_width)
        .max(area.x);
    let lang_x = help_x.saturating_sub(TOGGLE_GAP + lang_width).max(area.x);

    [
        (
            QuickMenu::Language,
            Rect {
                x: lang_x,
                y: area.y,
                width: lang_width,
                height: 1,
            },
        ),
        (
            QuickMenu::Help,
            Rect {
                x: help_x,
                y: area.y,
                width: help_width,
                height: 1,
            },
        ),
    ]
}

/// Toggle under the given position, if any.
pub fn toggle_at(area: Rect, i18n: I18n, x: u16, y: u16) -> Option<QuickMenu> {
    toggle_rects(area, i18n)
        .into_iter()
        .find(|(_, rect)| rect_contains(*rect, x, y))
        .map(|(menu, _)| menu)
}

/// The open menu's dropdown rect: a bordered panel below its toggle,
/// clamped to the screen.
pub fn menu_rect(
    menu: QuickMenu,
    quick_links_area: Rect,
    screen: Rect,
    items: &[LinkItem],
    i18n: I18n,
) -> Rect {
    let toggle = toggle_rects(quick_links_area, i18n)
        .into_iter()
        .find(|(kind, _)| *kind == menu)
        .map(|(_, rect)| rect)
        .unwrap_or_default();

    let max_label = items
        .iter()
        .map(|item| item.label.width())
        .max()
        .unwrap_or(0) as u16;
    let width = (max_label + 4).max(toggle.width + 2);
    let height = items.len() as u16 + 2;

    let x = (toggle.x + toggle.width)
        .saturating_sub(width)
        .min(toggle.x)
        .max(screen.x);
    let x = x.min((screen.x + screen.width).saturating_sub(width));

    Rect {
        x,
        y: toggle.y + 1,
        width: width.min(screen.width),
        height: height.min(screen.height.saturating_sub(toggle.y + 1)),
    }
}

/// Item index at the given position inside an open dropdown rect.
pub fn item_at(menu_area: Rect, items: &[LinkItem], x: u16, y: u16) -> Option<usize> {
    if !rect_contains(menu_area, x, y) {
        return None;
    }
    // skip the border rows
    if y <= menu_area.y || y >= menu_area.y + menu_area.height - 1 {
        return None;
    }
    let index = (y - menu_area.y - 1) as usize;
    (index < items.len()).then_some(index)
}

pub fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// The quick-links row: both toggles, the open one highlighted.
pub struct QuickLinksBar<'a> {
    state: &'a QuickLinksState,
    i18n: I18n,
    fg_color: Color,
    open_bg: Color,
    open_fg: Color,
}

impl<'a> QuickLinksBar<'a> {
    pub fn new(state: &'a QuickLinksState, i18n: I18n) -> Self {
        Self {
            state,
            i18n,
            fg_color: Color::Rgb(212, 212, 212),
            open_bg: Color::Rgb(0, 120, 212),
            open_fg: Color::White,
        }
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.fg_color = theme.link.to_color();
        self.open_bg = theme.menu_selected_bg.to_color();
        self.open_fg = theme.menu_selected_fg.to_color();
        self
    }
}

impl Widget for QuickLinksBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (menu, rect) in toggle_rects(area, self.i18n) {
            let style = if self.state.open_menu() == Some(menu) {
                Style::default().fg(self.open_fg).bg(self.open_bg)
            } else {
                Style::default().fg(self.fg_color)
            };
            let label = menu.toggle_label(self.i18n);
            buf.set_span(rect.x, rect.y, &Span::styled(label, style), rect.width);
        }
    }
}

/// The open dropdown panel. Rendered last so it overlays the page.
pub struct QuickLinksDropdown<'a> {
    items: &'a [LinkItem],
    state: &'a QuickLinksState,
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    selected_bg: Color,
    selected_fg: Color,
    external_marker_color: Color,
}

impl<'a> QuickLinksDropdown<'a> {
    pub fn new(items: &'a [LinkItem], state: &'a QuickLinksState) -> Self {
        Self {
            items,
            state,
            bg_color: Color::Rgb(45, 45, 45),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(60, 60, 60),
            selected_bg: Color::Rgb(0, 120, 212),
            selected_fg: Color::White,
            external_marker_color: Color::Rgb(150, 150, 150),
        }
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.menu_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.border_color = theme.menu_border.to_color();
        self.selected_bg = theme.menu_selected_bg.to_color();
        self.selected_fg = theme.menu_selected_fg.to_color();
        self.external_marker_color = theme.dimmed.to_color();
        self
    }
}

impl Widget for QuickLinksDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.items.is_empty() || area.height < 3 {
            return;
        }

        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color));
        block.render(area, buf);

        for (i, item) in self.items.iter().enumerate() {
            if i as u16 + 1 >= area.height - 1 {
                break;
            }
            let y = area.y + 1 + i as u16;
            let is_selected = i == self.state.hover();
            let (bg, fg) = if is_selected {
                (self.selected_bg, self.selected_fg)
            } else {
                (self.bg_color, self.fg_color)
            };

            for x in area.x + 1..area.x + area.width - 1 {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(bg);
                }
            }
            let style = Style::default().fg(fg).bg(bg);
            buf.set_span(area.x + 1, y, &Span::styled(&item.label, style), area.width - 2);

            if item.external {
                let marker_style = if is_selected {
                    Style::default().fg(self.selected_fg).bg(bg)
                } else {
                    Style::default().fg(self.external_marker_color).bg(bg)
                };
                let marker_x = area.x + area.width - 2;
                buf.set_span(marker_x, y, &Span::styled("↗", marker_style), 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::i18n::Language;

    fn sample_items() -> Vec<LinkItem> {
        vec![
            LinkItem::new("lang-zh", "中文", "/?lang=zh&random=7").unwrap(),
            LinkItem::new("lang-en", "English", "/?lang=en&random=7").unwrap(),
        ]
    }

    #[test]
    fn test_link_item_rejects_empty_fields() {
        assert!(LinkItem::new("", "中文", "/x").is_err());
        assert!(LinkItem::new("lang-zh", "", "/x").is_err());
        assert!(LinkItem::new("lang-zh", "中文", "").is_err());
    }

    #[test]
    fn test_toggle_cycle() {
        let mut state = QuickLinksState::new();
        assert!(!state.is_open());

        state.toggle(QuickMenu::Help);
        assert_eq!(state.open_menu(), Some(QuickMenu::Help));

        // repeat toggle closes
        state.toggle(QuickMenu::Help);
        assert!(!state.is_open());

        // opening the other menu replaces the open one
        state.toggle(QuickMenu::Help);
        state.toggle(QuickMenu::Language);
        assert_eq!(state.open_menu(), Some(QuickMenu::Language));
    }

    #[test]
    fn test_activate_closes_then_navigates() {
        let items = sample_items();
        let mut state = QuickLinksState::new();
        state.open(QuickMenu::Language);
        state.hover_next(items.len());

        let navigation = state.activate(&items).unwrap();
        assert!(!state.is_open());
        assert_eq!(navigation.href, "/?lang=en&random=7");
        assert!(!navigation.external);
    }

    #[test]
    fn test_activate_out_of_range_is_noop() {
        let mut state = QuickLinksState::new();
        state.open(QuickMenu::Language);
        state.set_hover(99);
        assert!(state.activate(&sample_items()).is_none());
    }

    #[test]
    fn test_hover_wraps() {
        let mut state = QuickLinksState::new();
        state.open(QuickMenu::Help);
        state.hover_prev(3);
        assert_eq!(state.hover(), 2);
        state.hover_next(3);
        assert_eq!(state.hover(), 0);
    }

    #[test]
    fn test_toggle_rects_right_aligned() {
        let i18n = I18n::new(Language::English);
        let area = Rect::new(0, 0, 80, 1);
        let [(_, lang_rect), (_, help_rect)] = toggle_rects(area, i18n);

        assert!(lang_rect.x + lang_rect.width + TOGGLE_GAP <= help_rect.x);
        assert_eq!(help_rect.x + help_rect.width + RIGHT_MARGIN, 80);

        assert_eq!(
            toggle_at(area, i18n, lang_rect.x, 0),
            Some(QuickMenu::Language)
        );
        assert_eq!(toggle_at(area, i18n, help_rect.x, 0), Some(QuickMenu::Help));
        assert_eq!(toggle_at(area, i18n, 0, 0), None);
    }

    #[test]
    fn test_toggle_rects_cjk_width() {
        // "语言 ▾" and "帮助文档 ▾" occupy double-width cells
        let i18n = I18n::new(Language::Chinese);
        let area = Rect::new(0, 0, 80, 1);
        let [(_, lang_rect), (_, help_rect)] = toggle_rects(area, i18n);
        assert_eq!(lang_rect.width, "语言 ▾".width() as u16);
        assert_eq!(help_rect.width, "帮助文档 ▾".width() as u16);
    }

    #[test]
    fn test_menu_rect_and_item_hit_testing() {
        let i18n = I18n::new(Language::English);
        let screen = Rect::new(0, 0, 80, 24);
        let quick_links = Rect::new(0, 0, 80, 1);
        let items = sample_items();

        let rect = menu_rect(QuickMenu::Language, quick_links, screen, &items, i18n);
        assert_eq!(rect.y, 1);
        assert_eq!(rect.height, items.len() as u16 + 2);
        assert!(rect.x + rect.width <= 80);

        // first item row is just inside the border
        assert_eq!(item_at(rect, &items, rect.x + 1, rect.y + 1), Some(0));
        assert_eq!(item_at(rect, &items, rect.x + 1, rect.y + 2), Some(1));
        // border rows hit nothing
        assert_eq!(item_at(rect, &items, rect.x + 1, rect.y), None);
        assert_eq!(
            item_at(rect, &items, rect.x + 1, rect.y + rect.height - 1),
            None
        );
        // outside the rect entirely
        assert_eq!(item_at(rect, &items, 0, 20), None);
    }
}
