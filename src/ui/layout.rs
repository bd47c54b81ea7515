// Layout system
//
// Single-column page layout:
// header (title + quick links) | form body | footer | status bar | command bar
// Terminals below the minimum size get a warning screen instead.
#![allow(dead_code)]

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Minimum terminal size. The Chinese labels need the extra width.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Normal page layout
    Standard,
    /// Terminal too small, warning only
    TooSmall,
}

/// Computed layout areas
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// Header block (title, description)
    pub header: Rect,
    /// Quick-links row, the top line of the header
    pub quick_links: Rect,
    /// Main content (form or 404 view)
    pub body: Rect,
    /// Footer block
    pub footer: Rect,
    /// Selection summary / toast line
    pub status_bar: Rect,
    /// Key hints line
    pub command_bar: Rect,
    /// Warning area (TooSmall mode)
    pub warning: Rect,
}

#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::Standard,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }

    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else {
            LayoutMode::Standard
        }
    }

    /// Recalculate on every frame from the current terminal area.
    pub fn update(&mut self, area: Rect) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height);
        self.areas = self.calculate_areas(area);
    }

    fn calculate_areas(&self, area: Rect) -> LayoutAreas {
        if self.mode == LayoutMode::TooSmall {
            return LayoutAreas {
                warning: area,
                ..Default::default()
            };
        }

        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(8),    // body
                Constraint::Length(3), // footer
                Constraint::Length(1), // status bar
                Constraint::Length(1), // command bar
            ])
            .split(area);

        let header = vertical_chunks[0];
        let quick_links = Rect {
            height: 1.min(header.height),
            ..header
        };

        LayoutAreas {
            header,
            quick_links,
            body: vertical_chunks[1],
            footer: vertical_chunks[2],
            status_bar: vertical_chunks[3],
            command_bar: vertical_chunks[4],
            warning: Rect::default(),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn is_too_small(&self) -> bool {
        matches!(self.mode, LayoutMode::TooSmall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_mode() {
        assert_eq!(LayoutManager::determine_mode(80, 24), LayoutMode::Standard);
        assert_eq!(LayoutManager::determine_mode(60, 16), LayoutMode::Standard);
        assert_eq!(LayoutManager::determine_mode(59, 24), LayoutMode::TooSmall);
        assert_eq!(LayoutManager::determine_mode(80, 15), LayoutMode::TooSmall);
    }

    #[test]
    fn test_areas_partition() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 80, 24));
        let areas = manager.areas();

        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.quick_links.height, 1);
        assert_eq!(areas.footer.height, 3);
        assert_eq!(areas.status_bar.height, 1);
        assert_eq!(areas.command_bar.height, 1);
        assert_eq!(areas.body.height, 24 - 3 - 3 - 1 - 1);
        assert_eq!(
            areas.body.y,
            areas.header.y + areas.header.height
        );
    }

    #[test]
    fn test_too_small_uses_warning_area() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 30, 10));
        assert!(manager.is_too_small());
        assert_eq!(manager.areas().warning, Rect::new(0, 0, 30, 10));
        assert_eq!(manager.areas().body, Rect::default());
    }
}
