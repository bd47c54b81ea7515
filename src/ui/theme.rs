// Color theme system
//
// Hex strings keep the palette serializable, so a theme could be loaded
// from TOML later without changing the component API.
#![allow(dead_code)]

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    // base
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,
    pub accent: ColorDef,
    pub dimmed: ColorDef,

    // header / footer chrome
    pub header_strong: ColorDef,
    pub link: ColorDef,

    // dropdown menus
    pub menu_bg: ColorDef,
    pub menu_border: ColorDef,
    pub menu_selected_bg: ColorDef,
    pub menu_selected_fg: ColorDef,

    // bars
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,

    // accents
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// Color definition, hex ("#1e1e1e") or named ("Red").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),
            accent: "#6db33f".into(),
            dimmed: "#646464".into(),
            header_strong: "#6db33f".into(),
            link: "#3794ff".into(),
            menu_bg: "#2d2d2d".into(),
            menu_border: "#3c3c3c".into(),
            menu_selected_bg: "#0078d4".into(),
            menu_selected_fg: "#ffffff".into(),
            status_bar_bg: "#252526".into(),
            status_bar_fg: "#d4d4d4".into(),
            command_bar_bg: "#1e1e1e".into(),
            command_bar_fg: "#d4d4d4".into(),
            warning: "Yellow".into(),
            error: "Red".into(),
            success: "Green".into(),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Theme {
            bg_primary: "#f5f5f5".into(),
            fg_primary: "#1e1e1e".into(),
            accent: "#34802d".into(),
            dimmed: "#969696".into(),
            header_strong: "#34802d".into(),
            link: "#0066bf".into(),
            menu_bg: "#ffffff".into(),
            menu_border: "#c8c8c8".into(),
            menu_selected_bg: "#0066bf".into(),
            menu_selected_fg: "#ffffff".into(),
            status_bar_bg: "#e8e8e8".into(),
            status_bar_fg: "#1e1e1e".into(),
            command_bar_bg: "#f5f5f5".into(),
            command_bar_fg: "#1e1e1e".into(),
            warning: "Yellow".into(),
            error: "Red".into(),
            success: "Green".into(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Owns the active theme and flips between the built-in ones.
#[derive(Debug)]
pub struct ThemeManager {
    current: Theme,
    name: &'static str,
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeManager {
    pub fn new() -> Self {
        Self {
            current: Theme::dark(),
            name: "dark",
        }
    }

    pub fn current(&self) -> &Theme {
        &self.current
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn toggle(&mut self) -> &'static str {
        if self.name == "dark" {
            self.current = Theme::light();
            self.name = "light";
        } else {
            self.current = Theme::dark();
            self.name = "dark";
        }
        self.name
    }
}
