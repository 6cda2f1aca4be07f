//! Colours and styles for the pull request table

use ratatui::prelude::*;

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct Theme {
    /// Single colour shared by every border
    pub border: Color,
    pub title_style: Style,
    pub header_style: Style,
    pub row_selected: Style,
    /// Selection while the table does not have focus
    pub row_selected_unfocused: Style,
    pub muted: Color,
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_error: Color,
}

impl Theme {
    pub fn new(border: Color) -> Self {
        Self {
            border,
            title_style: Style::new().fg(Color::Cyan).bold(),
            header_style: Style::new().fg(Color::Indexed(252)),
            row_selected: Style::new().fg(Color::Indexed(229)).bg(Color::Indexed(57)),
            row_selected_unfocused: Style::new().fg(Color::Indexed(229)).bg(Color::Indexed(238)),
            muted: Color::Gray,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_error: Color::Red,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Color::Indexed(config.border_color))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
