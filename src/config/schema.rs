use serde::{Deserialize, Serialize};

pub const DEFAULT_TABLE_HEIGHT: u16 = 7;
pub const DEFAULT_BORDER_COLOR: u8 = 240;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of table rows visible at once
    #[serde(default = "default_table_height")]
    pub table_height: u16,
    /// ANSI 256-colour index used for every border
    #[serde(default = "default_border_color")]
    pub border_color: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_height: DEFAULT_TABLE_HEIGHT,
            border_color: DEFAULT_BORDER_COLOR,
        }
    }
}

fn default_table_height() -> u16 {
    DEFAULT_TABLE_HEIGHT
}

fn default_border_color() -> u8 {
    DEFAULT_BORDER_COLOR
}
