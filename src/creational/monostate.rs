// Monostate: construct as many Settings as you like, they all read and write
// the same theme.

use lazy_static::lazy_static;
use std::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Old,
    New,
}

lazy_static! {
    static ref THEME: RwLock<Option<Theme>> = RwLock::new(None);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Settings;

impl Settings {
    pub fn new() -> Self {
        Settings
    }

    pub fn current_theme(&self) -> Theme {
        let theme = THEME.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        (*theme).unwrap_or_default()
    }

    pub fn set_current_theme(&self, theme: Theme) {
        let mut current = THEME.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = Some(theme);
    }
}

pub fn screen_title(settings: &Settings) -> &'static str {
    if settings.current_theme() == Theme::Old {
        "Itunes Connect"
    } else {
        "App Store Connect"
    }
}

pub fn screen_color(settings: &Settings) -> &'static str {
    if settings.current_theme() == Theme::Old {
        "gray"
    } else {
        "white"
    }
}
