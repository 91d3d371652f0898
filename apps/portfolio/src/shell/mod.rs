//! Per-page-view context: theme plus the toast surface.
//!
//! A `ShellContext` is built when a page view starts and dropped with it.
//! Nothing here is process-global.

pub mod toast;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub use toast::{Toast, ToastVariant, Toaster};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}' (expected 'light' or 'dark')")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShellContext {
    pub theme: Theme,
    pub toaster: Toaster,
}

impl ShellContext {
    pub fn mount(theme: Theme, toast_duration_ms: u64) -> Self {
        Self {
            theme,
            toaster: Toaster::new(toast_duration_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parses_case_insensitively() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_mount_starts_without_toasts() {
        let shell = ShellContext::mount(Theme::Dark, 2_500);
        assert!(shell.toaster.latest().is_none());
        assert_eq!(shell.theme.to_string(), "dark");
    }
}
