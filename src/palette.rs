use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Light or dark color scheme. Serialized as the literal `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Named color tokens read by every screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub cricket: &'static str,
    pub football: &'static str,
    pub tennis: &'static str,
    pub background: &'static str,
    pub background_secondary: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub card: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
}

pub static LIGHT: Palette = Palette {
    primary: "#10B981",
    secondary: "#1E293B",
    cricket: "#4CAF50",
    football: "#2196F3",
    tennis: "#FF9800",
    background: "#FFFFFF",
    background_secondary: "#F8FAFC",
    text: "#1E293B",
    text_secondary: "#475569",
    text_muted: "#64748B",
    border: "#E2E8F0",
    card: "#FFFFFF",
    success: "#10B981",
    warning: "#F59E0B",
    error: "#EF4444",
};

pub static DARK: Palette = Palette {
    primary: "#10B981",
    secondary: "#0F172A",
    cricket: "#4CAF50",
    football: "#2196F3",
    tennis: "#FF9800",
    background: "#0F172A",
    background_secondary: "#1E293B",
    text: "#F8FAFC",
    text_secondary: "#CBD5E1",
    text_muted: "#94A3B8",
    border: "#334155",
    card: "#1E293B",
    success: "#10B981",
    warning: "#F59E0B",
    error: "#EF4444",
};
