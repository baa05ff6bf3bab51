use std::env;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::palette::ThemeMode;

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Karachi;

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file backing the theme flag.
    pub theme_store_path: PathBuf,
    /// Stand-in for the host color-scheme preference. None when unset or unrecognised.
    pub platform_scheme: Option<ThemeMode>,
    /// Zone used to decide what "today" is when splitting bookings.
    pub timezone: Tz,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_store_path: env::temp_dir().join("theme.json"),
            platform_scheme: None,
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl Config {
    /// `THEME_STORE_PATH`, `PLATFORM_COLOR_SCHEME`, `APP_TIMEZONE`. Bad values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let theme_store_path = lookup("THEME_STORE_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.theme_store_path);

        let platform_scheme = lookup("PLATFORM_COLOR_SCHEME").and_then(|s| match s.parse::<ThemeMode>() {
            Ok(mode) => Some(mode),
            Err(e) => {
                warn!(error = %e, "Ignoring PLATFORM_COLOR_SCHEME");
                None
            }
        });

        let timezone = lookup("APP_TIMEZONE")
            .and_then(|s| match s.parse::<Tz>() {
                Ok(tz) => Some(tz),
                Err(e) => {
                    warn!(error = %e, "Ignoring APP_TIMEZONE");
                    None
                }
            })
            .unwrap_or(defaults.timezone);

        Self { theme_store_path, platform_scheme, timezone }
    }

    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}
