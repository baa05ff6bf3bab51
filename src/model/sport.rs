use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Accent used when a sport name is not one we know about.
pub const DEFAULT_ACCENT: &str = "#10B981";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Cricket,
    Football,
    Tennis,
}

impl Sport {
    pub const ALL: [Sport; 3] = [Sport::Cricket, Sport::Football, Sport::Tennis];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Cricket => "cricket",
            Sport::Football => "football",
            Sport::Tennis => "tennis",
        }
    }

    /// Fixed display color for this sport. Identical in both palettes.
    pub fn color(&self) -> &'static str {
        match self {
            Sport::Cricket => "#4CAF50",
            Sport::Football => "#2196F3",
            Sport::Tennis => "#FF9800",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cricket" => Ok(Sport::Cricket),
            "football" => Ok(Sport::Football),
            "tennis" => Ok(Sport::Tennis),
            other => Err(format!("unknown sport: {}", other)),
        }
    }
}

/// Color for a raw sport name. Unrecognized names get [`DEFAULT_ACCENT`].
pub fn sport_color(name: &str) -> &'static str {
    name.parse::<Sport>()
        .map(|s| s.color())
        .unwrap_or(DEFAULT_ACCENT)
}

/// Sport selector used by every listing: a single sport, or `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SportFilter {
    #[default]
    All,
    Only(Sport),
}

impl SportFilter {
    pub fn matches(&self, sport: Sport) -> bool {
        match self {
            SportFilter::All => true,
            SportFilter::Only(s) => *s == sport,
        }
    }
}

impl From<Sport> for SportFilter {
    fn from(sport: Sport) -> Self {
        SportFilter::Only(sport)
    }
}

impl FromStr for SportFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(SportFilter::All)
        } else {
            s.parse::<Sport>().map(SportFilter::Only)
        }
    }
}

impl TryFrom<String> for SportFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SportFilter> for String {
    fn from(filter: SportFilter) -> Self {
        match filter {
            SportFilter::All => "all".to_string(),
            SportFilter::Only(s) => s.as_str().to_string(),
        }
    }
}

/// Anything listed under a sport tab.
pub trait HasSport {
    fn sport(&self) -> Sport;
}

/// Keep the items whose sport passes `filter`, in source order.
pub fn filter_by_sport<'a, T, I>(items: I, filter: SportFilter) -> Vec<&'a T>
where
    T: HasSport + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().filter(|item| filter.matches(item.sport())).collect()
}
