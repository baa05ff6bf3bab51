use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::model::money::{Rating, Rupees};
use crate::model::sport::{HasSport, Sport};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arena {
    pub id: String,
    pub name: String,
    pub sport: Sport,
    pub location: String,
    pub rating: Rating,
    pub price: Rupees,
    pub image_url: String,
    pub description: String,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub availability: Vec<TimeSlot>,
}

impl Arena {
    pub fn slot(&self, slot_id: &str) -> Option<&TimeSlot> {
        self.availability.iter().find(|s| s.id == slot_id)
    }

    pub fn open_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.availability.iter().filter(|s| s.is_available)
    }
}

impl HasSport for Arena {
    fn sport(&self) -> Sport {
        self.sport
    }
}

/// A bookable interval. Times are kept as the `HH:MM` strings the fixtures carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
    pub price: Rupees,
}

impl TimeSlot {
    /// Length of the slot, or None when either end is not `HH:MM` or end <= start.
    pub fn duration_minutes(&self) -> Option<i64> {
        let start = NaiveTime::parse_from_str(&self.start_time, "%H:%M").ok()?;
        let end = NaiveTime::parse_from_str(&self.end_time, "%H:%M").ok()?;
        let mins = (end - start).num_minutes();
        (mins > 0).then_some(mins)
    }
}
