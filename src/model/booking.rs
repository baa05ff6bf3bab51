use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::arena::TimeSlot;
use crate::model::money::Rupees;
use crate::model::sport::Sport;
use crate::palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn color(&self, palette: &Palette) -> &'static str {
        match self {
            BookingStatus::Confirmed => palette.success,
            BookingStatus::Pending => palette.warning,
            BookingStatus::Cancelled => palette.error,
        }
    }
}

/// Which half of the bookings list to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingTab {
    #[default]
    Upcoming,
    Past,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub arena_id: String,
    pub arena_name: String,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub total_price: Rupees,
    pub status: BookingStatus,
    pub sport: Sport,
}

impl Booking {
    pub fn in_tab(&self, tab: BookingTab, today: NaiveDate) -> bool {
        match tab {
            BookingTab::Upcoming => self.date >= today,
            BookingTab::Past => self.date < today,
        }
    }
}
