use serde::{Deserialize, Serialize};

use crate::model::money::{Rating, Rupees};
use crate::model::sport::{HasSport, Sport};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    pub id: String,
    pub name: String,
    pub sport: Sport,
    pub rating: Rating,
    /// Years coaching.
    pub experience: u32,
    /// Per session.
    pub price: Rupees,
    pub image_url: String,
    pub description: String,
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Weekday names, e.g. "Monday".
    #[serde(default)]
    pub availability: Vec<String>,
}

impl HasSport for Coach {
    fn sport(&self) -> Sport {
        self.sport
    }
}
