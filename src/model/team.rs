use serde::{Deserialize, Serialize};

use crate::model::sport::{HasSport, Sport};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub sport: Sport,
    pub members: u32,
    pub max_members: u32,
    pub wins: u32,
    pub losses: u32,
    pub description: String,
    pub image_url: String,
    pub captain: String,
}

impl Team {
    /// Roster places left. Over-full rosters report zero.
    pub fn open_spots(&self) -> u32 {
        self.max_members.saturating_sub(self.members)
    }
}

impl HasSport for Team {
    fn sport(&self) -> Sport {
        self.sport
    }
}
