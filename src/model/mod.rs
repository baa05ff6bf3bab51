pub mod arena;
pub mod booking;
pub mod coach;
pub mod money;
pub mod sport;
pub mod team;
pub mod user;

pub use arena::{Arena, TimeSlot};
pub use booking::{Booking, BookingStatus, BookingTab};
pub use coach::Coach;
pub use money::{Rating, Rupees};
pub use sport::{HasSport, Sport, SportFilter};
pub use team::Team;
pub use user::{Registration, Role, User};
