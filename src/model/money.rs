use std::fmt;

use serde::{Deserialize, Serialize};

/// Whole Pakistani rupees. The catalog never deals in paisa, so there is no minor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupees(pub u32);

impl fmt::Display for Rupees {
    /// `Rs. 3,500`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "Rs. {}", grouped)
    }
}

/// A 0-5 star rating kept in tenths so equality and ordering are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(u8);

impl TryFrom<f64> for Rating {
    type Error = String;

    /// Rounds to the nearest tenth; anything outside 0..=5 is rejected.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || !(0.0..=5.0).contains(&value) {
            return Err(format!("rating out of range: {}", value));
        }
        Ok(Rating((value * 10.0).round() as u8))
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        f64::from(rating.0) / 10.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}
