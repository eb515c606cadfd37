//! Hotels and the hotel edit form

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A hotel property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Hotel {
    /// Rating clamped to the 0-5 star scale
    pub fn stars(&self) -> u8 {
        self.rating.unwrap_or(0.0).clamp(0.0, 5.0).round() as u8
    }

    /// "City, State" or just the city when no state is set
    pub fn locality(&self) -> String {
        match self.state.as_deref().map(str::trim) {
            Some(state) if !state.is_empty() => format!("{}, {}", self.city, state),
            _ => self.city.clone(),
        }
    }
}

/// Create/update payload for a hotel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelForm {
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub phone: String,
    pub email: String,
    pub rating: f64,
}

/// Form validation failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Rating must be between 0 and 5, got {0}")]
    RatingOutOfRange(f64),
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern is a valid regex")
    })
}

impl HotelForm {
    /// Pre-fill the form from an existing hotel
    pub fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            description: hotel.description.clone().unwrap_or_default(),
            address: hotel.address.clone(),
            city: hotel.city.clone(),
            state: hotel.state.clone().unwrap_or_default(),
            country: hotel.country.clone(),
            postal_code: hotel.postal_code.clone().unwrap_or_default(),
            phone: hotel.phone.clone().unwrap_or_default(),
            email: hotel.email.clone().unwrap_or_default(),
            rating: hotel.rating.unwrap_or(0.0),
        }
    }

    /// Checks required fields, the email shape and the rating range
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("Hotel name", &self.name),
            ("Address", &self.address),
            ("City", &self.city),
            ("Country", &self.country),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }

        let email = self.email.trim();
        if !email.is_empty() && !email_pattern().is_match(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }

        if !(0.0..=5.0).contains(&self.rating) {
            return Err(ValidationError::RatingOutOfRange(self.rating));
        }

        Ok(())
    }
}

/// Query parameters for `GET /api/hotels/search`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
}

impl HotelSearch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.city.is_none() && self.country.is_none() && self.min_rating.is_none()
    }
}
