//! Bookings, their status history, and availability answers

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::wire;

status_enum! {
    /// Lifecycle state of a booking; transitions are enforced by the backend
    BookingStatus {
        Pending => ("PENDING", "Pending", Warning),
        Confirmed => ("CONFIRMED", "Confirmed", Success),
        CheckedIn => ("CHECKED_IN", "Checked In", Info),
        CheckedOut => ("CHECKED_OUT", "Checked Out", Neutral),
        Cancelled => ("CANCELLED", "Cancelled", Danger),
    }
}

impl BookingStatus {
    /// Pending, confirmed and checked-in bookings count as active
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            BookingStatus::Pending | BookingStatus::Confirmed | BookingStatus::CheckedIn
        )
    }
}

status_enum! {
    /// Payment state of a booking
    PaymentStatus {
        Pending => ("PENDING", "Pending", Warning),
        Paid => ("PAID", "Paid", Success),
        Refunded => ("REFUNDED", "Refunded", Info),
    }
}

/// A reservation of a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub hotel_id: i64,
    pub room_id: i64,
    #[serde(deserialize_with = "wire::date")]
    pub check_in_date: NaiveDate,
    #[serde(deserialize_with = "wire::date")]
    pub check_out_date: NaiveDate,
    #[serde(default)]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub total_amount: Option<f64>,
    pub booking_status: BookingStatus,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_datetime")]
    pub created_at: Option<NaiveDateTime>,
}

impl Booking {
    /// Number of nights between check-in and check-out
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }

    /// Whole days from `today` until check-in; negative once it has passed
    pub fn days_until_check_in(&self, today: NaiveDate) -> i64 {
        (self.check_in_date - today).num_days()
    }

    /// "Today", "Tomorrow" or "N days" for check-ins within the coming week
    pub fn check_in_hint(&self, today: NaiveDate) -> Option<String> {
        match self.days_until_check_in(today) {
            0 => Some("Today".to_string()),
            1 => Some("Tomorrow".to_string()),
            days @ 2..=7 => Some(format!("{} days", days)),
            _ => None,
        }
    }

    /// "2 adults, 1 child"
    pub fn guests_label(&self) -> String {
        let adults = format!("{} adult{}", self.adults, if self.adults == 1 { "" } else { "s" });
        match self.children {
            0 => adults,
            1 => format!("{}, 1 child", adults),
            n => format!("{}, {} children", adults, n),
        }
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }
}

/// Create/update payload for a booking
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub user_id: i64,
    pub hotel_id: i64,
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub adults: u32,
    pub children: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// One recorded status transition of a booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingHistoryEntry {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub booking_id: Option<i64>,
    #[serde(default)]
    pub status_from: Option<BookingStatus>,
    pub status_to: BookingStatus,
    #[serde(default)]
    pub changed_by: Option<i64>,
    #[serde(default)]
    pub change_reason: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_datetime")]
    pub created_at: Option<NaiveDateTime>,
}

/// Answer of the room availability check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Availability {
    Flag(bool),
    Detailed { available: bool },
}

impl Availability {
    pub fn is_available(&self) -> bool {
        match self {
            Availability::Flag(available) | Availability::Detailed { available } => *available,
        }
    }
}
