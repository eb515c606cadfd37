//! Rooms and room types

use serde::{Deserialize, Serialize};

status_enum! {
    /// Operational state of a room
    RoomStatus {
        Available => ("AVAILABLE", "Available", Success),
        Occupied => ("OCCUPIED", "Occupied", Danger),
        Maintenance => ("MAINTENANCE", "Maintenance", Warning),
        OutOfOrder => ("OUT_OF_ORDER", "Out of Order", Danger),
    }
}

impl Default for RoomStatus {
    fn default() -> Self {
        RoomStatus::Available
    }
}

/// A physical room of a hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub hotel_id: i64,
    pub room_type_id: i64,
    pub room_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(default)]
    pub status: RoomStatus,
}

/// Create payload for a room
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDraft {
    pub hotel_id: i64,
    pub room_type_id: i64,
    pub room_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    pub status: RoomStatus,
}

/// A category of rooms within a hotel, carrying price and capacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub id: i64,
    pub hotel_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub base_price: f64,
    #[serde(default)]
    pub max_occupancy: u32,
}

/// Create/update payload for a room type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypeDraft {
    pub hotel_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub base_price: f64,
    pub max_occupancy: u32,
}
