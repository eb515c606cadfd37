//! Rooms page

use serde::Serialize;
use std::time::Duration;

use super::{absorb, Banner, BannerSlot, EmptyState};
use crate::api::{ApiClient, SessionExpired};
use crate::models::{Hotel, Room, RoomStatus, RoomType};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomFilter {
    hotel: Option<i64>,
    pub status: Option<RoomStatus>,
    room_type: Option<i64>,
}

impl RoomFilter {
    pub fn hotel(&self) -> Option<i64> {
        self.hotel
    }

    pub fn room_type(&self) -> Option<i64> {
        self.room_type
    }

    /// Changing the hotel clears the room type, whose options depend on it
    pub fn select_hotel(&mut self, hotel: Option<i64>) {
        self.hotel = hotel;
        self.room_type = None;
    }

    pub fn select_room_type(&mut self, room_type: Option<i64>) {
        self.room_type = room_type;
    }

    pub fn is_active(&self) -> bool {
        self.hotel.is_some() || self.status.is_some() || self.room_type.is_some()
    }

    pub fn matches(&self, room: &Room) -> bool {
        self.hotel.map_or(true, |id| room.hotel_id == id)
            && self.status.as_ref().map_or(true, |s| &room.status == s)
            && self.room_type.map_or(true, |id| room.room_type_id == id)
    }
}

pub fn filter_rooms<'a>(rooms: &'a [Room], filter: &RoomFilter) -> Vec<&'a Room> {
    rooms.iter().filter(|r| filter.matches(r)).collect()
}

/// Room types offered by the type select, narrowed to the selected hotel
pub fn room_types_for(room_types: &[RoomType], hotel: Option<i64>) -> Vec<&RoomType> {
    room_types
        .iter()
        .filter(|t| hotel.map_or(true, |id| t.hotel_id == id))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomStatusCounts {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub maintenance: usize,
    pub out_of_order: usize,
}

impl RoomStatusCounts {
    pub fn tally<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> Self {
        rooms.into_iter().fold(Self::default(), |mut counts, room| {
            counts.total += 1;
            match room.status {
                RoomStatus::Available => counts.available += 1,
                RoomStatus::Occupied => counts.occupied += 1,
                RoomStatus::Maintenance => counts.maintenance += 1,
                RoomStatus::OutOfOrder => counts.out_of_order += 1,
                RoomStatus::Other(_) => {}
            }
            counts
        })
    }
}

/// A room with its hotel and room type resolved for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRow<'a> {
    #[serde(flatten)]
    pub room: &'a Room,
    pub hotel_name: String,
    pub room_type_name: String,
    pub price: f64,
    pub capacity: u32,
}

/// Status choices for a room: every known status except its current one
pub fn status_options(room: &Room) -> Vec<RoomStatus> {
    RoomStatus::ALL
        .iter()
        .filter(|s| **s != room.status)
        .cloned()
        .collect()
}

pub struct RoomsView {
    client: ApiClient,
    rooms: Vec<Room>,
    hotels: Vec<Hotel>,
    room_types: Vec<RoomType>,
    pub filter: RoomFilter,
    banners: BannerSlot,
}

impl RoomsView {
    pub fn new(client: ApiClient, banner_ttl: Duration) -> Self {
        Self {
            client,
            rooms: Vec::new(),
            hotels: Vec::new(),
            room_types: Vec::new(),
            filter: RoomFilter::default(),
            banners: BannerSlot::new(banner_ttl),
        }
    }

    /// Fetch rooms, hotels and room types together; any failure keeps the old data
    pub async fn load(&mut self) -> Result<(), SessionExpired> {
        let hotels = self.client.hotels();
        let rooms = self.client.rooms();
        let room_types = self.client.room_types();
        let result = tokio::try_join!(rooms.list(), hotels.list(), room_types.list());

        if let Some((rooms, hotels, room_types)) = absorb(
            result,
            &mut self.banners,
            "Error loading room data. Please try again.",
        )? {
            self.rooms = rooms;
            self.hotels = hotels;
            self.room_types = room_types;
        }
        Ok(())
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn room_type_options(&self) -> Vec<&RoomType> {
        room_types_for(&self.room_types, self.filter.hotel())
    }

    pub fn visible(&self) -> Vec<&Room> {
        filter_rooms(&self.rooms, &self.filter)
    }

    pub fn rows(&self) -> Vec<RoomRow<'_>> {
        self.visible().into_iter().map(|room| self.row(room)).collect()
    }

    fn row<'a>(&self, room: &'a Room) -> RoomRow<'a> {
        let hotel_name = self
            .hotels
            .iter()
            .find(|h| h.id == room.hotel_id)
            .map(|h| h.name.clone())
            .unwrap_or_else(|| format!("Hotel {}", room.hotel_id));

        let room_type = self.room_types.iter().find(|t| t.id == room.room_type_id);

        RoomRow {
            room,
            hotel_name,
            room_type_name: room_type
                .map(|t| t.name.clone())
                .unwrap_or_else(|| format!("Type {}", room.room_type_id)),
            price: room_type.map_or(0.0, |t| t.base_price),
            capacity: room_type.map_or(0, |t| t.max_occupancy),
        }
    }

    /// Counts over the filtered rooms
    pub fn counts(&self) -> RoomStatusCounts {
        RoomStatusCounts::tally(self.visible())
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        EmptyState::detect(self.rooms.len(), self.visible().len()).map(|state| match state {
            EmptyState::NoData => "No rooms have been added yet.",
            EmptyState::NoMatches => "No rooms match your current filters. Try adjusting your selection.",
        })
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banners.visible()
    }

    /// Send the full room record with `status` replaced
    pub async fn update_status(&mut self, room_id: i64, status: RoomStatus) -> Result<bool, SessionExpired> {
        let Some(room) = self.rooms.iter().find(|r| r.id == room_id) else {
            self.banners.error(format!("Room {} is not loaded", room_id));
            return Ok(false);
        };

        let mut changed = room.clone();
        changed.status = status;

        let result = self.client.rooms().update(&changed).await;
        let updated = absorb(
            result,
            &mut self.banners,
            "Error updating room status. Please try again.",
        )?;
        if updated.is_none() {
            return Ok(false);
        }

        tracing::info!(room_id, status = %changed.status, "Updated room status");
        self.banners.success("Room status updated successfully!");
        self.load().await?;
        Ok(true)
    }
}
