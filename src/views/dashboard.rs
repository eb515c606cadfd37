//! Dashboard aggregates

use serde::Serialize;

use crate::api::{ApiClient, ApiError, SessionExpired};
use crate::models::{Booking, Hotel, PaymentStatus, Room, RoomStatus};

/// Headline numbers derived from the full collections
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_hotels: usize,
    pub total_rooms: usize,
    pub total_bookings: usize,
    pub active_bookings: usize,
    pub available_rooms: usize,
    pub occupied_rooms: usize,
    /// Sum of `totalAmount` over paid bookings
    pub revenue: f64,
    /// Occupied share of all rooms in percent, one decimal
    pub occupancy_rate: f64,
}

impl DashboardStats {
    pub fn compute(hotels: &[Hotel], rooms: &[Room], bookings: &[Booking]) -> Self {
        let count_rooms = |status: RoomStatus| rooms.iter().filter(|r| r.status == status).count();
        let occupied_rooms = count_rooms(RoomStatus::Occupied);

        Self {
            total_hotels: hotels.len(),
            total_rooms: rooms.len(),
            total_bookings: bookings.len(),
            active_bookings: bookings.iter().filter(|b| b.booking_status.is_active()).count(),
            available_rooms: count_rooms(RoomStatus::Available),
            occupied_rooms,
            revenue: revenue(bookings),
            occupancy_rate: occupancy_rate(occupied_rooms, rooms.len()),
        }
    }
}

/// Paid revenue, summed in whole cents so the total does not depend on order
pub fn revenue(bookings: &[Booking]) -> f64 {
    let cents: i64 = bookings
        .iter()
        .filter(|b| b.payment_status == PaymentStatus::Paid)
        .filter_map(|b| b.total_amount)
        .map(|amount| (amount * 100.0).round() as i64)
        .sum();
    cents as f64 / 100.0
}

/// `occupied / total * 100` rounded to one decimal; 0 without rooms
pub fn occupancy_rate(occupied: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = occupied as f64 / total as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

/// The `limit` most recently created bookings, newest first
///
/// The sort is stable and bookings without a creation time come last.
pub fn recent_bookings(bookings: &[Booking], limit: usize) -> Vec<&Booking> {
    let mut sorted: Vec<&Booking> = bookings.iter().collect();
    sorted.sort_by(|a, b| match (a.created_at, b.created_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    sorted.truncate(limit);
    sorted
}

/// Dashboard page state
pub struct DashboardView {
    client: ApiClient,
    recent_limit: usize,
    hotels: Vec<Hotel>,
    bookings: Vec<Booking>,
    stats: Option<DashboardStats>,
    error: Option<String>,
}

impl DashboardView {
    pub fn new(client: ApiClient, recent_limit: usize) -> Self {
        Self {
            client,
            recent_limit,
            hotels: Vec::new(),
            bookings: Vec::new(),
            stats: None,
            error: None,
        }
    }

    /// Fetch hotels, rooms and bookings together and recompute everything
    ///
    /// Unlike the list pages a failure replaces the whole page with an
    /// error message, cleared by the next successful load.
    pub async fn load(&mut self) -> Result<(), SessionExpired> {
        let hotels = self.client.hotels();
        let rooms = self.client.rooms();
        let bookings = self.client.bookings();

        match tokio::try_join!(hotels.list(), rooms.list(), bookings.list()) {
            Ok((hotels, rooms, bookings)) => {
                self.stats = Some(DashboardStats::compute(&hotels, &rooms, &bookings));
                self.hotels = hotels;
                self.bookings = bookings;
                self.error = None;
            }
            Err(err) => {
                let err: ApiError = err.into_recoverable()?;
                tracing::warn!("Failed to load dashboard data: {}", err);
                self.stats = None;
                self.error = Some("Failed to load dashboard data".to_string());
            }
        }
        Ok(())
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn recent_bookings(&self) -> Vec<&Booking> {
        recent_bookings(&self.bookings, self.recent_limit)
    }

    pub fn hotel_name(&self, hotel_id: i64) -> String {
        self.hotels
            .iter()
            .find(|h| h.id == hotel_id)
            .map(|h| h.name.clone())
            .unwrap_or_else(|| format!("Hotel {}", hotel_id))
    }
}
