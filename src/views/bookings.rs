//! Bookings page

use chrono::{Duration as Days, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::{absorb, Banner, BannerSlot, EmptyState};
use crate::api::{ApiClient, SessionExpired};
use crate::models::{Booking, BookingHistoryEntry, BookingStatus, Hotel};

/// Check-in date windows, compared by calendar day against "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBucket {
    Today,
    /// Today through seven days ahead
    Week,
    /// Today through the same day next month, clamped to the month's end
    Month,
    Past,
}

impl DateBucket {
    pub const ALL: [DateBucket; 4] = [
        DateBucket::Today,
        DateBucket::Week,
        DateBucket::Month,
        DateBucket::Past,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateBucket::Today => "today",
            DateBucket::Week => "week",
            DateBucket::Month => "month",
            DateBucket::Past => "past",
        }
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateBucket::Today => date == today,
            DateBucket::Week => today <= date && date <= today + Days::days(7),
            DateBucket::Month => {
                let end = today.checked_add_months(Months::new(1)).unwrap_or(NaiveDate::MAX);
                today <= date && date <= end
            }
            DateBucket::Past => date < today,
        }
    }
}

impl fmt::Display for DateBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateBucket::ALL
            .into_iter()
            .find(|bucket| bucket.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown date range '{}' (expected today, week, month or past)", s))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub hotel: Option<i64>,
    pub bucket: Option<DateBucket>,
}

impl BookingFilter {
    pub fn is_active(&self) -> bool {
        self.status.is_some() || self.hotel.is_some() || self.bucket.is_some()
    }

    pub fn matches(&self, booking: &Booking, today: NaiveDate) -> bool {
        self.status.as_ref().map_or(true, |s| &booking.booking_status == s)
            && self.hotel.map_or(true, |id| booking.hotel_id == id)
            && self
                .bucket
                .map_or(true, |bucket| bucket.contains(booking.check_in_date, today))
    }
}

pub fn filter_bookings<'a>(
    bookings: &'a [Booking],
    filter: &BookingFilter,
    today: NaiveDate,
) -> Vec<&'a Booking> {
    bookings.iter().filter(|b| filter.matches(b, today)).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingStatusCounts {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub checked_in: usize,
    pub checked_out: usize,
    pub cancelled: usize,
}

impl BookingStatusCounts {
    pub fn tally<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Self {
        let mut counts = Self::default();
        for booking in bookings {
            counts.total += 1;
            match booking.booking_status {
                BookingStatus::Pending => counts.pending += 1,
                BookingStatus::Confirmed => counts.confirmed += 1,
                BookingStatus::CheckedIn => counts.checked_in += 1,
                BookingStatus::CheckedOut => counts.checked_out += 1,
                BookingStatus::Cancelled => counts.cancelled += 1,
                BookingStatus::Other(_) => {}
            }
        }
        counts
    }
}

/// Reason recorded with a status change made from this console
pub fn status_change_reason(status: &BookingStatus) -> String {
    format!("Status updated by admin to {}", status.as_str())
}

pub fn status_options(booking: &Booking) -> Vec<BookingStatus> {
    BookingStatus::ALL
        .iter()
        .filter(|s| **s != booking.booking_status)
        .cloned()
        .collect()
}

pub struct BookingsView {
    client: ApiClient,
    bookings: Vec<Booking>,
    hotels: Vec<Hotel>,
    pub filter: BookingFilter,
    banners: BannerSlot,
}

impl BookingsView {
    pub fn new(client: ApiClient, banner_ttl: Duration) -> Self {
        Self {
            client,
            bookings: Vec::new(),
            hotels: Vec::new(),
            filter: BookingFilter::default(),
            banners: BannerSlot::new(banner_ttl),
        }
    }

    pub async fn load(&mut self) -> Result<(), SessionExpired> {
        let bookings = self.client.bookings();
        let hotels = self.client.hotels();
        let result = tokio::try_join!(bookings.list(), hotels.list());

        if let Some((bookings, hotels)) = absorb(
            result,
            &mut self.banners,
            "Error loading booking data. Please try again.",
        )? {
            self.bookings = bookings;
            self.hotels = hotels;
        }
        Ok(())
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn visible(&self, today: NaiveDate) -> Vec<&Booking> {
        filter_bookings(&self.bookings, &self.filter, today)
    }

    pub fn counts(&self, today: NaiveDate) -> BookingStatusCounts {
        BookingStatusCounts::tally(self.visible(today))
    }

    pub fn hotel_name(&self, hotel_id: i64) -> String {
        self.hotels
            .iter()
            .find(|h| h.id == hotel_id)
            .map(|h| h.name.clone())
            .unwrap_or_else(|| format!("Hotel {}", hotel_id))
    }

    pub fn empty_message(&self, today: NaiveDate) -> Option<&'static str> {
        EmptyState::detect(self.bookings.len(), self.visible(today).len()).map(|state| match state {
            EmptyState::NoData => "No bookings have been made yet.",
            EmptyState::NoMatches => "No bookings match your current filters. Try adjusting your selection.",
        })
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banners.visible()
    }

    async fn acting_admin(&self) -> Result<i64, SessionExpired> {
        match self.client.session().principal().await {
            Some(user) => Ok(user.id),
            None => Err(SessionExpired),
        }
    }

    /// Change a booking's status on behalf of the signed-in administrator
    pub async fn update_status(&mut self, id: i64, status: BookingStatus) -> Result<bool, SessionExpired> {
        let changed_by = self.acting_admin().await?;
        let reason = status_change_reason(&status);

        let result = self
            .client
            .bookings()
            .update_status(id, &status, changed_by, &reason)
            .await;
        let updated = absorb(
            result,
            &mut self.banners,
            "Error updating booking status. Please try again.",
        )?;
        if updated.is_none() {
            return Ok(false);
        }

        tracing::info!(booking_id = id, %status, "Updated booking status");
        self.banners.success("Booking status updated successfully!");
        self.load().await?;
        Ok(true)
    }

    pub async fn cancel(&mut self, id: i64, reason: &str) -> Result<bool, SessionExpired> {
        let changed_by = self.acting_admin().await?;

        let result = self.client.bookings().cancel(id, changed_by, reason).await;
        let cancelled = absorb(
            result,
            &mut self.banners,
            "Error cancelling booking. Please try again.",
        )?;
        if cancelled.is_none() {
            return Ok(false);
        }

        tracing::info!(booking_id = id, "Cancelled booking");
        self.banners.success("Booking cancelled successfully!");
        self.load().await?;
        Ok(true)
    }

    /// Status history of one booking, fetched on demand
    pub async fn history(&mut self, id: i64) -> Result<Option<Vec<BookingHistoryEntry>>, SessionExpired> {
        let result = self.client.bookings().history(id).await;
        absorb(
            result,
            &mut self.banners,
            "Error loading booking history. Please try again.",
        )
    }
}
