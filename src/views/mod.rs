//! Domain Views
//!
//! Client-side state behind each page: the loaded collections, the filter
//! criteria, and a transient banner reporting the last outcome.
//!
//! ## Error Handling
//!
//! View operations return `Result<_, SessionExpired>`. Every other failure
//! is absorbed into an error banner so the page stays usable; only an expired
//! session escapes, for the controller to route back to the login page.
//!
//! ## Filtering
//!
//! Filters are pure functions over `(collection, criteria)`. They borrow the
//! loaded records and never reorder or mutate them.

pub mod bookings;
pub mod dashboard;
pub mod hotels;
pub mod rooms;

pub use bookings::{filter_bookings, BookingFilter, BookingStatusCounts, BookingsView, DateBucket};
pub use dashboard::{DashboardStats, DashboardView};
pub use hotels::{delete_prompt, filter_hotels, Confirm, HotelFilter, HotelsView};
pub use rooms::{filter_rooms, RoomFilter, RoomRow, RoomStatusCounts, RoomsView};

use std::time::{Duration, Instant};

use crate::api::{ApiResult, SessionExpired};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// A message shown above a page until its time runs out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    shown_at: Instant,
    ttl: Duration,
}

impl Banner {
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < self.ttl
    }

    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }
}

/// Holds at most one banner; a new message replaces the previous one
#[derive(Debug, Clone)]
pub struct BannerSlot {
    current: Option<Banner>,
    ttl: Duration,
}

impl BannerSlot {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.show(BannerKind::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.show(BannerKind::Error, text.into());
    }

    fn show(&mut self, kind: BannerKind, text: String) {
        self.current = Some(Banner {
            kind,
            text,
            shown_at: Instant::now(),
            ttl: self.ttl,
        });
    }

    /// The banner if it is still visible at `now`
    pub fn visible_at(&self, now: Instant) -> Option<&Banner> {
        self.current.as_ref().filter(|b| b.is_visible_at(now))
    }

    pub fn visible(&self) -> Option<&Banner> {
        self.visible_at(Instant::now())
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// Turn a gateway result into a value or an error banner
///
/// Session expiry is the only error passed through.
pub(crate) fn absorb<T>(
    result: ApiResult<T>,
    banners: &mut BannerSlot,
    failure: &str,
) -> Result<Option<T>, SessionExpired> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            let err = err.into_recoverable()?;
            tracing::warn!("{}: {}", failure, err);
            banners.error(failure);
            Ok(None)
        }
    }
}

/// Why a list renders no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing has been created yet
    NoData,
    /// Records exist but the filters exclude all of them
    NoMatches,
}

impl EmptyState {
    pub fn detect(total: usize, shown: usize) -> Option<Self> {
        match (total, shown) {
            (0, _) => Some(EmptyState::NoData),
            (_, 0) => Some(EmptyState::NoMatches),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    #[test]
    fn test_banner_expires() {
        let mut slot = BannerSlot::new(Duration::from_secs(5));
        slot.success("Saved");

        let now = Instant::now();
        assert_eq!(slot.visible_at(now).unwrap().text, "Saved");
        assert!(slot.visible_at(now + Duration::from_secs(6)).is_none());
    }

    #[test]
    fn test_new_banner_replaces_old() {
        let mut slot = BannerSlot::new(Duration::from_secs(5));
        slot.success("Saved");
        slot.error("Failed");

        let banner = slot.visible().unwrap();
        assert!(banner.is_error());
        assert_eq!(banner.text, "Failed");
    }

    #[test]
    fn test_absorb_passes_expiry_through() {
        let mut slot = BannerSlot::new(Duration::from_secs(5));

        let outcome = absorb::<()>(Err(ApiError::AuthenticationExpired), &mut slot, "Oops");
        assert_eq!(outcome, Err(SessionExpired));
        assert!(slot.visible().is_none());

        let outcome = absorb::<()>(Err(ApiError::Timeout), &mut slot, "Oops");
        assert_eq!(outcome, Ok(None));
        assert_eq!(slot.visible().unwrap().text, "Oops");
    }

    #[test]
    fn test_empty_state() {
        assert_eq!(EmptyState::detect(0, 0), Some(EmptyState::NoData));
        assert_eq!(EmptyState::detect(4, 0), Some(EmptyState::NoMatches));
        assert_eq!(EmptyState::detect(4, 2), None);
    }
}
