//! Booking endpoints

use chrono::NaiveDate;
use serde::Serialize;

use super::error::ApiResult;
use super::ApiClient;
use crate::models::{Availability, Booking, BookingDraft, BookingHistoryEntry, BookingStatus};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusChange<'a> {
    status: &'a BookingStatus,
    changed_by: i64,
    reason: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Cancellation<'a> {
    changed_by: i64,
    reason: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

/// `/api/bookings` operations
pub struct BookingsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> BookingsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Booking>> {
        self.client.get("/api/bookings").await
    }

    pub async fn get(&self, id: i64) -> ApiResult<Booking> {
        self.client.get(&format!("/api/bookings/{}", id)).await
    }

    pub async fn by_user(&self, user_id: i64) -> ApiResult<Vec<Booking>> {
        self.client
            .get_with_query("/api/bookings", &[("userId", user_id)])
            .await
    }

    pub async fn by_hotel(&self, hotel_id: i64) -> ApiResult<Vec<Booking>> {
        self.client
            .get_with_query("/api/bookings", &[("hotelId", hotel_id)])
            .await
    }

    /// Bookings of a hotel overlapping `start..=end`
    pub async fn by_date_range(
        &self,
        hotel_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ApiResult<Vec<Booking>> {
        let query = DateRange {
            start_date: start,
            end_date: end,
        };
        self.client
            .get_with_query(&format!("/api/bookings/hotel/{}/date-range", hotel_id), &query)
            .await
    }

    pub async fn create(&self, draft: &BookingDraft) -> ApiResult<Booking> {
        self.client.post("/api/bookings", draft).await
    }

    pub async fn update(&self, id: i64, draft: &BookingDraft) -> ApiResult<Booking> {
        self.client.put(&format!("/api/bookings/{}", id), draft).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/api/bookings/{}", id)).await
    }

    /// Move a booking to `status`; the backend records the transition in its history
    pub async fn update_status(
        &self,
        id: i64,
        status: &BookingStatus,
        changed_by: i64,
        reason: &str,
    ) -> ApiResult<Booking> {
        let body = StatusChange {
            status,
            changed_by,
            reason,
        };
        self.client
            .put(&format!("/api/bookings/{}/status", id), &body)
            .await
    }

    pub async fn cancel(&self, id: i64, changed_by: i64, reason: &str) -> ApiResult<Booking> {
        let body = Cancellation { changed_by, reason };
        self.client
            .put(&format!("/api/bookings/{}/cancel", id), &body)
            .await
    }

    pub async fn history(&self, id: i64) -> ApiResult<Vec<BookingHistoryEntry>> {
        self.client
            .get(&format!("/api/bookings/{}/history", id))
            .await
    }

    pub async fn check_availability(
        &self,
        room_id: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> ApiResult<Availability> {
        let query = StayDates { check_in, check_out };
        self.client
            .get_with_query(&format!("/api/bookings/room/{}/availability", room_id), &query)
            .await
    }
}
