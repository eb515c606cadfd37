//! Room endpoints

use super::error::ApiResult;
use super::ApiClient;
use crate::models::{Room, RoomDraft};

/// `/api/rooms` operations
pub struct RoomsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RoomsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Room>> {
        self.client.get("/api/rooms").await
    }

    pub async fn get(&self, id: i64) -> ApiResult<Room> {
        self.client.get(&format!("/api/rooms/{}", id)).await
    }

    pub async fn by_hotel(&self, hotel_id: i64) -> ApiResult<Vec<Room>> {
        self.client.get(&format!("/api/hotels/{}/rooms", hotel_id)).await
    }

    pub async fn available_by_hotel(&self, hotel_id: i64) -> ApiResult<Vec<Room>> {
        self.client
            .get(&format!("/api/hotels/{}/rooms/available", hotel_id))
            .await
    }

    pub async fn create(&self, draft: &RoomDraft) -> ApiResult<Room> {
        self.client.post("/api/rooms", draft).await
    }

    /// Replace a room; status changes send the whole record
    pub async fn update(&self, room: &Room) -> ApiResult<Room> {
        self.client.put(&format!("/api/rooms/{}", room.id), room).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/api/rooms/{}", id)).await
    }
}
