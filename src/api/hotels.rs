//! Hotel endpoints

use super::error::ApiResult;
use super::ApiClient;
use crate::models::{Hotel, HotelForm, HotelSearch};

/// `/api/hotels` operations
pub struct HotelsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> HotelsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Hotel>> {
        self.client.get("/api/hotels").await
    }

    pub async fn get(&self, id: i64) -> ApiResult<Hotel> {
        self.client.get(&format!("/api/hotels/{}", id)).await
    }

    pub async fn create(&self, form: &HotelForm) -> ApiResult<Hotel> {
        self.client.post("/api/hotels", form).await
    }

    pub async fn update(&self, id: i64, form: &HotelForm) -> ApiResult<Hotel> {
        self.client.put(&format!("/api/hotels/{}", id), form).await
    }

    /// Irreversible; callers must have obtained confirmation first
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/api/hotels/{}", id)).await
    }

    pub async fn search(&self, search: &HotelSearch) -> ApiResult<Vec<Hotel>> {
        self.client.get_with_query("/api/hotels/search", search).await
    }
}
