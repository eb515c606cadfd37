//! Room type endpoints

use super::error::ApiResult;
use super::ApiClient;
use crate::models::{RoomType, RoomTypeDraft};

/// `/api/room-types` operations
pub struct RoomTypesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RoomTypesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<RoomType>> {
        self.client.get("/api/room-types").await
    }

    pub async fn get(&self, id: i64) -> ApiResult<RoomType> {
        self.client.get(&format!("/api/room-types/{}", id)).await
    }

    pub async fn by_hotel(&self, hotel_id: i64) -> ApiResult<Vec<RoomType>> {
        self.client
            .get(&format!("/api/hotels/{}/room-types", hotel_id))
            .await
    }

    pub async fn create(&self, draft: &RoomTypeDraft) -> ApiResult<RoomType> {
        self.client.post("/api/room-types", draft).await
    }

    pub async fn update(&self, id: i64, draft: &RoomTypeDraft) -> ApiResult<RoomType> {
        self.client.put(&format!("/api/room-types/{}", id), draft).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/api/room-types/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::RoomTypeDraft;
    use crate::testing::MockBackend;

    #[tokio::test]
    async fn test_room_types_lifecycle() {
        let backend = MockBackend::start().await;
        let (client, _store) = backend.signed_in_client().await;

        let by_hotel = client.room_types().by_hotel(7).await.unwrap();
        assert!(by_hotel.iter().all(|t| t.hotel_id == 7));

        let draft = RoomTypeDraft {
            hotel_id: 7,
            name: "Family Suite".to_string(),
            description: None,
            base_price: 240.0,
            max_occupancy: 5,
        };
        let created = client.room_types().create(&draft).await.unwrap();
        assert_eq!(created.max_occupancy, 5);

        let updated = client
            .room_types()
            .update(
                created.id,
                &RoomTypeDraft {
                    base_price: 260.0,
                    ..draft
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.base_price, 260.0);

        client.room_types().delete(created.id).await.unwrap();
        let remaining = client.room_types().list().await.unwrap();
        assert!(remaining.iter().all(|t| t.id != created.id));
    }
}
