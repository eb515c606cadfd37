//! API Gateway Client
//!
//! Typed access to the hotel platform's REST API, built on reqwest.
//!
//! Every request carries the session's `Authorization` header (when signed
//! in) and an `X-Request-Id`. A 401 answer expires the session and returns
//! [`ApiError::AuthenticationExpired`]. There is no retry, caching or batching.
//!
//! # Endpoints
//!
//! ## Auth
//! - `POST /api/users/login` - Check credentials (Basic header + JSON body)
//!
//! ## Hotels
//! - `GET /api/hotels`, `POST /api/hotels`
//! - `GET /api/hotels/{id}`, `PUT /api/hotels/{id}`, `DELETE /api/hotels/{id}`
//! - `GET /api/hotels/search`
//!
//! ## Rooms
//! - `GET /api/rooms`, `POST /api/rooms`
//! - `GET /api/rooms/{id}`, `PUT /api/rooms/{id}`, `DELETE /api/rooms/{id}`
//! - `GET /api/hotels/{id}/rooms`, `GET /api/hotels/{id}/rooms/available`
//!
//! ## Room types
//! - `GET /api/room-types`, `POST /api/room-types`
//! - `GET /api/room-types/{id}`, `PUT /api/room-types/{id}`, `DELETE /api/room-types/{id}`
//! - `GET /api/hotels/{id}/room-types`
//!
//! ## Bookings
//! - `GET /api/bookings`, `POST /api/bookings`
//! - `GET /api/bookings/{id}`, `PUT /api/bookings/{id}`, `DELETE /api/bookings/{id}`
//! - `PUT /api/bookings/{id}/status`, `PUT /api/bookings/{id}/cancel`
//! - `GET /api/bookings/{id}/history`
//! - `GET /api/bookings/room/{id}/availability`
//! - `GET /api/bookings/hotel/{id}/date-range`
//!
//! # Example
//!
//! ```rust,no_run
//! use hotel_admin::api::ApiClient;
//! use hotel_admin::config::ApiConfig;
//! use hotel_admin::session::Session;
//! use hotel_admin::storage::MemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Session::new(Arc::new(MemoryStore::new()));
//!     session.restore().await;
//!
//!     let client = ApiClient::new(&ApiConfig::default(), session)?;
//!     let hotels = client.hotels().list().await?;
//!     println!("{} hotels", hotels.len());
//!     Ok(())
//! }
//! ```

mod auth;
mod bookings;
mod client;
pub mod error;
mod hotels;
mod room_types;
mod rooms;

pub use bookings::BookingsApi;
pub use client::ApiClient;
pub use error::{ApiError, ApiResult, SessionExpired};
pub use hotels::HotelsApi;
pub use room_types::RoomTypesApi;
pub use rooms::RoomsApi;
