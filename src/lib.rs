//! # Hotel Admin
//!
//! Administrator console for a hotel platform backend: hotels, rooms, room
//! types and bookings, managed over the platform's REST API.
//!
//! ## Features
//!
//! - **Persistent session**: Basic credentials kept in a local file store
//! - **Gateway client**: Typed services per resource, with session expiry on 401
//! - **Route gates**: Signed-in and signed-out pages, resolved after restore
//! - **Views**: Client-side filters, counts and transient banners per page
//! - **Dashboard**: Occupancy, revenue and recent activity
//!
//! ## Modules
//!
//! - [`session`]: Principal and credential lifecycle
//! - [`api`]: REST client for the backend
//! - [`router`]: Routes, gates and navigation
//! - [`views`]: Page state for hotels, rooms, bookings and the dashboard
//! - [`app`]: Controller tying the pieces together
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hotel_admin::{AdminApp, Config, Route};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut app = AdminApp::with_file_store(Config::load_default())?;
//!     app.start().await;
//!
//!     app.login("admin@hotel.com", "admin123").await?;
//!     app.open(Route::Hotels).await;
//!
//!     let mut hotels = app.hotels_view();
//!     if let Some(()) = app.observe(hotels.load().await) {
//!         println!("{}", hotels.summary());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod models;
pub mod render;
pub mod router;
pub mod session;
pub mod shell;
pub mod storage;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiClient, ApiError, ApiResult, SessionExpired};
pub use app::AdminApp;
pub use config::Config;
pub use router::{Gate, GateDecision, Navigator, Route};
pub use session::{LoginError, Session, SessionState};
