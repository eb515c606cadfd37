//! In-process mock of the hotel platform backend
//!
//! Serves the REST surface the client talks to from seeded, mutable
//! in-memory data and records what it saw so tests can assert on headers
//! and call counts.

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderMap, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::api::ApiClient;
use crate::config::Config;
use crate::models::{
    Booking, BookingStatus, Hotel, PaymentStatus, Role, Room, RoomStatus, RoomType, User,
};
use crate::session::{CredentialToken, Session, AUTH_KEY, USER_KEY};
use crate::storage::{KeyValueStore, MemoryStore};

type HandlerResult<T> = Result<Json<T>, StatusCode>;

#[derive(Default)]
struct Data {
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
    room_types: Vec<RoomType>,
    bookings: Vec<Booking>,
    history: Vec<Value>,
    next_id: i64,
}

impl Data {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared state of the mock, inspectable from tests
#[derive(Default)]
pub struct MockState {
    data: Mutex<Data>,
    last_authorization: Mutex<Option<String>>,
    last_request_id: Mutex<Option<String>>,
    deletes: AtomicUsize,
    rejecting: AtomicBool,
    failing_prefix: Mutex<Option<String>>,
}

impl MockState {
    pub fn last_authorization(&self) -> Option<String> {
        self.last_authorization.lock().unwrap().clone()
    }

    pub fn last_request_id(&self) -> Option<String> {
        self.last_request_id.lock().unwrap().clone()
    }

    /// Number of DELETE requests received so far
    pub fn delete_count(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    /// Answer 401 to every call except login from now on
    pub fn reject_all_credentials(&self) {
        self.rejecting.store(true, Ordering::SeqCst);
    }

    /// Answer 500 to every path starting with `prefix`
    pub fn fail_requests_to(&self, prefix: &str) {
        *self.failing_prefix.lock().unwrap() = Some(prefix.to_string());
    }

    pub fn recover(&self) {
        *self.failing_prefix.lock().unwrap() = None;
    }

    pub fn hotel_count(&self) -> usize {
        self.data.lock().unwrap().hotels.len()
    }

    pub fn booking(&self, id: i64) -> Option<Booking> {
        self.data
            .lock()
            .unwrap()
            .bookings
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }
}

/// A running mock backend bound to an ephemeral local port
pub struct MockBackend {
    pub state: Arc<MockState>,
    base_url: String,
}

impl MockBackend {
    /// `Authorization` value for admin@hotel.com / admin123
    pub const ADMIN_TOKEN: &'static str = "Basic YWRtaW5AaG90ZWwuY29tOmFkbWluMTIz";

    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        seed(&mut state.data.lock().unwrap(), today());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            state,
            base_url: format!("http://{}", addr),
        }
    }

    /// Default configuration pointed at this backend
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.api.base_url = self.base_url.clone();
        config.api.request_timeout_secs = 5;
        config
    }

    pub fn admin() -> User {
        User {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Admin".to_string(),
            email: "admin@hotel.com".to_string(),
            role: Role::Admin,
        }
    }

    /// A store holding a persisted admin session
    pub async fn signed_in_store() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        let user = serde_json::to_string(&Self::admin()).unwrap();
        store.set(USER_KEY, &user).await.unwrap();
        store.set(AUTH_KEY, Self::ADMIN_TOKEN).await.unwrap();
        store
    }

    pub async fn signed_in_client(&self) -> (ApiClient, Arc<MemoryStore>) {
        let store = Self::signed_in_store().await;
        let client = self.client_with(store.clone()).await;
        (client, store)
    }

    pub async fn anonymous_client(&self) -> (ApiClient, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let client = self.client_with(store.clone()).await;
        (client, store)
    }

    async fn client_with(&self, store: Arc<MemoryStore>) -> ApiClient {
        let session = Session::new(store);
        session.restore().await;
        ApiClient::new(&self.config().api, session).unwrap()
    }
}

/// The calendar day the seed data is laid out around
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn at(day: NaiveDate, hour: u32) -> Option<NaiveDateTime> {
    day.and_hms_opt(hour, 0, 0)
}

fn seed(data: &mut Data, today: NaiveDate) {
    let hotel = |id, name: &str, address: &str, city: &str, country: &str, rating| Hotel {
        id,
        name: name.to_string(),
        description: None,
        address: address.to_string(),
        city: city.to_string(),
        state: None,
        country: country.to_string(),
        postal_code: None,
        phone: None,
        email: None,
        rating: Some(rating),
    };
    data.hotels = vec![
        hotel(7, "Lakeside Inn", "1 Shore Rd", "Annecy", "France", 4.0),
        hotel(8, "Harbour Lodge", "12 Quay St", "Bergen", "Norway", 3.5),
        hotel(9, "Alpine Retreat", "3 Col Rd", "Annecy", "France", 4.5),
    ];

    let room_type = |id, hotel_id, name: &str, base_price, max_occupancy| RoomType {
        id,
        hotel_id,
        name: name.to_string(),
        description: None,
        base_price,
        max_occupancy,
    };
    data.room_types = vec![
        room_type(1, 7, "Standard", 120.0, 2),
        room_type(2, 7, "Deluxe", 180.0, 3),
        room_type(3, 8, "Standard", 95.0, 2),
    ];

    let room = |id: i64, hotel_id, room_type_id, floor, status| Room {
        id,
        hotel_id,
        room_type_id,
        room_number: id.to_string(),
        floor: Some(floor),
        status,
    };
    data.rooms = vec![
        room(101, 7, 1, 1, RoomStatus::Available),
        room(102, 7, 2, 1, RoomStatus::Occupied),
        room(103, 7, 1, 1, RoomStatus::Maintenance),
        room(201, 8, 3, 2, RoomStatus::Available),
        room(202, 8, 99, 2, RoomStatus::OutOfOrder),
    ];

    let booking = |id, user_id, hotel_id, room_id, check_in: i64, nights: i64| Booking {
        id,
        user_id,
        hotel_id,
        room_id,
        check_in_date: today + Duration::days(check_in),
        check_out_date: today + Duration::days(check_in + nights),
        adults: 2,
        children: 0,
        total_amount: None,
        booking_status: BookingStatus::Pending,
        payment_status: PaymentStatus::Pending,
        special_requests: None,
        created_at: None,
    };
    data.bookings = vec![
        Booking {
            total_amount: Some(450.50),
            booking_status: BookingStatus::Confirmed,
            payment_status: PaymentStatus::Paid,
            created_at: at(today - Duration::days(1), 10),
            children: 1,
            ..booking(42, 3, 7, 101, 2, 3)
        },
        Booking {
            total_amount: Some(300.25),
            booking_status: BookingStatus::CheckedIn,
            payment_status: PaymentStatus::Paid,
            created_at: at(today - Duration::days(3), 10),
            ..booking(43, 4, 7, 102, -1, 3)
        },
        Booking {
            total_amount: Some(190.0),
            created_at: at(today, 9),
            ..booking(44, 3, 8, 201, 20, 2)
        },
        Booking {
            total_amount: Some(240.0),
            booking_status: BookingStatus::CheckedOut,
            payment_status: PaymentStatus::Paid,
            ..booking(45, 5, 7, 101, -10, 3)
        },
        Booking {
            total_amount: Some(95.0),
            booking_status: BookingStatus::Cancelled,
            payment_status: PaymentStatus::Refunded,
            created_at: at(today - Duration::days(5), 10),
            ..booking(46, 4, 8, 201, 0, 1)
        },
    ];

    data.next_id = 1000;
}

fn router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/api/users/login", post(login))
        .route("/api/hotels", get(list_hotels).post(create_hotel))
        .route("/api/hotels/search", get(search_hotels))
        .route(
            "/api/hotels/:id",
            get(get_hotel).put(update_hotel).delete(delete_hotel),
        )
        .route("/api/hotels/:id/rooms", get(rooms_by_hotel))
        .route("/api/hotels/:id/rooms/available", get(available_rooms_by_hotel))
        .route("/api/hotels/:id/room-types", get(room_types_by_hotel))
        .route("/api/rooms", get(list_rooms).post(create_room))
        .route(
            "/api/rooms/:id",
            get(get_room).put(update_room).delete(delete_room),
        )
        .route("/api/room-types", get(list_room_types).post(create_room_type))
        .route(
            "/api/room-types/:id",
            get(get_room_type)
                .put(update_room_type)
                .delete(delete_room_type),
        )
        .route("/api/bookings", get(list_bookings).post(create_booking))
        .route(
            "/api/bookings/:id",
            get(get_booking).put(update_booking).delete(delete_booking),
        )
        .route("/api/bookings/:id/status", put(update_booking_status))
        .route("/api/bookings/:id/cancel", put(cancel_booking))
        .route("/api/bookings/:id/history", get(booking_history))
        .route("/api/bookings/hotel/:id/date-range", get(bookings_in_range))
        .route("/api/bookings/room/:id/availability", get(room_availability))
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state)
}

fn known_tokens() -> [String; 2] {
    [
        CredentialToken::basic("admin@hotel.com", "admin123")
            .header_value()
            .to_string(),
        CredentialToken::basic("guest@hotel.com", "guest123")
            .header_value()
            .to_string(),
    ]
}

async fn record(State(state): State<Arc<MockState>>, request: Request, next: Next) -> Response {
    let (authorization, request_id) = {
        let header_value = |name: &str| {
            request
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        (
            header_value(header::AUTHORIZATION.as_str()),
            header_value("x-request-id"),
        )
    };
    *state.last_authorization.lock().unwrap() = authorization.clone();
    *state.last_request_id.lock().unwrap() = request_id;

    if request.method() == Method::DELETE {
        state.deletes.fetch_add(1, Ordering::SeqCst);
    }

    let path = request.uri().path().to_string();
    if path != "/api/users/login" {
        let unknown_token = authorization
            .as_ref()
            .is_some_and(|token| !known_tokens().contains(token));
        if state.rejecting.load(Ordering::SeqCst) || unknown_token {
            return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
        }

        let failing = state.failing_prefix.lock().unwrap().clone();
        if failing.is_some_and(|prefix| path.starts_with(&prefix)) {
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response();
        }
    }

    next.run(request).await
}

#[derive(Deserialize)]
struct Credentials {
    email: String,
    password: String,
}

async fn login(headers: HeaderMap, Json(body): Json<Credentials>) -> Response {
    let user = match (body.email.as_str(), body.password.as_str()) {
        ("admin@hotel.com", "admin123") => MockBackend::admin(),
        ("guest@hotel.com", "guest123") => User {
            id: 3,
            first_name: "Gus".to_string(),
            last_name: "Guest".to_string(),
            email: "guest@hotel.com".to_string(),
            role: Role::Other("CUSTOMER".to_string()),
        },
        _ => return (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response(),
    };

    let expected = CredentialToken::basic(&body.email, &body.password);
    let sent = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if sent != Some(expected.header_value()) {
        return (StatusCode::UNAUTHORIZED, "Missing basic credentials").into_response();
    }

    Json(json!({ "success": true, "user": user, "message": "Login successful" })).into_response()
}

fn with_id<T: DeserializeOwned>(mut body: Value, id: i64) -> Result<T, StatusCode> {
    body["id"] = json!(id);
    serde_json::from_value(body).map_err(|_| StatusCode::BAD_REQUEST)
}

fn replace<T: Clone>(items: &mut [T], found: impl Fn(&T) -> bool, new: T) -> HandlerResult<T> {
    let slot = items.iter_mut().find(|item| found(item)).ok_or(StatusCode::NOT_FOUND)?;
    *slot = new.clone();
    Ok(Json(new))
}

fn remove<T>(items: &mut Vec<T>, found: impl Fn(&T) -> bool) -> StatusCode {
    let before = items.len();
    items.retain(|item| !found(item));
    if items.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

// Hotels

async fn list_hotels(State(state): State<Arc<MockState>>) -> Json<Vec<Hotel>> {
    Json(state.data.lock().unwrap().hotels.clone())
}

async fn search_hotels(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Hotel>> {
    let is_match = |hotel: &Hotel| {
        let text = |key: &str, value: &str, exact: bool| match params.get(key) {
            Some(wanted) if exact => value.eq_ignore_ascii_case(wanted),
            Some(wanted) => value.to_lowercase().contains(&wanted.to_lowercase()),
            None => true,
        };
        let min_rating = params
            .get("minRating")
            .and_then(|r| r.parse::<f64>().ok())
            .map_or(true, |min| hotel.rating.unwrap_or(0.0) >= min);

        text("name", &hotel.name, false)
            && text("city", &hotel.city, true)
            && text("country", &hotel.country, true)
            && min_rating
    };

    let data = state.data.lock().unwrap();
    Json(data.hotels.iter().filter(|h| is_match(h)).cloned().collect())
}

async fn get_hotel(State(state): State<Arc<MockState>>, Path(id): Path<i64>) -> HandlerResult<Hotel> {
    let data = state.data.lock().unwrap();
    data.hotels
        .iter()
        .find(|h| h.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_hotel(
    State(state): State<Arc<MockState>>,
    Json(body): Json<Value>,
) -> HandlerResult<Hotel> {
    let mut data = state.data.lock().unwrap();
    let hotel: Hotel = with_id(body, data.allocate_id())?;
    data.hotels.push(hotel.clone());
    Ok(Json(hotel))
}

async fn update_hotel(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> HandlerResult<Hotel> {
    let hotel: Hotel = with_id(body, id)?;
    replace(&mut state.data.lock().unwrap().hotels, |h| h.id == id, hotel)
}

async fn delete_hotel(State(state): State<Arc<MockState>>, Path(id): Path<i64>) -> StatusCode {
    remove(&mut state.data.lock().unwrap().hotels, |h| h.id == id)
}

// Rooms

async fn list_rooms(State(state): State<Arc<MockState>>) -> Json<Vec<Room>> {
    Json(state.data.lock().unwrap().rooms.clone())
}

async fn rooms_by_hotel(
    State(state): State<Arc<MockState>>,
    Path(hotel_id): Path<i64>,
) -> Json<Vec<Room>> {
    let data = state.data.lock().unwrap();
    Json(data.rooms.iter().filter(|r| r.hotel_id == hotel_id).cloned().collect())
}

async fn available_rooms_by_hotel(
    State(state): State<Arc<MockState>>,
    Path(hotel_id): Path<i64>,
) -> Json<Vec<Room>> {
    let data = state.data.lock().unwrap();
    Json(
        data.rooms
            .iter()
            .filter(|r| r.hotel_id == hotel_id && r.status == RoomStatus::Available)
            .cloned()
            .collect(),
    )
}

async fn get_room(State(state): State<Arc<MockState>>, Path(id): Path<i64>) -> HandlerResult<Room> {
    let data = state.data.lock().unwrap();
    data.rooms
        .iter()
        .find(|r| r.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_room(
    State(state): State<Arc<MockState>>,
    Json(body): Json<Value>,
) -> HandlerResult<Room> {
    let mut data = state.data.lock().unwrap();
    let room: Room = with_id(body, data.allocate_id())?;
    data.rooms.push(room.clone());
    Ok(Json(room))
}

async fn update_room(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> HandlerResult<Room> {
    let room: Room = with_id(body, id)?;
    replace(&mut state.data.lock().unwrap().rooms, |r| r.id == id, room)
}

async fn delete_room(State(state): State<Arc<MockState>>, Path(id): Path<i64>) -> StatusCode {
    remove(&mut state.data.lock().unwrap().rooms, |r| r.id == id)
}

// Room types

async fn list_room_types(State(state): State<Arc<MockState>>) -> Json<Vec<RoomType>> {
    Json(state.data.lock().unwrap().room_types.clone())
}

async fn room_types_by_hotel(
    State(state): State<Arc<MockState>>,
    Path(hotel_id): Path<i64>,
) -> Json<Vec<RoomType>> {
    let data = state.data.lock().unwrap();
    Json(
        data.room_types
            .iter()
            .filter(|t| t.hotel_id == hotel_id)
            .cloned()
            .collect(),
    )
}

async fn get_room_type(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
) -> HandlerResult<RoomType> {
    let data = state.data.lock().unwrap();
    data.room_types
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_room_type(
    State(state): State<Arc<MockState>>,
    Json(body): Json<Value>,
) -> HandlerResult<RoomType> {
    let mut data = state.data.lock().unwrap();
    let room_type: RoomType = with_id(body, data.allocate_id())?;
    data.room_types.push(room_type.clone());
    Ok(Json(room_type))
}

async fn update_room_type(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> HandlerResult<RoomType> {
    let room_type: RoomType = with_id(body, id)?;
    replace(&mut state.data.lock().unwrap().room_types, |t| t.id == id, room_type)
}

async fn delete_room_type(State(state): State<Arc<MockState>>, Path(id): Path<i64>) -> StatusCode {
    remove(&mut state.data.lock().unwrap().room_types, |t| t.id == id)
}

// Bookings

async fn list_bookings(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, i64>>,
) -> Json<Vec<Booking>> {
    let data = state.data.lock().unwrap();
    let user = params.get("userId");
    let hotel = params.get("hotelId");
    Json(
        data.bookings
            .iter()
            .filter(|b| user.map_or(true, |id| b.user_id == *id))
            .filter(|b| hotel.map_or(true, |id| b.hotel_id == *id))
            .cloned()
            .collect(),
    )
}

async fn get_booking(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
) -> HandlerResult<Booking> {
    state.booking(id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_booking(
    State(state): State<Arc<MockState>>,
    Json(mut body): Json<Value>,
) -> HandlerResult<Booking> {
    body["bookingStatus"] = json!("PENDING");
    body["paymentStatus"] = json!("PENDING");
    body["createdAt"] = json!(Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string());

    let mut data = state.data.lock().unwrap();
    let booking: Booking = with_id(body, data.allocate_id())?;
    data.bookings.push(booking.clone());
    Ok(Json(booking))
}

async fn update_booking(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> HandlerResult<Booking> {
    let existing = state.booking(id).ok_or(StatusCode::NOT_FOUND)?;
    let mut merged = serde_json::to_value(&existing).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    if let (Some(target), Value::Object(fields)) = (merged.as_object_mut(), body) {
        target.extend(fields);
    }
    let booking: Booking = with_id(merged, id)?;
    replace(&mut state.data.lock().unwrap().bookings, |b| b.id == id, booking)
}

async fn delete_booking(State(state): State<Arc<MockState>>, Path(id): Path<i64>) -> StatusCode {
    remove(&mut state.data.lock().unwrap().bookings, |b| b.id == id)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusChange {
    #[serde(default)]
    status: Option<BookingStatus>,
    changed_by: i64,
    reason: String,
}

fn transition(state: &MockState, id: i64, to: BookingStatus, change: &StatusChange) -> HandlerResult<Booking> {
    let mut data = state.data.lock().unwrap();
    let history_id = data.allocate_id();
    let booking = data
        .bookings
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;

    let from = std::mem::replace(&mut booking.booking_status, to.clone());
    let updated = booking.clone();
    data.history.push(json!({
        "id": history_id,
        "bookingId": id,
        "statusFrom": from,
        "statusTo": to,
        "changedBy": change.changed_by,
        "changeReason": change.reason,
        "createdAt": Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string(),
    }));
    Ok(Json(updated))
}

async fn update_booking_status(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    Json(change): Json<StatusChange>,
) -> HandlerResult<Booking> {
    let to = change.status.clone().ok_or(StatusCode::BAD_REQUEST)?;
    transition(&state, id, to, &change)
}

async fn cancel_booking(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
    Json(change): Json<StatusChange>,
) -> HandlerResult<Booking> {
    transition(&state, id, BookingStatus::Cancelled, &change)
}

async fn booking_history(
    State(state): State<Arc<MockState>>,
    Path(id): Path<i64>,
) -> Json<Vec<Value>> {
    let data = state.data.lock().unwrap();
    Json(
        data.history
            .iter()
            .filter(|entry| entry["bookingId"] == json!(id))
            .cloned()
            .collect(),
    )
}

async fn bookings_in_range(
    State(state): State<Arc<MockState>>,
    Path(hotel_id): Path<i64>,
    Query(params): Query<HashMap<String, NaiveDate>>,
) -> HandlerResult<Vec<Booking>> {
    let (start, end) = match (params.get("startDate"), params.get("endDate")) {
        (Some(start), Some(end)) => (*start, *end),
        _ => return Err(StatusCode::BAD_REQUEST),
    };
    let data = state.data.lock().unwrap();
    Ok(Json(
        data.bookings
            .iter()
            .filter(|b| b.hotel_id == hotel_id)
            .filter(|b| b.check_in_date <= end && b.check_out_date >= start)
            .cloned()
            .collect(),
    ))
}

async fn room_availability(
    State(state): State<Arc<MockState>>,
    Path(room_id): Path<i64>,
    Query(params): Query<HashMap<String, NaiveDate>>,
) -> HandlerResult<Value> {
    let (check_in, check_out) = match (params.get("checkIn"), params.get("checkOut")) {
        (Some(check_in), Some(check_out)) => (*check_in, *check_out),
        _ => return Err(StatusCode::BAD_REQUEST),
    };
    let data = state.data.lock().unwrap();
    let taken = data.bookings.iter().any(|b| {
        b.room_id == room_id
            && b.booking_status != BookingStatus::Cancelled
            && b.check_in_date < check_out
            && b.check_out_date > check_in
    });
    Ok(Json(json!({ "available": !taken })))
}
