//! Gateway HTTP client
//!
//! Shared request plumbing for the per-domain services.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{ApiError, ApiResult};
use super::{BookingsApi, HotelsApi, RoomTypesApi, RoomsApi};
use crate::config::ApiConfig;
use crate::session::Session;

pub(crate) const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// REST client for the hotel platform backend
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client that authenticates with `session`
    pub fn new(config: &ApiConfig, session: Session) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("hotel-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.normalized_base_url(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session whose token is attached to requests
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn hotels(&self) -> HotelsApi<'_> {
        HotelsApi::new(self)
    }

    pub fn rooms(&self) -> RoomsApi<'_> {
        RoomsApi::new(self)
    }

    pub fn room_types(&self) -> RoomTypesApi<'_> {
        RoomTypesApi::new(self)
    }

    pub fn bookings(&self) -> BookingsApi<'_> {
        BookingsApi::new(self)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Start a request carrying the session token and a fresh request id
    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.url(path))
            .header(REQUEST_ID_HEADER, uuid::Uuid::new_v4().to_string());

        match self.session.token().await {
            Some(token) => builder.header(AUTHORIZATION, token.header_value()),
            None => builder,
        }
    }

    /// Send a request and turn the status code into the error contract
    async fn execute(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let request = builder.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        tracing::debug!(%method, %path, %request_id, "Sending request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(%method, %path, %request_id, "Backend rejected credentials");
            self.session.expire().await;
            return Err(ApiError::AuthenticationExpired);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(
                %method,
                %path,
                %request_id,
                status = status.as_u16(),
                "Request failed"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = self.execute(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let builder = self.request(Method::GET, path).await;
        self.send_json(builder).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).await.query(query);
        self.send_json(builder).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).await.json(body);
        self.send_json(builder).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path).await.json(body);
        self.send_json(builder).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let builder = self.request(Method::DELETE, path).await;
        self.execute(builder).await?;
        Ok(())
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
