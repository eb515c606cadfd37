//! Login endpoint

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::Serialize;

use super::client::REQUEST_ID_HEADER;
use super::error::{ApiError, ApiResult};
use super::ApiClient;
use crate::models::LoginResponse;
use crate::session::{Authenticator, CredentialToken};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Check credentials with `POST /api/users/login`
    ///
    /// Sends the credentials both as a Basic `Authorization` header and as a
    /// JSON body. A 401 or 403 here means the credentials were refused. It
    /// is reported as an unsuccessful response and does not touch the
    /// current session.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let token = CredentialToken::basic(email, password);
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::debug!(%request_id, "Sending login request");

        let response = self
            .http()
            .post(self.url("/api/users/login"))
            .header(AUTHORIZATION, token.header_value())
            .header(REQUEST_ID_HEADER, &request_id)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let message = response.text().await.unwrap_or_default();
            return Ok(LoginResponse {
                success: false,
                user: None,
                message: Some(message),
            });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Authenticator for ApiClient {
    async fn authenticate(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.login(email, password).await
    }
}
