//! Application controller
//!
//! Wires configuration, the persisted session, the gateway client and the
//! navigator together, and hands out page views bound to that client.

use std::sync::Arc;

use crate::api::{ApiClient, ApiError, ApiResult, SessionExpired};
use crate::config::Config;
use crate::models::User;
use crate::router::{GateDecision, Navigator, Route};
use crate::session::{LoginError, Session, SessionState};
use crate::shell;
use crate::storage::{FileStore, KeyValueStore};
use crate::views::{BookingsView, DashboardView, HotelsView, RoomsView};

pub struct AdminApp {
    config: Config,
    session: Session,
    client: ApiClient,
    navigator: Navigator,
}

impl AdminApp {
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>) -> ApiResult<Self> {
        let session = Session::new(store);
        let client = ApiClient::new(&config.api, session.clone())?;

        Ok(Self {
            config,
            session,
            client,
            navigator: Navigator::new(),
        })
    }

    /// Persist the session in the configured data directory
    pub fn with_file_store(config: Config) -> ApiResult<Self> {
        let store = FileStore::new(config.storage.session_file());
        Self::new(config, Arc::new(store))
    }

    /// Restore the persisted session and replay any navigation made meanwhile
    pub async fn start(&mut self) -> SessionState {
        let state = self.session.restore().await;
        self.navigator.resolve(&state);
        state
    }

    pub async fn open(&mut self, route: Route) -> GateDecision {
        let state = self.session.state().await;
        self.navigator.navigate(route, &state)
    }

    pub async fn open_path(&mut self, path: &str) -> GateDecision {
        self.open(Route::from_path(path)).await
    }

    /// Route a view outcome; expiry lands on the login page
    pub fn observe<T>(&mut self, outcome: Result<T, SessionExpired>) -> Option<T> {
        if outcome.is_err() {
            tracing::info!("Session expired; returning to login");
        }
        self.navigator.observe(outcome)
    }

    /// Route a direct gateway result; a rejected session lands on the login page
    pub fn observe_call<T>(&mut self, result: ApiResult<T>) -> ApiResult<T> {
        match result {
            Err(ApiError::AuthenticationExpired) => {
                self.observe::<()>(Err(SessionExpired));
                Err(ApiError::AuthenticationExpired)
            }
            other => other,
        }
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, LoginError> {
        let principal = self.session.login(&self.client, email, password).await?;
        self.open(Route::Dashboard).await;
        Ok(principal)
    }

    pub async fn logout(&mut self) {
        shell::sign_out(&self.session, &mut self.navigator).await;
    }

    pub fn current_route(&self) -> Option<Route> {
        self.navigator.current()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn hotels_view(&self) -> HotelsView {
        HotelsView::new(self.client.clone(), self.config.ui.banner_timeout())
    }

    pub fn rooms_view(&self) -> RoomsView {
        RoomsView::new(self.client.clone(), self.config.ui.banner_timeout())
    }

    pub fn bookings_view(&self) -> BookingsView {
        BookingsView::new(self.client.clone(), self.config.ui.banner_timeout())
    }

    pub fn dashboard_view(&self) -> DashboardView {
        DashboardView::new(self.client.clone(), self.config.ui.recent_bookings_limit)
    }
}
