//! Routes and access gates
//!
//! Every page is reached through a [`Navigator`], which consults the gate of
//! the requested route against the current [`SessionState`]. Until the
//! session has been restored every decision is [`GateDecision::Loading`].

use std::fmt;

use crate::api::SessionExpired;
use crate::session::SessionState;

/// A page of the admin console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Hotels,
    Rooms,
    Bookings,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Login,
        Route::Dashboard,
        Route::Hotels,
        Route::Rooms,
        Route::Bookings,
    ];

    /// Resolve a location path; `/` and anything unknown land on the dashboard
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        Route::ALL
            .into_iter()
            .find(|route| route.path() == trimmed)
            .unwrap_or(Route::Dashboard)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Hotels => "/hotels",
            Route::Rooms => "/rooms",
            Route::Bookings => "/bookings",
        }
    }

    pub fn gate(&self) -> Gate {
        match self {
            Route::Login => Gate::RequireAnonymous,
            _ => Gate::RequireAuth,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Who may see a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    RequireAuth,
    RequireAnonymous,
}

/// Outcome of checking a gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The session is still being restored
    Loading,
    Allow,
    Redirect(Route),
}

impl Gate {
    pub fn decide(&self, state: &SessionState) -> GateDecision {
        if state.is_loading() {
            return GateDecision::Loading;
        }

        match (self, state.is_authenticated()) {
            (Gate::RequireAuth, true) | (Gate::RequireAnonymous, false) => GateDecision::Allow,
            (Gate::RequireAuth, false) => GateDecision::Redirect(Route::Login),
            (Gate::RequireAnonymous, true) => GateDecision::Redirect(Route::Dashboard),
        }
    }
}

/// Tracks the current route and applies gates on every transition
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Option<Route>,
    pending: Option<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: None,
            pending: None,
        }
    }

    /// The route on screen; `None` until a navigation has been allowed
    pub fn current(&self) -> Option<Route> {
        self.current
    }

    /// Route requested while the session was loading
    pub fn pending(&self) -> Option<Route> {
        self.pending
    }

    /// Go to `target` if its gate allows, otherwise follow the redirect
    pub fn navigate(&mut self, target: Route, state: &SessionState) -> GateDecision {
        let decision = target.gate().decide(state);
        match decision {
            GateDecision::Loading => {
                self.pending = Some(target);
            }
            GateDecision::Allow => {
                self.pending = None;
                self.current = Some(target);
            }
            GateDecision::Redirect(to) => {
                tracing::debug!(from = %target, %to, "Redirecting");
                self.pending = None;
                self.current = Some(to);
            }
        }
        decision
    }

    /// Replay a navigation requested while loading, once the session resolved
    pub fn resolve(&mut self, state: &SessionState) -> Option<GateDecision> {
        let target = self.pending?;
        Some(self.navigate(target, state))
    }

    /// Unwrap a view outcome; an expired session sends the operator to login
    pub fn observe<T>(&mut self, outcome: Result<T, SessionExpired>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(SessionExpired) => {
                self.pending = None;
                self.current = Some(Route::Login);
                None
            }
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, User};
    use crate::session::CredentialToken;

    fn signed_in() -> SessionState {
        SessionState::Authenticated {
            principal: User {
                id: 1,
                first_name: "Ada".to_string(),
                last_name: "Admin".to_string(),
                email: "admin@hotel.com".to_string(),
                role: Role::Admin,
            },
            token: CredentialToken::basic("admin@hotel.com", "admin123"),
        }
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/hotels"), Route::Hotels);
        assert_eq!(Route::from_path("/rooms/"), Route::Rooms);
        assert_eq!(Route::from_path("/bookings?status=PENDING"), Route::Bookings);
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path("/reports"), Route::Dashboard);
        assert_eq!(Route::from_path("/login"), Route::Login);
    }

    #[test]
    fn test_gates() {
        let anonymous = SessionState::Anonymous;
        assert_eq!(
            Gate::RequireAuth.decide(&anonymous),
            GateDecision::Redirect(Route::Login)
        );
        assert_eq!(Gate::RequireAnonymous.decide(&anonymous), GateDecision::Allow);

        let authed = signed_in();
        assert_eq!(Gate::RequireAuth.decide(&authed), GateDecision::Allow);
        assert_eq!(
            Gate::RequireAnonymous.decide(&authed),
            GateDecision::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn test_loading_never_redirects() {
        for state in [SessionState::Uninitialized, SessionState::Restoring] {
            for route in Route::ALL {
                assert_eq!(route.gate().decide(&state), GateDecision::Loading);
            }
        }
    }

    #[test]
    fn test_navigation_waits_for_restore() {
        let mut nav = Navigator::new();
        assert_eq!(nav.navigate(Route::Rooms, &SessionState::Restoring), GateDecision::Loading);
        assert_eq!(nav.current(), None);
        assert_eq!(nav.pending(), Some(Route::Rooms));

        assert_eq!(nav.resolve(&signed_in()), Some(GateDecision::Allow));
        assert_eq!(nav.current(), Some(Route::Rooms));
        assert_eq!(nav.resolve(&signed_in()), None);
    }

    #[test]
    fn test_signed_in_user_bounced_from_login() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Login, &signed_in());
        assert_eq!(nav.current(), Some(Route::Dashboard));
    }

    #[test]
    fn test_observe_expiry() {
        let mut nav = Navigator::new();
        nav.navigate(Route::Hotels, &signed_in());

        assert_eq!(nav.observe(Ok::<_, SessionExpired>(3)), Some(3));
        assert_eq!(nav.current(), Some(Route::Hotels));

        assert_eq!(nav.observe::<()>(Err(SessionExpired)), None);
        assert_eq!(nav.current(), Some(Route::Login));
    }
}
