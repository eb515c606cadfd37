//! Navigation chrome shared by every signed-in page

use crate::models::User;
use crate::router::{Navigator, Route};
use crate::session::Session;

/// Sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub description: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        route: Route::Dashboard,
        label: "Dashboard",
        description: "Overview & Analytics",
    },
    NavItem {
        route: Route::Hotels,
        label: "Hotels",
        description: "Manage Properties",
    },
    NavItem {
        route: Route::Rooms,
        label: "Rooms",
        description: "Room Management",
    },
    NavItem {
        route: Route::Bookings,
        label: "Bookings",
        description: "Reservation System",
    },
];

pub fn page_title(route: Route) -> &'static str {
    match route {
        Route::Login => "Sign In",
        Route::Dashboard => "Dashboard",
        Route::Hotels => "Hotels Management",
        Route::Rooms => "Rooms Management",
        Route::Bookings => "Bookings Management",
    }
}

pub fn page_description(route: Route) -> &'static str {
    match route {
        Route::Login => "Administrator access only",
        Route::Dashboard => "Overview of your hotel operations",
        Route::Hotels => "Manage your hotel properties",
        Route::Rooms => "Control room availability and status",
        Route::Bookings => "Monitor and manage reservations",
    }
}

/// Header of the page at `path`
pub fn page_header(path: &str) -> (&'static str, &'static str) {
    let route = Route::from_path(path);
    (page_title(route), page_description(route))
}

/// What the user menu shows for the signed-in operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBadge {
    pub initials: String,
    pub name: String,
    pub email: String,
    pub role_label: &'static str,
}

impl UserBadge {
    pub fn for_user(user: Option<&User>) -> Self {
        match user {
            Some(user) => Self {
                initials: user.initials(),
                name: user.display_name(),
                email: user.email.clone(),
                role_label: "Administrator",
            },
            None => Self {
                initials: "A".to_string(),
                name: String::new(),
                email: String::new(),
                role_label: "Administrator",
            },
        }
    }
}

/// Sign out from the user menu and land on the login page
pub async fn sign_out(session: &Session, navigator: &mut Navigator) {
    session.logout().await;
    navigator.navigate(Route::Login, &session.state().await);
}
