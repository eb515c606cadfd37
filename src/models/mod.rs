//! Domain records exchanged with the backend
//!
//! All records are ephemeral copies of backend-owned data. Wire names are
//! camelCase; status fields accept values this client has never seen and
//! keep them verbatim so they can still be displayed.

/// Visual tone of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

/// Label and tone used to render a status value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: Tone,
}

impl StatusBadge {
    pub fn new(label: &str, tone: Tone) -> Self {
        Self {
            label: label.to_string(),
            tone,
        }
    }

    /// Badge for a value outside the known set
    pub fn neutral(raw: &str) -> Self {
        let label = if raw.trim().is_empty() { "Unknown" } else { raw };
        Self::new(label, Tone::Neutral)
    }
}

/// A status string that does not name a known status
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown status: {0}")]
pub struct UnknownStatus(pub String);

/// Declares a wire status enum with a catch-all `Other` variant.
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($wire:literal, $label:literal, $tone:ident)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A value this client does not know, kept verbatim
            Other(String),
        }

        impl $name {
            /// Every known value, in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Other(raw) => raw.as_str(),
                }
            }

            pub fn badge(&self) -> $crate::models::StatusBadge {
                match self {
                    $($name::$variant => {
                        $crate::models::StatusBadge::new($label, $crate::models::Tone::$tone)
                    })+
                    $name::Other(raw) => $crate::models::StatusBadge::neutral(raw),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $($wire => $name::$variant,)+
                    _ => $name::Other(raw),
                }
            }
        }

        impl From<$name> for String {
            fn from(status: $name) -> String {
                status.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::UnknownStatus;

            /// Parses a known value; accepts any case and `-` in place of `_`.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
                match $name::from(normalized) {
                    $name::Other(_) => Err($crate::models::UnknownStatus(s.to_string())),
                    known => Ok(known),
                }
            }
        }
    };
}

mod booking;
mod hotel;
mod room;
mod user;

pub use booking::{Availability, Booking, BookingDraft, BookingHistoryEntry, BookingStatus, PaymentStatus};
pub use hotel::{Hotel, HotelForm, HotelSearch, ValidationError};
pub use room::{Room, RoomDraft, RoomStatus, RoomType, RoomTypeDraft};
pub use user::{LoginResponse, Role, User};

/// Lenient date/time decoding for backend timestamps
pub(crate) mod wire {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer};

    fn parse_date(raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| parse_datetime(raw).map(|dt| dt.date()))
    }

    fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt);
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    /// `YYYY-MM-DD`, or a full timestamp whose date part is taken
    pub fn date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
    }

    /// Optional timestamp; unparseable values decode as `None`
    pub fn optional_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_datetime))
    }
}
