//! Plain-text rendering for the terminal front end

use chrono::NaiveDate;
use std::fmt::Write;

use crate::models::{Booking, BookingHistoryEntry, Hotel, RoomType, StatusBadge};
use crate::views::dashboard::DashboardStats;
use crate::views::RoomRow;

/// `$1,234.50`
pub fn money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

pub fn badge(badge: &StatusBadge) -> String {
    format!("[{}]", badge.label)
}

fn stars(count: u8) -> String {
    let count = usize::from(count.min(5));
    format!("{}{}", "★".repeat(count), "☆".repeat(5 - count))
}

pub fn hotels_table(hotels: &[&Hotel]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:<28} {:<24} {:<14} {}",
        "ID", "Name", "Location", "Country", "Rating"
    );
    let _ = writeln!(out, "{}", "-".repeat(82));
    for hotel in hotels {
        let _ = writeln!(
            out,
            "{:<6} {:<28} {:<24} {:<14} {}",
            hotel.id,
            hotel.name,
            hotel.locality(),
            hotel.country,
            stars(hotel.stars())
        );
    }
    out
}

pub fn hotel_detail(hotel: &Hotel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", hotel.name, hotel.id);
    let _ = writeln!(out, "  {}", stars(hotel.stars()));
    if let Some(description) = hotel.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "  {}", description);
    }
    let _ = writeln!(out, "  Address: {}", hotel.address);
    let _ = writeln!(out, "  City:    {}", hotel.locality());
    let _ = writeln!(out, "  Country: {}", hotel.country);

    let optional = [
        ("Postal", &hotel.postal_code),
        ("Phone", &hotel.phone),
        ("Email", &hotel.email),
    ];
    for (label, value) in optional {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            let _ = writeln!(out, "  {:<8} {}", format!("{}:", label), value);
        }
    }
    out
}

pub fn rooms_table(rows: &[RoomRow<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:<8} {:<24} {:<16} {:>10} {:>5} {}",
        "ID", "Room", "Hotel", "Type", "Price", "Cap", "Status"
    );
    let _ = writeln!(out, "{}", "-".repeat(86));
    for row in rows {
        let _ = writeln!(
            out,
            "{:<6} {:<8} {:<24} {:<16} {:>10} {:>5} {}",
            row.room.id,
            row.room.room_number,
            row.hotel_name,
            row.room_type_name,
            money(row.price),
            row.capacity,
            badge(&row.room.status.badge())
        );
    }
    out
}

pub fn room_types_table(room_types: &[RoomType]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:<8} {:<20} {:>10} {:>5}",
        "ID", "Hotel", "Name", "Price", "Cap"
    );
    let _ = writeln!(out, "{}", "-".repeat(53));
    for room_type in room_types {
        let _ = writeln!(
            out,
            "{:<6} {:<8} {:<20} {:>10} {:>5}",
            room_type.id,
            room_type.hotel_id,
            room_type.name,
            money(room_type.base_price),
            room_type.max_occupancy
        );
    }
    out
}

pub fn bookings_table(
    bookings: &[&Booking],
    hotel_name: impl Fn(i64) -> String,
    today: NaiveDate,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:<22} {:<6} {:<24} {:>11} {:<15} {}",
        "ID", "Hotel", "Room", "Stay", "Amount", "Status", "Payment"
    );
    let _ = writeln!(out, "{}", "-".repeat(100));
    for booking in bookings {
        let mut stay = format!("{} → {}", booking.check_in_date, booking.check_out_date);
        if let Some(hint) = booking.check_in_hint(today) {
            let _ = write!(stay, " ({})", hint);
        }
        let _ = writeln!(
            out,
            "{:<6} {:<22} {:<6} {:<24} {:>11} {:<15} {}",
            booking.id,
            hotel_name(booking.hotel_id),
            booking.room_id,
            stay,
            booking.total_amount.map(money).unwrap_or_else(|| "-".to_string()),
            badge(&booking.booking_status.badge()),
            badge(&booking.payment_status.badge())
        );
    }
    out
}

pub fn booking_detail(booking: &Booking, hotel_name: &str, today: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Booking #{} {}",
        booking.id,
        badge(&booking.booking_status.badge())
    );
    let _ = writeln!(out, "  Hotel:    {} (room {})", hotel_name, booking.room_id);
    let _ = writeln!(out, "  Guest:    user {}", booking.user_id);
    let _ = writeln!(
        out,
        "  Stay:     {} → {} ({} night{})",
        booking.check_in_date,
        booking.check_out_date,
        booking.nights(),
        if booking.nights() == 1 { "" } else { "s" }
    );
    if let Some(hint) = booking.check_in_hint(today) {
        let _ = writeln!(out, "  Arrives:  {}", hint);
    }
    let _ = writeln!(out, "  Guests:   {}", booking.guests_label());
    let _ = writeln!(
        out,
        "  Amount:   {} {}",
        booking.total_amount.map(money).unwrap_or_else(|| "-".to_string()),
        badge(&booking.payment_status.badge())
    );
    if let Some(requests) = booking.special_requests.as_deref().filter(|r| !r.is_empty()) {
        let _ = writeln!(out, "  Requests: {}", requests);
    }
    if let Some(created) = booking.created_at {
        let _ = writeln!(out, "  Created:  {}", created.format("%Y-%m-%d %H:%M"));
    }
    out
}

pub fn history_table(entries: &[BookingHistoryEntry]) -> String {
    if entries.is_empty() {
        return "No history available for this booking\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        let when = entry
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let from = entry
            .status_from
            .as_ref()
            .map(|s| s.badge().label)
            .unwrap_or_else(|| "New".to_string());
        let _ = write!(out, "{:<16} {} → {}", when, from, entry.status_to.badge().label);
        if let Some(by) = entry.changed_by {
            let _ = write!(out, " by user {}", by);
        }
        if let Some(reason) = entry.change_reason.as_deref() {
            let _ = write!(out, ": {}", reason);
        }
        out.push('\n');
    }
    out
}

pub fn dashboard(
    stats: &DashboardStats,
    recent: &[&Booking],
    hotel_name: impl Fn(i64) -> String,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<18} {:>8}   Active properties", "Total Hotels", stats.total_hotels);
    let _ = writeln!(
        out,
        "{:<18} {:>8}   {} available",
        "Total Rooms", stats.total_rooms, stats.available_rooms
    );
    let _ = writeln!(
        out,
        "{:<18} {:>8}   of {} total",
        "Active Bookings", stats.active_bookings, stats.total_bookings
    );
    let _ = writeln!(
        out,
        "{:<18} {:>7.1}%   {} occupied rooms",
        "Occupancy Rate", stats.occupancy_rate, stats.occupied_rooms
    );
    let _ = writeln!(out, "{:<18} {:>8}", "Revenue", money(stats.revenue));
    let _ = writeln!(out);
    let _ = writeln!(out, "Recent Bookings");
    let _ = writeln!(out, "{}", "-".repeat(60));

    if recent.is_empty() {
        let _ = writeln!(out, "No recent bookings");
    }
    for booking in recent {
        let _ = writeln!(
            out,
            "#{:<6} {:<22} {}  {:<15} {}",
            booking.id,
            hotel_name(booking.hotel_id),
            booking.check_in_date,
            badge(&booking.booking_status.badge()),
            booking.total_amount.map(money).unwrap_or_else(|| "-".to_string())
        );
    }
    out
}
