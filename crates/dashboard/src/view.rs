//! Render models: pure mappings from cache snapshots to displayable rows.
//!
//! Nothing here performs I/O or touches the cache; snapshots are passed in
//! explicitly so the mapping stays testable. Display order always equals
//! the order the API returned - rows are never reordered here.

use marquee_core::{Booking, DeploymentInfo, Movie, MovieId, Seats, User, UserId};

/// Placeholder for optional fields that are absent on the wire.
pub const MISSING: &str = "N/A";

/// A booking row with foreign-key references resolved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRow {
    /// Server-assigned id, or "N/A" for rows that never got one.
    pub id_label: String,
    /// The referenced user's name, or the raw userId when unresolved.
    pub user_label: String,
    /// The referenced movie's title, or the raw movieId when unresolved.
    pub movie_label: String,
    /// Comma-joined seat labels, a legacy scalar value verbatim, or "N/A"
    /// when seats are absent or empty.
    pub seats_label: String,
    /// Booking date, or the supplied fallback date when absent.
    pub date_label: String,
}

/// Resolve a user id to a display name through the users snapshot.
///
/// An unresolved reference (dangling id, or a users slot that has not
/// loaded yet) falls back to the raw id string - graceful degradation, not
/// an error.
#[must_use]
pub fn resolve_user_name(users: &[User], id: &UserId) -> String {
    users
        .iter()
        .find(|u| &u.id == id)
        .map_or_else(|| id.to_string(), |u| u.name.clone())
}

/// Resolve a movie id to a display title through the movies snapshot.
#[must_use]
pub fn resolve_movie_title(movies: &[Movie], id: &MovieId) -> String {
    movies
        .iter()
        .find(|m| &m.id == id)
        .map_or_else(|| id.to_string(), |m| m.title.clone())
}

/// Build display rows for the bookings panel.
///
/// `fallback_date` substitutes for rows without a booking date; the routes
/// pass today's date so old demo rows still show something sensible.
#[must_use]
pub fn booking_rows(
    bookings: &[Booking],
    users: &[User],
    movies: &[Movie],
    fallback_date: &str,
) -> Vec<BookingRow> {
    bookings
        .iter()
        .map(|booking| BookingRow {
            id_label: booking
                .id
                .as_ref()
                .map_or_else(|| MISSING.to_owned(), ToString::to_string),
            user_label: resolve_user_name(users, &booking.user_id),
            movie_label: resolve_movie_title(movies, &booking.movie_id),
            seats_label: seats_label(booking.seats.as_ref()),
            date_label: booking
                .booking_date
                .clone()
                .unwrap_or_else(|| fallback_date.to_owned()),
        })
        .collect()
}

/// Display form of the seat field. Labels join with ", "; a legacy scalar
/// value renders verbatim; absent or empty seats render the placeholder.
fn seats_label(seats: Option<&Seats>) -> String {
    match seats {
        Some(Seats::Labels(labels)) if !labels.is_empty() => labels.join(", "),
        Some(Seats::Raw(raw)) if !raw.is_empty() => raw.clone(),
        _ => MISSING.to_owned(),
    }
}

/// Summary line for the deployment panel: running services out of total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentSummary {
    pub running: usize,
    pub total: usize,
}

/// Count running services for the deployment panel summary.
#[must_use]
pub fn deployment_summary(services: &[DeploymentInfo]) -> DeploymentSummary {
    DeploymentSummary {
        running: services.iter().filter(|s| s.is_running()).count(),
        total: services.len(),
    }
}

/// Today's date formatted the way the demo displays booking dates.
#[must_use]
pub fn today_label() -> String {
    chrono::Local::now().format("%Y. %-m. %-d.").to_string()
}
