//! Bookings panel and booking creation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::IntoResponse};
use rand::Rng;
use serde::Deserialize;
use tracing::instrument;

use marquee_core::{MovieId, NewBooking, UserId};

use super::users::{FormErrorTemplate, LoadErrorTemplate};
use crate::state::AppState;
use crate::view::{self, BookingRow};

/// Fallback user id when the users slot is empty - there is no login
/// system, so booking under a literal id is the documented stand-in.
const DEFAULT_USER_ID: &str = "user-1";

/// Bookings panel fragment.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/bookings.html")]
pub struct BookingsTemplate {
    pub rows: Vec<BookingRow>,
}

/// Booking confirmation fragment.
#[derive(Template, WebTemplate)]
#[template(path = "fragments/booking_success.html")]
pub struct BookingSuccessTemplate {
    pub movie_title: String,
    pub seats: String,
}

/// Booking form data; the movie id and title come from the clicked row.
#[derive(Debug, Deserialize)]
pub struct CreateBookingForm {
    pub movie_id: String,
    pub movie_title: String,
}

/// Bookings panel (HTMX).
///
/// Resolves userId/movieId against the current users/movies snapshots; an
/// unresolved reference renders as the raw id.
#[instrument(skip(state))]
pub async fn list_fragment(State(state): State<AppState>) -> impl IntoResponse {
    match state.cache().refresh_bookings(state.client()).await {
        Ok(bookings) => {
            let rows = view::booking_rows(
                &bookings,
                &state.cache().users(),
                &state.cache().movies(),
                &view::today_label(),
            );
            BookingsTemplate { rows }.into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load bookings");
            LoadErrorTemplate {
                message: "예약 데이터 로딩 실패".to_owned(),
            }
            .into_response()
        }
    }
}

/// Create a booking (HTMX).
///
/// Synthesizes 1-4 random seats, books them under the first cached user
/// (or the literal fallback id when the slot is empty), then refreshes the
/// bookings slot so the panel repaints from fresh data. On failure nothing
/// local was mutated, so an inline error is all that is needed.
#[instrument(skip(state, form), fields(movie_id = %form.movie_id))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CreateBookingForm>,
) -> impl IntoResponse {
    let user_id = state
        .cache()
        .first_user()
        .map_or_else(|| UserId::new(DEFAULT_USER_ID), |u| u.id);

    let payload = NewBooking {
        user_id,
        movie_id: MovieId::new(form.movie_id),
        seats: synthesize_seats(&mut rand::rng()),
    };

    match state.client().create_booking(&payload).await {
        Ok(booking) => {
            tracing::info!(seats = ?booking.seats, "Booking created");
            // create-then-refresh: repaint the panel from the new snapshot
            if let Err(e) = state.cache().refresh_bookings(state.client()).await {
                tracing::warn!(error = %e, "Bookings refresh after create failed");
            }
            (
                [("HX-Trigger", "bookingsUpdated")],
                BookingSuccessTemplate {
                    movie_title: form.movie_title,
                    seats: payload.seats.join(", "),
                },
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Booking creation failed");
            FormErrorTemplate {
                message: "예약 처리 중 오류가 발생했습니다.".to_owned(),
            }
            .into_response()
        }
    }
}

/// Synthesize a random seat assignment: 1-4 seats, each a row letter A-E
/// paired with a number 1-10, independently randomized per seat. Two seats
/// may collide - accepted as a demo simplification.
fn synthesize_seats<R: Rng>(rng: &mut R) -> Vec<String> {
    let count = rng.random_range(1..=4);
    (0..count)
        .map(|_| {
            let row = char::from(b'A' + rng.random_range(0..5));
            let number = rng.random_range(1..=10);
            format!("{row}{number}")
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_seats_match_pattern() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let seats = synthesize_seats(&mut rng);
            assert!((1..=4).contains(&seats.len()));
            for seat in &seats {
                let mut chars = seat.chars();
                let row = chars.next().unwrap();
                assert!(('A'..='E').contains(&row), "bad row in {seat}");
                let number: u32 = chars.as_str().parse().unwrap();
                assert!((1..=10).contains(&number), "bad number in {seat}");
            }
        }
    }
}
