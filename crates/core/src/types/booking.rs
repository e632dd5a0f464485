//! Booking entity and creation payload.

use serde::{Deserialize, Serialize};

use super::id::{BookingId, MovieId, UserId};

/// Seat field as it appears on the wire.
///
/// Normally an ordered list of seat labels ("A3", "B7", ...), but legacy
/// rows may carry a bare string instead. Both shapes must survive a
/// collection fetch, so the raw form is kept verbatim rather than rejected;
/// one malformed row must never sink the whole bookings panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seats {
    /// The expected shape: seat labels in booking order.
    Labels(Vec<String>),
    /// A legacy scalar value, rendered as-is.
    Raw(String),
}

impl Seats {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Labels(labels) => labels.is_empty(),
            Self::Raw(raw) => raw.is_empty(),
        }
    }
}

impl From<Vec<String>> for Seats {
    fn from(labels: Vec<String>) -> Self {
        Self::Labels(labels)
    }
}

/// A seat booking, as served by `GET /bookings/`.
///
/// `user_id` and `movie_id` reference the users and movies collections but
/// are NOT validated client-side: a dangling reference is rendered as the
/// raw id string rather than treated as an error. `id`, `seats` and
/// `booking_date` may be absent (or null) on older rows, so all three are
/// optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BookingId>,
    pub user_id: UserId,
    pub movie_id: MovieId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<Seats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_date: Option<String>,
}

/// Payload for `POST /bookings/`.
///
/// The id and booking date are assigned remotely. New bookings always send
/// a seat list; only reads have to tolerate the legacy scalar shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub seats: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_uses_camel_case_wire_names() {
        let json = r#"{"id":"b1","userId":"u1","movieId":"m1","seats":["A3","B7"]}"#;
        let booking: Booking = serde_json::from_str(json).expect("deserialize");
        assert_eq!(booking.user_id.as_str(), "u1");
        assert_eq!(booking.movie_id.as_str(), "m1");
        assert_eq!(
            booking.seats,
            Some(Seats::Labels(vec!["A3".to_owned(), "B7".to_owned()]))
        );
        assert_eq!(booking.booking_date, None);
    }

    #[test]
    fn test_booking_tolerates_missing_id_and_seats() {
        let json = r#"{"userId":"u1","movieId":"m1"}"#;
        let booking: Booking = serde_json::from_str(json).expect("deserialize");
        assert_eq!(booking.id, None);
        assert_eq!(booking.seats, None);
    }

    #[test]
    fn test_booking_accepts_scalar_seats() {
        let json = r#"{"userId":"u1","movieId":"m1","seats":"A3"}"#;
        let booking: Booking = serde_json::from_str(json).expect("deserialize");
        assert_eq!(booking.seats, Some(Seats::Raw("A3".to_owned())));

        let json = r#"{"userId":"u1","movieId":"m1","seats":null}"#;
        let booking: Booking = serde_json::from_str(json).expect("deserialize");
        assert_eq!(booking.seats, None);
    }

    #[test]
    fn test_one_scalar_seats_row_does_not_sink_the_collection() {
        let json = r#"[
            {"id":"b1","userId":"u1","movieId":"m1","seats":["A3"]},
            {"id":"b2","userId":"u1","movieId":"m1","seats":"B7"}
        ]"#;
        let bookings: Vec<Booking> = serde_json::from_str(json).expect("deserialize");
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[1].seats, Some(Seats::Raw("B7".to_owned())));
    }

    #[test]
    fn test_new_booking_serializes_camel_case() {
        let payload = NewBooking {
            user_id: UserId::new("u1"),
            movie_id: MovieId::new("m1"),
            seats: vec!["C2".to_owned()],
        };
        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["movieId"], "m1");
        assert!(json.get("user_id").is_none());
    }
}
