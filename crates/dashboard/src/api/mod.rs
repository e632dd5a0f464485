//! Remote booking API client.
//!
//! # Architecture
//!
//! - The remote API gateway is the source of truth - NO local persistence,
//!   direct JSON calls via `reqwest`
//! - Collection resources (`users`, `movies`, `bookings`) are plain REST:
//!   `GET /{resource}/` lists, `POST /{resource}/` creates and echoes the
//!   created entity back with its server-assigned id
//! - `GET /deployment-status` feeds the informational dashboard panel
//! - No retry, no timeout, no backoff: failures propagate to the caller,
//!   which decides how to render them
//!
//! # Example
//!
//! ```rust,ignore
//! use marquee_dashboard::api::ApiClient;
//!
//! let client = ApiClient::new(&config.api_base_url);
//!
//! let movies = client.list_movies().await?;
//! let booking = client.create_booking(&NewBooking {
//!     user_id: users[0].id.clone(),
//!     movie_id: movies[0].id.clone(),
//!     seats: vec!["A3".to_owned()],
//! }).await?;
//! ```

mod client;

pub use client::ApiClient;

use thiserror::Error;

/// Errors that can occur when talking to the remote booking API.
///
/// `Http` and `Parse` cover the read-side failure mode (transport or
/// JSON-decode trouble on a fetch); `Rejected` covers the write side, where
/// the gateway answered with a non-success status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The gateway rejected a write with a non-success status.
    ///
    /// Carries the operation name so the caller can render a meaningful
    /// inline error next to whichever form triggered it.
    #[error("{operation} rejected with status {status}")]
    Rejected {
        operation: &'static str,
        status: u16,
    },
}
