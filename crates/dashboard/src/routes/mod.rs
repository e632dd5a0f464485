//! HTTP route handlers for the dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                      - Dashboard shell
//!
//! # Panels (HTMX fragments, refreshed from the remote API on each load)
//! GET  /fragments/users       - Users panel
//! GET  /fragments/movies      - Movies panel (with booking buttons)
//! GET  /fragments/bookings    - Bookings panel
//! GET  /fragments/deployment  - Deployment status panel
//!
//! # Actions
//! POST /users                 - Create user (returns confirmation fragment)
//! POST /bookings              - Create booking (returns confirmation fragment)
//! ```
//!
//! Each panel fragment refreshes its own cache slot before rendering; a
//! failed refresh replaces only that panel with an explicit load-failure
//! message and leaves the other panels untouched.

pub mod bookings;
pub mod deployment;
pub mod movies;
pub mod pages;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the main dashboard router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/fragments/users", get(users::list_fragment))
        .route("/fragments/movies", get(movies::list_fragment))
        .route("/fragments/bookings", get(bookings::list_fragment))
        .route("/fragments/deployment", get(deployment::status_fragment))
        .route("/users", post(users::create))
        .route("/bookings", post(bookings::create))
}
